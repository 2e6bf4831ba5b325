//! Name generation utilities

use rand::Rng;

/// Generate an archer name: given name plus an epithet.
pub fn archer_name(rng: &mut impl Rng) -> String {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let epithet = EPITHETS[rng.gen_range(0..EPITHETS.len())];
    format!("{} {}", given, epithet)
}

/// Generate a fort name.
pub fn fort_name(rng: &mut impl Rng) -> String {
    let landmark = LANDMARKS[rng.gen_range(0..LANDMARKS.len())];
    format!("Fort {}", landmark)
}

/// Generate a caravan name.
pub fn caravan_name(rng: &mut impl Rng) -> String {
    let trade = TRADES[rng.gen_range(0..TRADES.len())];
    format!("{}'s Caravan", trade)
}

// Sample name lists - would be loaded from data files in production
static GIVEN_NAMES: &[&str] = &[
    "Alden",
    "Berrin",
    "Cedric",
    "Doran",
    "Edwyn",
    "Ferris",
    "Garet",
    "Hale",
    "Isolde",
    "Joren",
    "Kestrel",
    "Lyra",
    "Maren",
    "Nerissa",
    "Osric",
    "Petra",
    "Quill",
    "Rowan",
    "Senna",
    "Tamsin",
];

static EPITHETS: &[&str] = &[
    "Swiftarrow",
    "Longdraw",
    "the Fletcher",
    "of the Vale",
    "Keeneye",
    "Stringtaut",
    "the Younger",
    "Ashbow",
    "Farshot",
    "the Quiet",
];

static LANDMARKS: &[&str] = &[
    "Greywatch",
    "Thornhill",
    "Ravenrest",
    "Coldmere",
    "Highgate",
    "Stonebrook",
    "Emberfall",
    "Westmarch",
];

static TRADES: &[&str] = &[
    "Tinker",
    "Cooper",
    "Chandler",
    "Weaver",
    "Mercer",
    "Farrier",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_names_are_nonempty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(!archer_name(&mut rng).is_empty());
        assert!(fort_name(&mut rng).starts_with("Fort "));
        assert!(caravan_name(&mut rng).ends_with("'s Caravan"));
    }
}
