//! Skirmish mustering — builds a field of actors from a config.

use holdfast_logic::constants::field;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actors::{Archer, Caravan, Fort};

use super::names::{archer_name, caravan_name, fort_name};

/// How many of each actor to muster, and with what starting health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkirmishConfig {
    pub archers: u32,
    pub forts: u32,
    pub caravans: u32,
    pub archer_health: f32,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            archers: 3,
            forts: 1,
            caravans: 1,
            archer_health: 100.0,
        }
    }
}

/// A mustered field of actors.
///
/// Ids are allocated sequentially starting at 1, so a freshly mustered
/// skirmish never violates the caller-side id-uniqueness contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skirmish {
    pub archers: Vec<Archer>,
    pub forts: Vec<Fort>,
    pub caravans: Vec<Caravan>,
}

/// Muster a skirmish: generated names, sequential ids, random positions
/// inside the demo field.
pub fn muster(config: &SkirmishConfig, rng: &mut impl Rng) -> Skirmish {
    let mut next_id = 1u32;
    let mut take_id = || {
        let id = next_id;
        next_id += 1;
        id
    };

    let archers = (0..config.archers)
        .map(|_| {
            let (x, y) = field_position(rng);
            Archer::new(take_id(), archer_name(rng), x, y, config.archer_health)
        })
        .collect();

    let forts = (0..config.forts)
        .map(|_| {
            let (x, y) = field_position(rng);
            Fort::new(take_id(), fort_name(rng), x, y)
        })
        .collect();

    let caravans = (0..config.caravans)
        .map(|_| {
            let (x, y) = field_position(rng);
            Caravan::new(take_id(), caravan_name(rng), x, y)
        })
        .collect();

    let skirmish = Skirmish {
        archers,
        forts,
        caravans,
    };

    log::info!(
        "Mustered {} archers, {} forts, {} caravans",
        skirmish.archers.len(),
        skirmish.forts.len(),
        skirmish.caravans.len()
    );

    skirmish
}

fn field_position(rng: &mut impl Rng) -> (i32, i32) {
    (
        rng.gen_range(0..field::WIDTH),
        rng.gen_range(0..field::HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::GameObject;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_muster_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = muster(&SkirmishConfig::default(), &mut rng);
        assert_eq!(s.archers.len(), 3);
        assert_eq!(s.forts.len(), 1);
        assert_eq!(s.caravans.len(), 1);
    }

    #[test]
    fn test_muster_ids_unique_and_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = muster(&SkirmishConfig::default(), &mut rng);
        let ids: Vec<u32> = s
            .archers
            .iter()
            .map(|a| a.id())
            .chain(s.forts.iter().map(|f| f.id()))
            .chain(s.caravans.iter().map(|c| c.id()))
            .collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids, (1..=ids.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_muster_positions_inside_field() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = SkirmishConfig {
            archers: 20,
            forts: 5,
            caravans: 5,
            archer_health: 100.0,
        };
        let s = muster(&config, &mut rng);
        for pos in s
            .archers
            .iter()
            .map(|a| a.position())
            .chain(s.forts.iter().map(|f| f.position()))
            .chain(s.caravans.iter().map(|c| c.position()))
        {
            assert!(pos.x >= 0 && pos.x < field::WIDTH);
            assert!(pos.y >= 0 && pos.y < field::HEIGHT);
        }
    }

    #[test]
    fn test_mustered_archers_start_alive() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = muster(&SkirmishConfig::default(), &mut rng);
        assert!(s.archers.iter().all(|a| a.is_alive()));
        assert!(s.archers.iter().all(|a| a.health() == 100.0));
    }
}
