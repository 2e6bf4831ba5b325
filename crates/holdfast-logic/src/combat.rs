//! Pure damage arithmetic and death determination.
//!
//! Damage application is a single deterministic state transition: subtract
//! and compare against the death threshold. Overkill is not floored, so a
//! corpse can carry negative health; callers treat `health <= 0` as dead.

/// Errors raised at the damage boundary.
#[derive(Debug)]
pub enum CombatError {
    /// Damage amounts must be non-negative; healing has no path in this model.
    NegativeDamage(f32),
}

impl std::fmt::Display for CombatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatError::NegativeDamage(amount) => {
                write!(f, "negative damage amount: {}", amount)
            }
        }
    }
}

impl std::error::Error for CombatError {}

/// Apply `amount` damage to `health`, returning the new health value.
///
/// Rejects negative amounts. The result is not floored at zero.
pub fn apply_damage(health: f32, amount: f32) -> Result<f32, CombatError> {
    if amount < 0.0 {
        return Err(CombatError::NegativeDamage(amount));
    }
    Ok(health - amount)
}

/// Check if a health value counts as dead.
pub fn is_dead(health: f32) -> bool {
    health <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_damage_subtracts() {
        assert_eq!(apply_damage(100.0, 20.0).unwrap(), 80.0);
        assert_eq!(apply_damage(80.0, 80.0).unwrap(), 0.0);
    }

    #[test]
    fn test_apply_damage_zero_is_noop() {
        assert_eq!(apply_damage(55.5, 0.0).unwrap(), 55.5);
    }

    #[test]
    fn test_apply_damage_overkill_goes_negative() {
        let h = apply_damage(10.0, 25.0).unwrap();
        assert_eq!(h, -15.0);
        assert!(is_dead(h));
    }

    #[test]
    fn test_negative_damage_rejected() {
        let err = apply_damage(100.0, -5.0).unwrap_err();
        match err {
            CombatError::NegativeDamage(amount) => assert_eq!(amount, -5.0),
        }
    }

    #[test]
    fn test_negative_damage_display() {
        let err = apply_damage(1.0, -0.5).unwrap_err();
        assert!(err.to_string().contains("-0.5"));
    }

    #[test]
    fn test_is_dead_threshold() {
        assert!(is_dead(0.0));
        assert!(is_dead(-30.0));
        assert!(!is_dead(0.01));
        assert!(!is_dead(100.0));
    }
}
