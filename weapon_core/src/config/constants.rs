//! Fixed parameters of the scaling and rating model

/// Attribute value at which a weapon gains no attribute bonus
pub const ATTRIBUTE_BASELINE: i32 = 10;

/// Attribute value assumed when a request does not supply one
pub const ATTRIBUTE_DEFAULT: i32 = 10;

/// Lowest legal attribute value
pub const ATTRIBUTE_MIN: i32 = 1;

/// Highest legal attribute value
pub const ATTRIBUTE_MAX: i32 = 99;

/// Bonus per attribute point above baseline, per unit of scaling coefficient
pub const ATTRIBUTE_RATE: f64 = 0.01;

/// Damage gained per level with regular smithing stones
pub const REGULAR_LEVEL_RATE: f64 = 0.02;

/// Damage gained per level with somber smithing stones
pub const SOMBER_LEVEL_RATE: f64 = 0.08;

/// Max reinforcement level with regular smithing stones
pub const REGULAR_MAX_LEVEL: i32 = 25;

/// Max reinforcement level with somber smithing stones
pub const SOMBER_MAX_LEVEL: i32 = 10;

/// Reference curve used to normalize ratings into a percentage.
///
/// The curve describes a hypothetical maximally scaled weapon. Its
/// parameters are fixed for every weapon; they are never rescaled.
pub mod reference {
    /// Damage-per-stamina term of the reference weapon
    pub const DAMAGE_PER_STAMINA: f64 = 161.0 / 40.0;

    /// Rating contributed per reinforcement level
    pub const LEVEL_RATE: f64 = 1.02;

    /// Attribute value the reference weapon is rated at
    pub const ATTRIBUTE_VALUE: f64 = 99.0;

    /// Coefficients of the reference weapon, in
    /// strength, dexterity, intelligence, faith, arcane order
    pub const ATTRIBUTE_WEIGHTS: [f64; 5] = [3.5, 3.5, 3.5, 4.5, 1.0];

    /// Rate contributed per level to a weapon's raw rating
    pub const REGULAR_RATING_LEVEL_RATE: f64 = 1.0 + super::REGULAR_LEVEL_RATE;

    /// Rate contributed per level to a somber weapon's raw rating
    pub const SOMBER_RATING_LEVEL_RATE: f64 = 1.0 + super::SOMBER_LEVEL_RATE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_weights_sum() {
        let sum: f64 = reference::ATTRIBUTE_WEIGHTS.iter().sum();
        assert!((sum - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rating_level_rates() {
        assert!((reference::REGULAR_RATING_LEVEL_RATE - 1.02).abs() < 1e-12);
        assert!((reference::SOMBER_RATING_LEVEL_RATE - 1.08).abs() < 1e-12);
    }

    #[test]
    fn test_material_bounds() {
        assert!(SOMBER_MAX_LEVEL < REGULAR_MAX_LEVEL);
        assert!(SOMBER_LEVEL_RATE > REGULAR_LEVEL_RATE);
        assert!(ATTRIBUTE_MIN <= ATTRIBUTE_BASELINE && ATTRIBUTE_BASELINE <= ATTRIBUTE_MAX);
    }
}
