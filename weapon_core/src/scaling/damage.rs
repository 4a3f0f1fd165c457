//! Damage scaling - turning base damage + player context into scaled damage

use crate::config::constants::{ATTRIBUTE_BASELINE, ATTRIBUTE_RATE};
use crate::types::{DamageType, UpgradeMaterial};
use crate::weapon::WeaponInstance;

/// Slack added before flooring so a product like `75 * 1.36` lands on 102
const FLOOR_EPSILON: f64 = 1e-9;

/// Bonus from one attribute: only points above the baseline count
///
/// `max(0, (attribute - 10) * coefficient * 0.01)`
pub fn attribute_bonus(attribute: i32, coefficient: f64) -> f64 {
    (f64::from(attribute - ATTRIBUTE_BASELINE) * coefficient * ATTRIBUTE_RATE).max(0.0)
}

/// Bonus from reinforcement level, shared by every damage type
pub fn level_bonus(material: UpgradeMaterial, level: i32) -> f64 {
    material.level_rate() * f64::from(level)
}

/// Total multiplier applied to the base damage of one type
pub fn damage_multiplier(weapon: &WeaponInstance, damage_type: DamageType) -> f64 {
    let scaling = &weapon.base().scaling;
    let attribute_total: f64 = damage_type
        .scaling_attributes()
        .iter()
        .map(|&attribute| attribute_bonus(weapon.attribute(attribute), scaling.coefficient(attribute)))
        .sum();

    1.0 + attribute_total + level_bonus(weapon.base().upgrade_material, weapon.level())
}

/// Scaled damage of one type, floored to a whole number.
///
/// At level 0 with every relevant attribute at exactly 10 the base value is
/// returned unchanged.
pub fn scaled_damage(weapon: &WeaponInstance, damage_type: DamageType) -> u32 {
    let base = weapon.base().damage.get(damage_type);

    let at_baseline = weapon.level() == 0
        && damage_type
            .scaling_attributes()
            .iter()
            .all(|&attribute| weapon.attribute(attribute) == ATTRIBUTE_BASELINE);
    if at_baseline {
        return base;
    }

    (f64::from(base) * damage_multiplier(weapon, damage_type) + FLOOR_EPSILON).floor() as u32
}

/// Scaled damage for every type, in [`DamageType::all`] order
pub fn scaled_damages(weapon: &WeaponInstance) -> Vec<(DamageType, u32)> {
    DamageType::all()
        .iter()
        .map(|&damage_type| (damage_type, scaled_damage(weapon, damage_type)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attribute, ScalingGrade};
    use crate::weapon::{BaseDamages, ScalingGrades, WeaponBase};
    use proptest::prelude::*;

    fn make_base(material: UpgradeMaterial, strength: ScalingGrade) -> WeaponBase {
        WeaponBase::new(
            "Test Greatsword",
            "Greatsword",
            BaseDamages {
                physical: 100,
                magic: 40,
                fire: 60,
                light: 30,
                holy: 20,
            },
            50,
            20,
            ScalingGrades {
                strength,
                dexterity: ScalingGrade::D,
                intelligence: ScalingGrade::C,
                faith: ScalingGrade::B,
                arcane: ScalingGrade::A,
            },
            12.0,
            material,
        )
    }

    #[test]
    fn test_attribute_bonus_threshold() {
        assert!((attribute_bonus(10, 7.0) - 0.0).abs() < f64::EPSILON);
        assert!((attribute_bonus(5, 7.0) - 0.0).abs() < f64::EPSILON);
        assert!((attribute_bonus(20, 5.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_level_bonus_rates() {
        assert!((level_bonus(UpgradeMaterial::SomberSmithingStones, 5) - 0.4).abs() < 1e-12);
        assert!((level_bonus(UpgradeMaterial::RegularSmithingStones, 5) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_baseline_returns_base_damage() {
        let base = make_base(UpgradeMaterial::RegularSmithingStones, ScalingGrade::S);
        let weapon = WeaponInstance::new(&base);

        assert_eq!(scaled_damage(&weapon, DamageType::Physical), 100);
        assert_eq!(scaled_damage(&weapon, DamageType::Holy), 20);
    }

    #[test]
    fn test_physical_uses_strength_and_dexterity() {
        let base = make_base(UpgradeMaterial::RegularSmithingStones, ScalingGrade::S);
        let mut weapon = WeaponInstance::new(&base);
        weapon.set_strength(20);

        // 100 * (1 + 10 * 7.0 * 0.01) = 170
        assert_eq!(weapon.physical_damage(), 170);

        weapon.set_dexterity(30);
        // 100 * (1 + 0.7 + 20 * 2.5 * 0.01) = 220
        assert_eq!(weapon.physical_damage(), 220);
        // Strength does not touch magic
        assert_eq!(weapon.magic_damage(), 40);
    }

    #[test]
    fn test_fire_light_holy_follow_faith() {
        let base = make_base(UpgradeMaterial::RegularSmithingStones, ScalingGrade::None);
        let mut weapon = WeaponInstance::new(&base);
        weapon.set_faith(30);

        // faith bonus = 20 * 4.5 * 0.01 = 0.9
        assert_eq!(weapon.fire_damage(), 114);
        assert_eq!(weapon.light_damage(), 57);
        assert_eq!(weapon.holy_damage(), 38);
        assert_eq!(weapon.magic_damage(), 40);
    }

    #[test]
    fn test_low_attribute_never_penalizes() {
        let base = make_base(UpgradeMaterial::RegularSmithingStones, ScalingGrade::S);
        let mut weapon = WeaponInstance::new(&base);
        weapon.set_strength(1);
        weapon.set_dexterity(1);

        assert_eq!(weapon.physical_damage(), 100);
    }

    #[test]
    fn test_level_rates_differ_by_material() {
        let regular = make_base(UpgradeMaterial::RegularSmithingStones, ScalingGrade::None);
        let somber = make_base(UpgradeMaterial::SomberSmithingStones, ScalingGrade::None);

        let mut regular_weapon = WeaponInstance::new(&regular);
        let mut somber_weapon = WeaponInstance::new(&somber);
        regular_weapon.set_level(1);
        somber_weapon.set_level(1);
        assert_eq!(regular_weapon.physical_damage(), 102);
        assert_eq!(somber_weapon.physical_damage(), 108);

        regular_weapon.set_level(99);
        somber_weapon.set_level(99);
        assert_eq!(regular_weapon.level(), 25);
        assert_eq!(somber_weapon.level(), 10);
        // 100 * 1.5 vs 100 * 1.8
        assert_eq!(regular_weapon.physical_damage(), 150);
        assert_eq!(somber_weapon.physical_damage(), 180);
    }

    #[test]
    fn test_exact_products_are_not_floored_down() {
        let base = WeaponBase::new(
            "Test Dagger",
            "Dagger",
            BaseDamages {
                physical: 75,
                ..Default::default()
            },
            130,
            40,
            ScalingGrades {
                strength: ScalingGrade::E,
                dexterity: ScalingGrade::C,
                ..Default::default()
            },
            1.5,
            UpgradeMaterial::RegularSmithingStones,
        );
        let mut weapon = WeaponInstance::new(&base);
        weapon.set_level(18);

        // 75 * (1 + 18 * 0.02) = 102
        assert_eq!(weapon.physical_damage(), 102);
    }

    #[test]
    fn test_scaled_damages_is_idempotent() {
        let base = make_base(UpgradeMaterial::SomberSmithingStones, ScalingGrade::B);
        let mut weapon = WeaponInstance::new(&base);
        weapon.set_level(7);
        weapon.set_strength(45);
        weapon.set_faith(33);

        let first = scaled_damages(&weapon);
        let second = scaled_damages(&weapon);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    proptest! {
        #[test]
        fn prop_raising_attribute_never_lowers_damage(
            level in 0i32..=25,
            low in 1i32..=99,
            delta in 0i32..=98,
        ) {
            let base = make_base(UpgradeMaterial::RegularSmithingStones, ScalingGrade::S);
            let high = (low + delta).min(99);

            for &(attribute, damage_type) in &[
                (Attribute::Strength, DamageType::Physical),
                (Attribute::Dexterity, DamageType::Physical),
                (Attribute::Intelligence, DamageType::Magic),
                (Attribute::Faith, DamageType::Fire),
                (Attribute::Faith, DamageType::Holy),
            ] {
                let mut weapon = WeaponInstance::new(&base);
                weapon.set_level(level);
                weapon.set_attribute(attribute, low);
                let before = weapon.damage(damage_type);
                weapon.set_attribute(attribute, high);
                prop_assert!(weapon.damage(damage_type) >= before);
            }
        }

        #[test]
        fn prop_scaled_never_below_base(level in -5i32..40, strength in -50i32..200) {
            let base = make_base(UpgradeMaterial::SomberSmithingStones, ScalingGrade::C);
            let mut weapon = WeaponInstance::new(&base);
            weapon.set_level(level);
            weapon.set_strength(strength);
            prop_assert!(weapon.physical_damage() >= base.damage.physical);
        }
    }
}
