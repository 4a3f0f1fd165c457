//! WeaponBase - Canonical weapon stats loaded once with the catalog

use crate::types::{Attribute, DamageType, ScalingGrade, UpgradeMaterial};
use serde::{Deserialize, Serialize};

/// Unscaled damage per damage type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseDamages {
    pub physical: u32,
    pub magic: u32,
    pub fire: u32,
    pub light: u32,
    pub holy: u32,
}

impl BaseDamages {
    /// Get the base damage of one type
    pub fn get(&self, damage_type: DamageType) -> u32 {
        match damage_type {
            DamageType::Physical => self.physical,
            DamageType::Magic => self.magic,
            DamageType::Fire => self.fire,
            DamageType::Light => self.light,
            DamageType::Holy => self.holy,
        }
    }

    /// Sum of all five damage types
    pub fn total(&self) -> u64 {
        DamageType::all()
            .iter()
            .map(|&damage_type| u64::from(self.get(damage_type)))
            .sum()
    }
}

/// Scaling grade per attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingGrades {
    #[serde(default)]
    pub strength: ScalingGrade,
    #[serde(default)]
    pub dexterity: ScalingGrade,
    #[serde(default)]
    pub intelligence: ScalingGrade,
    #[serde(default)]
    pub faith: ScalingGrade,
    #[serde(default)]
    pub arcane: ScalingGrade,
}

impl ScalingGrades {
    /// Get the grade for one attribute
    pub fn get(&self, attribute: Attribute) -> ScalingGrade {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Faith => self.faith,
            Attribute::Arcane => self.arcane,
        }
    }

    /// Numeric coefficient for one attribute
    pub fn coefficient(&self, attribute: Attribute) -> f64 {
        self.get(attribute).coefficient()
    }
}

/// Immutable stats of one weapon as loaded from the source data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponBase {
    pub name: String,
    /// Category label, e.g. "Katana"
    pub weapon_type: String,
    pub damage: BaseDamages,
    pub crit_damage: i32,
    /// Raw stamina damage; may be zero in source data
    pub stamina_damage: u32,
    pub scaling: ScalingGrades,
    pub weight: f64,
    pub upgrade_material: UpgradeMaterial,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
}

impl WeaponBase {
    /// Create a weapon with empty cosmetic metadata
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        weapon_type: impl Into<String>,
        damage: BaseDamages,
        crit_damage: i32,
        stamina_damage: u32,
        scaling: ScalingGrades,
        weight: f64,
        upgrade_material: UpgradeMaterial,
    ) -> Self {
        WeaponBase {
            name: name.into(),
            weapon_type: weapon_type.into(),
            damage,
            crit_damage,
            stamina_damage,
            scaling,
            weight,
            upgrade_material,
            image_url: String::new(),
            description: String::new(),
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Stamina damage as used by rating math (zero is treated as one)
    pub fn effective_stamina_damage(&self) -> u32 {
        self.stamina_damage.max(1)
    }

    /// Highest reinforcement level for this weapon
    pub fn max_level(&self) -> i32 {
        self.upgrade_material.max_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_base() -> WeaponBase {
        WeaponBase::new(
            "Test Blade",
            "Straight Sword",
            BaseDamages {
                physical: 110,
                magic: 20,
                ..Default::default()
            },
            100,
            0,
            ScalingGrades {
                strength: ScalingGrade::D,
                dexterity: ScalingGrade::C,
                ..Default::default()
            },
            3.5,
            UpgradeMaterial::RegularSmithingStones,
        )
    }

    #[test]
    fn test_new_defaults_metadata() {
        let base = make_base();
        assert!(base.image_url.is_empty());
        assert!(base.description.is_empty());

        let described = make_base().with_description("A blade").with_image_url("blade.png");
        assert_eq!(described.description, "A blade");
        assert_eq!(described.image_url, "blade.png");
    }

    #[test]
    fn test_zero_stamina_is_one() {
        assert_eq!(make_base().effective_stamina_damage(), 1);
    }

    #[test]
    fn test_damage_total() {
        let base = make_base();
        assert_eq!(base.damage.total(), 130);
        assert_eq!(base.damage.get(DamageType::Magic), 20);
    }

    #[test]
    fn test_scaling_coefficients() {
        let base = make_base();
        assert!((base.scaling.coefficient(Attribute::Dexterity) - 3.5).abs() < f64::EPSILON);
        assert!((base.scaling.coefficient(Attribute::Arcane) - 0.0).abs() < f64::EPSILON);
    }
}
