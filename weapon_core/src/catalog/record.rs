//! Raw weapon records as they appear in the source data

use crate::types::{ScalingGrade, UpgradeMaterial};
use crate::weapon::{BaseDamages, ScalingGrades, WeaponBase};
use serde::{Deserialize, Serialize};

/// One `[[weapons]]` table of the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    #[serde(default)]
    pub physical: u32,
    #[serde(default)]
    pub magic: u32,
    #[serde(default)]
    pub fire: u32,
    #[serde(default)]
    pub light: u32,
    #[serde(default)]
    pub holy: u32,
    #[serde(default)]
    pub crit: i32,
    #[serde(default)]
    pub stamina: u32,
    #[serde(default, rename = "str")]
    pub strength: ScalingGrade,
    #[serde(default, rename = "dex")]
    pub dexterity: ScalingGrade,
    #[serde(default, rename = "int")]
    pub intelligence: ScalingGrade,
    #[serde(default, rename = "fai")]
    pub faith: ScalingGrade,
    #[serde(default, rename = "arc")]
    pub arcane: ScalingGrade,
    pub weight: f64,
    pub upgrade: UpgradeMaterial,
    #[serde(default)]
    pub image_url: String,
}

impl WeaponRecord {
    /// Check the constraints serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }
        if self.weapon_type.trim().is_empty() {
            return Err("type is empty".to_string());
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(format!("weight must be a non-negative number, got {}", self.weight));
        }
        Ok(())
    }

    /// Convert into a catalog weapon with the given description
    pub fn into_base(self, description: &str) -> WeaponBase {
        WeaponBase {
            name: self.name.trim().to_string(),
            weapon_type: self.weapon_type.trim().to_string(),
            damage: BaseDamages {
                physical: self.physical,
                magic: self.magic,
                fire: self.fire,
                light: self.light,
                holy: self.holy,
            },
            crit_damage: self.crit,
            stamina_damage: self.stamina,
            scaling: ScalingGrades {
                strength: self.strength,
                dexterity: self.dexterity,
                intelligence: self.intelligence,
                faith: self.faith,
                arcane: self.arcane,
            },
            weight: self.weight,
            upgrade_material: self.upgrade,
            image_url: self.image_url,
            description: description.to_string(),
        }
    }
}
