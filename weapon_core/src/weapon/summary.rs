//! WeaponSummary - Flattened view of an evaluated weapon for clients

use super::WeaponInstance;
use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// Snapshot of every client-facing field of a [`WeaponInstance`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub physical_damage: u32,
    pub magic_damage: u32,
    pub fire_damage: u32,
    pub light_damage: u32,
    pub holy_damage: u32,
    pub crit_damage: i32,
    pub stamina_damage: u32,
    pub strength_scaling: f64,
    pub dexterity_scaling: f64,
    pub intelligence_scaling: f64,
    pub faith_scaling: f64,
    pub arcane_scaling: f64,
    pub weight: f64,
    pub upgrade_type: String,
    pub value: f64,
    pub image_url: String,
    pub description: String,
}

impl From<&WeaponInstance> for WeaponSummary {
    fn from(weapon: &WeaponInstance) -> Self {
        let base = weapon.base();
        WeaponSummary {
            name: base.name.clone(),
            weapon_type: base.weapon_type.clone(),
            physical_damage: weapon.physical_damage(),
            magic_damage: weapon.magic_damage(),
            fire_damage: weapon.fire_damage(),
            light_damage: weapon.light_damage(),
            holy_damage: weapon.holy_damage(),
            crit_damage: base.crit_damage,
            stamina_damage: base.stamina_damage,
            strength_scaling: base.scaling.coefficient(Attribute::Strength),
            dexterity_scaling: base.scaling.coefficient(Attribute::Dexterity),
            intelligence_scaling: base.scaling.coefficient(Attribute::Intelligence),
            faith_scaling: base.scaling.coefficient(Attribute::Faith),
            arcane_scaling: base.scaling.coefficient(Attribute::Arcane),
            weight: base.weight,
            upgrade_type: base.upgrade_material.label().to_string(),
            value: weapon.value(),
            image_url: base.image_url.clone(),
            description: base.description.clone(),
        }
    }
}
