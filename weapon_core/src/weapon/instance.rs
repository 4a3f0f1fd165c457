//! WeaponInstance - A weapon evaluated for one player's level and attributes

use super::WeaponBase;
use crate::scaling::{self, Rating};
use crate::types::{Attribute, DamageType, PlayerContext};
use std::fmt;

/// A by-value copy of a catalog weapon plus a clamped player context.
///
/// Level and attributes only change through the setters, which clamp
/// silently. Every derived number is recomputed on read.
#[derive(Debug, Clone)]
pub struct WeaponInstance {
    base: WeaponBase,
    context: PlayerContext,
}

impl WeaponInstance {
    /// Create an instance at the default context (level 0, attributes 10)
    pub fn new(base: &WeaponBase) -> Self {
        WeaponInstance {
            base: base.clone(),
            context: PlayerContext::default(),
        }
    }

    /// Create an instance and apply a request's context through the setters
    pub fn with_context(base: &WeaponBase, context: &PlayerContext) -> Self {
        let mut instance = WeaponInstance::new(base);
        instance.apply_context(context);
        instance
    }

    /// Apply every field of a context, clamping each one
    pub fn apply_context(&mut self, context: &PlayerContext) {
        self.set_level(context.level);
        for &attribute in Attribute::all() {
            self.set_attribute(attribute, context.attribute(attribute));
        }
    }

    pub fn base(&self) -> &WeaponBase {
        &self.base
    }

    /// Current (clamped) context
    pub fn context(&self) -> &PlayerContext {
        &self.context
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn weapon_type(&self) -> &str {
        &self.base.weapon_type
    }

    pub fn level(&self) -> i32 {
        self.context.level
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.context.attribute(attribute)
    }

    pub fn strength(&self) -> i32 {
        self.context.strength
    }

    pub fn dexterity(&self) -> i32 {
        self.context.dexterity
    }

    pub fn intelligence(&self) -> i32 {
        self.context.intelligence
    }

    pub fn faith(&self) -> i32 {
        self.context.faith
    }

    pub fn arcane(&self) -> i32 {
        self.context.arcane
    }

    /// Set the reinforcement level, clamped to the material's range
    pub fn set_level(&mut self, level: i32) {
        self.context.level = self.base.upgrade_material.clamp_level(level);
    }

    /// Set any attribute, clamped to `[1, 99]`
    pub fn set_attribute(&mut self, attribute: Attribute, value: i32) {
        let value = Attribute::clamp(value);
        match attribute {
            Attribute::Strength => self.context.strength = value,
            Attribute::Dexterity => self.context.dexterity = value,
            Attribute::Intelligence => self.context.intelligence = value,
            Attribute::Faith => self.context.faith = value,
            Attribute::Arcane => self.context.arcane = value,
        }
    }

    pub fn set_strength(&mut self, value: i32) {
        self.set_attribute(Attribute::Strength, value);
    }

    pub fn set_dexterity(&mut self, value: i32) {
        self.set_attribute(Attribute::Dexterity, value);
    }

    pub fn set_intelligence(&mut self, value: i32) {
        self.set_attribute(Attribute::Intelligence, value);
    }

    pub fn set_faith(&mut self, value: i32) {
        self.set_attribute(Attribute::Faith, value);
    }

    pub fn set_arcane(&mut self, value: i32) {
        self.set_attribute(Attribute::Arcane, value);
    }

    /// Scaled damage of one type for the current context
    pub fn damage(&self, damage_type: DamageType) -> u32 {
        scaling::scaled_damage(self, damage_type)
    }

    pub fn physical_damage(&self) -> u32 {
        self.damage(DamageType::Physical)
    }

    pub fn magic_damage(&self) -> u32 {
        self.damage(DamageType::Magic)
    }

    pub fn fire_damage(&self) -> u32 {
        self.damage(DamageType::Fire)
    }

    pub fn light_damage(&self) -> u32 {
        self.damage(DamageType::Light)
    }

    pub fn holy_damage(&self) -> u32 {
        self.damage(DamageType::Holy)
    }

    /// Rating as a percentage of the reference weapon at this level
    pub fn value(&self) -> f64 {
        scaling::rating_value(self)
    }

    /// Totally ordered rating, for sorting and comparison
    pub fn rating(&self) -> Rating {
        Rating::new(self.value())
    }
}

impl fmt::Display for WeaponInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [Type: {} | Rating %: {:.1}% | Weight: {} | Level: {}]",
            self.name(),
            self.weapon_type(),
            self.value(),
            self.base.weight,
            self.level()
        )
    }
}
