//! Rating - a single comparable score for a weapon under a player context
//!
//! `value = raw / reference * 100` where
//!
//! - `raw = (Σ scaled damage + crit) / stamina + Σ(attribute × coefficient) + level_rate × level`
//! - `reference = 161/40 + 1.02 × level + 99 × (3.5 + 3.5 + 3.5 + 4.5 + 1)`
//!
//! The reference describes a maximally scaled weapon at the same level, so the
//! result reads as a percentage of that ceiling.

use super::damage::scaled_damages;
use crate::config::constants::reference;
use crate::types::{Attribute, UpgradeMaterial};
use crate::weapon::WeaponInstance;
use std::cmp::Ordering;

/// A weapon rating with a total order (NaN sorts after every number)
#[derive(Debug, Clone, Copy)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Self {
        Rating(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> f64 {
        rating.0
    }
}

/// Scaled damage plus crit, per point of stamina damage
pub fn damage_per_stamina(weapon: &WeaponInstance) -> f64 {
    let scaled_total: u64 = scaled_damages(weapon)
        .iter()
        .map(|&(_, amount)| u64::from(amount))
        .sum();
    let numerator = scaled_total as f64 + f64::from(weapon.base().crit_damage);
    numerator / f64::from(weapon.base().effective_stamina_damage())
}

/// Sum of each full attribute value times its coefficient
pub fn attribute_rating(weapon: &WeaponInstance) -> f64 {
    Attribute::all()
        .iter()
        .map(|&attribute| {
            f64::from(weapon.attribute(attribute)) * weapon.base().scaling.coefficient(attribute)
        })
        .sum()
}

/// Level contribution to the raw rating
pub fn level_rating(material: UpgradeMaterial, level: i32) -> f64 {
    let rate = match material {
        UpgradeMaterial::RegularSmithingStones => reference::REGULAR_RATING_LEVEL_RATE,
        UpgradeMaterial::SomberSmithingStones => reference::SOMBER_RATING_LEVEL_RATE,
    };
    rate * f64::from(level)
}

/// Unnormalized rating
pub fn raw_value(weapon: &WeaponInstance) -> f64 {
    damage_per_stamina(weapon)
        + attribute_rating(weapon)
        + level_rating(weapon.base().upgrade_material, weapon.level())
}

/// Raw rating of the reference weapon at `level`
pub fn reference_value(level: i32) -> f64 {
    let attribute_ceiling: f64 = reference::ATTRIBUTE_WEIGHTS
        .iter()
        .map(|weight| reference::ATTRIBUTE_VALUE * weight)
        .sum();
    reference::DAMAGE_PER_STAMINA + reference::LEVEL_RATE * f64::from(level) + attribute_ceiling
}

/// Rating as a percentage of the reference weapon at the same level
pub fn rating_value(weapon: &WeaponInstance) -> f64 {
    raw_value(weapon) / reference_value(weapon.level()) * 100.0
}

/// Compare two weapons by rating only
pub fn by_rating(a: &WeaponInstance, b: &WeaponInstance) -> Ordering {
    a.rating().cmp(&b.rating())
}

/// Sort ascending by rating
pub fn sort_by_rating(weapons: &mut [WeaponInstance]) {
    weapons.sort_by_cached_key(|weapon| weapon.rating());
}

/// Highest rated weapon
pub fn best<'a, I>(weapons: I) -> Option<&'a WeaponInstance>
where
    I: IntoIterator<Item = &'a WeaponInstance>,
{
    weapons.into_iter().max_by(|a, b| by_rating(a, b))
}

/// Lowest rated weapon
pub fn worst<'a, I>(weapons: I) -> Option<&'a WeaponInstance>
where
    I: IntoIterator<Item = &'a WeaponInstance>,
{
    weapons.into_iter().min_by(|a, b| by_rating(a, b))
}

/// Scalar operation over two ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingOp {
    Sum,
    Difference,
    Product,
    Ratio,
}

/// Combine two weapons' ratings. A ratio against a zero rating is 0.0.
pub fn combine_ratings(a: &WeaponInstance, b: &WeaponInstance, op: RatingOp) -> f64 {
    let (lhs, rhs) = (a.value(), b.value());
    match op {
        RatingOp::Sum => lhs + rhs,
        RatingOp::Difference => lhs - rhs,
        RatingOp::Product => lhs * rhs,
        RatingOp::Ratio if rhs == 0.0 => 0.0,
        RatingOp::Ratio => lhs / rhs,
    }
}
