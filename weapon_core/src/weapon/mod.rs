//! Weapon records - immutable base stats and per-request instances

mod base;
mod instance;
mod summary;

pub use base::{BaseDamages, ScalingGrades, WeaponBase};
pub use instance::WeaponInstance;
pub use summary::WeaponSummary;
