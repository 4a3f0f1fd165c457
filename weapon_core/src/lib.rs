//! weapon_core - Weapon damage scaling and rating engine
//!
//! This library provides:
//! - WeaponBase: Immutable weapon stats loaded from the catalog
//! - WeaponInstance: A weapon evaluated for a player's level and attributes
//! - Scaling: Scaled damage per type and the normalized rating
//! - Catalog: Weapons keyed by type, loaded once from TOML

pub mod catalog;
pub mod config;
pub mod prelude;
pub mod scaling;
pub mod types;
pub mod weapon;

// Re-export core types for convenience
pub use catalog::{default_catalog, load_catalog, Catalog, CatalogError, Descriptions, LoadReport};
pub use config::ConfigError;
pub use scaling::{combine_ratings, Rating, RatingOp};
pub use types::{Attribute, DamageType, PlayerContext, ScalingGrade, UpgradeMaterial};
pub use weapon::{BaseDamages, ScalingGrades, WeaponBase, WeaponInstance, WeaponSummary};
