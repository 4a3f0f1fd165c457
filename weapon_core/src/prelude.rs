//! Prelude module for convenient imports
//!
//! ```rust
//! use weapon_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Attribute, DamageType, PlayerContext, ScalingGrade, UpgradeMaterial};
pub use crate::weapon::{BaseDamages, ScalingGrades, WeaponBase, WeaponInstance, WeaponSummary};

// Scaling engine
pub use crate::scaling::{best, by_rating, sort_by_rating, worst, Rating};

// Catalog
pub use crate::catalog::{Catalog, CatalogError};
