//! Catalog - every weapon of the game, keyed by weapon type
//!
//! Loaded once at startup from TOML and read-only afterwards. Records that
//! fail to convert are logged and skipped; the rest of the load continues.

mod descriptions;
mod record;

pub use descriptions::Descriptions;
pub use record::WeaponRecord;

use crate::config::{self, ConfigError};
use crate::scaling::by_rating;
use crate::types::PlayerContext;
use crate::weapon::{WeaponBase, WeaponInstance};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

/// Catalog error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed weapon record #{index} ({name}): {reason}")]
    DataFormat {
        index: usize,
        name: String,
        reason: String,
    },
    #[error("Weapon not found: {0}")]
    WeaponNotFound(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Outcome of a catalog load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    /// One `DataFormat` error per skipped record
    pub skipped: Vec<CatalogError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    weapons: Vec<toml::Value>,
}

/// Read-only weapon collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_type: BTreeMap<String, Vec<WeaponBase>>,
    /// lowercase name -> (weapon type, index within that type)
    by_name: HashMap<String, (String, usize)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon. Returns false (and keeps the existing entry) if the
    /// name is already taken.
    pub fn insert(&mut self, weapon: WeaponBase) -> bool {
        let key = weapon.name.to_lowercase();
        if self.by_name.contains_key(&key) {
            return false;
        }

        let list = self.by_type.entry(weapon.weapon_type.clone()).or_default();
        self.by_name.insert(key, (weapon.weapon_type.clone(), list.len()));
        list.push(weapon);
        true
    }

    /// Build a catalog from TOML content, skipping malformed records
    pub fn parse(
        content: &str,
        descriptions: &Descriptions,
    ) -> Result<(Catalog, LoadReport), CatalogError> {
        let file: CatalogFile = config::parse_toml(content)?;
        let mut catalog = Catalog::new();
        let mut report = LoadReport::default();

        for (index, value) in file.weapons.into_iter().enumerate() {
            match catalog.insert_value(index, value, descriptions) {
                Ok(()) => report.loaded += 1,
                Err(err) => {
                    log::warn!("Skipping weapon record: {}", err);
                    report.skipped.push(err);
                }
            }
        }

        log::info!(
            "Loaded {} weapons in {} types ({} skipped)",
            report.loaded,
            catalog.by_type.len(),
            report.skipped.len()
        );
        Ok((catalog, report))
    }

    fn insert_value(
        &mut self,
        index: usize,
        value: toml::Value,
        descriptions: &Descriptions,
    ) -> Result<(), CatalogError> {
        let name = value
            .get("name")
            .and_then(toml::Value::as_str)
            .unwrap_or("<unnamed>")
            .to_string();
        let data_format = |reason: String| CatalogError::DataFormat {
            index,
            name: name.clone(),
            reason,
        };

        let record: WeaponRecord = value
            .try_into()
            .map_err(|e: toml::de::Error| data_format(e.to_string()))?;
        record.validate().map_err(data_format)?;

        let description = descriptions.lookup(record.name.trim());
        let weapon = record.into_base(description);
        log::debug!("Loaded weapon '{}' ({})", weapon.name, weapon.weapon_type);

        if !self.insert(weapon) {
            return Err(data_format("duplicate weapon name".to_string()));
        }
        Ok(())
    }

    /// Number of weapons
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Look up a weapon by name, ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Result<&WeaponBase, CatalogError> {
        let (weapon_type, index) = self
            .by_name
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| CatalogError::WeaponNotFound(name.to_string()))?;
        self.by_type
            .get(weapon_type)
            .and_then(|list| list.get(*index))
            .ok_or_else(|| CatalogError::WeaponNotFound(name.to_string()))
    }

    /// Look up a weapon by its exact name
    pub fn find_by_name_exact(&self, name: &str) -> Result<&WeaponBase, CatalogError> {
        self.find_by_name(name)
            .ok()
            .filter(|weapon| weapon.name == name)
            .ok_or_else(|| CatalogError::WeaponNotFound(name.to_string()))
    }

    /// All weapon type labels, sorted
    pub fn weapon_types(&self) -> impl Iterator<Item = &str> {
        self.by_type.keys().map(String::as_str)
    }

    /// Weapons of one type (case-insensitive); empty if the type is unknown
    pub fn by_type(&self, weapon_type: &str) -> &[WeaponBase] {
        self.by_type
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(weapon_type.trim()))
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// Every weapon, grouped by type
    pub fn iter(&self) -> impl Iterator<Item = &WeaponBase> {
        self.by_type.values().flatten()
    }

    /// Evaluate one weapon for a player context
    pub fn instance(
        &self,
        name: &str,
        context: &PlayerContext,
    ) -> Result<WeaponInstance, CatalogError> {
        let base = self.find_by_name(name)?;
        Ok(WeaponInstance::with_context(base, context))
    }

    /// Evaluate every weapon (optionally of one type) for a player context
    pub fn instances(
        &self,
        context: &PlayerContext,
        weapon_type: Option<&str>,
    ) -> Vec<WeaponInstance> {
        let bases: Box<dyn Iterator<Item = &WeaponBase>> = match weapon_type {
            Some(weapon_type) => Box::new(self.by_type(weapon_type).iter()),
            None => Box::new(self.iter()),
        };
        bases
            .map(|base| WeaponInstance::with_context(base, context))
            .collect()
    }

    /// Evaluate and sort by rating, best first
    pub fn ranked(&self, context: &PlayerContext, weapon_type: Option<&str>) -> Vec<WeaponInstance> {
        let mut weapons = self.instances(context, weapon_type);
        weapons.sort_by(|a, b| by_rating(b, a));
        weapons
    }
}

/// Load a catalog and its descriptions from files
pub fn load_catalog(
    weapons_path: &Path,
    descriptions_path: Option<&Path>,
) -> Result<(Catalog, LoadReport), CatalogError> {
    let descriptions = match descriptions_path {
        Some(path) => config::load_toml_or_default::<Descriptions>(path)?,
        None => Descriptions::new(),
    };
    let content = std::fs::read_to_string(weapons_path).map_err(ConfigError::from)?;
    Catalog::parse(&content, &descriptions)
}

/// Catalog built from the bundled data files
pub fn default_catalog() -> Catalog {
    let descriptions_toml = include_str!("../../config/descriptions.toml");
    let weapons_toml = include_str!("../../config/weapons.toml");

    let descriptions = config::parse_toml::<Descriptions>(descriptions_toml).unwrap_or_else(|e| {
        log::error!("Bundled descriptions failed to parse: {}", e);
        Descriptions::new()
    });
    match Catalog::parse(weapons_toml, &descriptions) {
        Ok((catalog, _)) => catalog,
        Err(e) => {
            log::error!("Bundled catalog failed to parse: {}", e);
            Catalog::new()
        }
    }
}
