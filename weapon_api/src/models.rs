//! Request parameter parsing

use crate::error::ApiError;
use std::collections::HashMap;
use std::num::IntErrorKind;
use weapon_core::{Attribute, PlayerContext};

/// Query string of the weapon endpoints, validated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeaponQuery {
    pub context: PlayerContext,
    /// Optional weapon type filter
    pub weapon_type: Option<String>,
}

const ATTRIBUTE_PARAMS: [(&str, Attribute); 5] = [
    ("strength", Attribute::Strength),
    ("dexterity", Attribute::Dexterity),
    ("intelligence", Attribute::Intelligence),
    ("faith", Attribute::Faith),
    ("arcane", Attribute::Arcane),
];

impl WeaponQuery {
    /// Missing parameters keep their defaults. Out-of-range numbers are
    /// accepted here and clamped by the weapon; non-numbers are rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ApiError> {
        let mut context = PlayerContext::default();

        if let Some(level) = parse_int(params, "level")? {
            context.level = level;
        }
        for (name, attribute) in ATTRIBUTE_PARAMS {
            if let Some(value) = parse_int(params, name)? {
                context = context.with_attribute(attribute, value);
            }
        }

        let weapon_type = params
            .get("type")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(WeaponQuery {
            context,
            weapon_type,
        })
    }
}

fn parse_int(params: &HashMap<String, String>, name: &str) -> Result<Option<i32>, ApiError> {
    match params.get(name) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<i32>() {
            Ok(value) => Ok(Some(value)),
            // Numbers past i32 still clamp like any other out-of-range value
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(Some(i32::MAX)),
                IntErrorKind::NegOverflow => Ok(Some(i32::MIN)),
                _ => Err(ApiError::InvalidParameter {
                    name: name.to_string(),
                    value: raw.clone(),
                }),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let query = WeaponQuery::from_params(&HashMap::new()).unwrap();
        assert_eq!(query.context, PlayerContext::default());
        assert!(query.weapon_type.is_none());
    }

    #[test]
    fn test_parses_all_fields() {
        let query = WeaponQuery::from_params(&params(&[
            ("level", "5"),
            ("strength", "40"),
            ("dexterity", " 12 "),
            ("faith", "150"),
            ("type", "Katana"),
        ]))
        .unwrap();

        assert_eq!(query.context.level, 5);
        assert_eq!(query.context.strength, 40);
        assert_eq!(query.context.dexterity, 12);
        // Range is the weapon's concern
        assert_eq!(query.context.faith, 150);
        assert_eq!(query.context.arcane, 10);
        assert_eq!(query.weapon_type.as_deref(), Some("Katana"));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = WeaponQuery::from_params(&params(&[("arcane", "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidParameter { ref name, ref value } if name == "arcane" && value == "lots"
        ));
    }

    #[test]
    fn test_oversized_numbers_saturate() {
        let query = WeaponQuery::from_params(&params(&[
            ("level", "10000000000"),
            ("strength", "-99999999999"),
        ]))
        .unwrap();
        assert_eq!(query.context.level, i32::MAX);
        assert_eq!(query.context.strength, i32::MIN);

        let err = WeaponQuery::from_params(&params(&[("level", "1e3")])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { ref name, .. } if name == "level"));
    }

    #[test]
    fn test_blank_type_ignored() {
        let query = WeaponQuery::from_params(&params(&[("type", "  ")])).unwrap();
        assert!(query.weapon_type.is_none());
    }
}
