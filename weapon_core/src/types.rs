//! Core types shared by weapon records, the scaling engine and the catalog

use crate::config::constants::{
    ATTRIBUTE_DEFAULT, ATTRIBUTE_MAX, ATTRIBUTE_MIN, REGULAR_LEVEL_RATE, REGULAR_MAX_LEVEL,
    SOMBER_LEVEL_RATE, SOMBER_MAX_LEVEL,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Elemental damage channel carried by a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magic,
    Fire,
    Light,
    Holy,
}

impl DamageType {
    /// Get all damage types
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Physical,
            DamageType::Magic,
            DamageType::Fire,
            DamageType::Light,
            DamageType::Holy,
        ]
    }

    /// Attributes whose scaling feeds this damage type.
    ///
    /// Light and holy read faith alongside fire.
    pub fn scaling_attributes(self) -> &'static [Attribute] {
        match self {
            DamageType::Physical => &[Attribute::Strength, Attribute::Dexterity],
            DamageType::Magic => &[Attribute::Intelligence],
            DamageType::Fire | DamageType::Light | DamageType::Holy => &[Attribute::Faith],
        }
    }
}

/// Player attribute that a weapon can scale with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Intelligence,
            Attribute::Faith,
            Attribute::Arcane,
        ]
    }

    /// Clamp a raw attribute value into the legal range
    pub fn clamp(value: i32) -> i32 {
        value.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX)
    }
}

/// Letter grade describing how strongly a weapon scales with an attribute.
///
/// Serialized as its letter; `-` (or blank) means no scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalingGrade {
    #[default]
    None,
    E,
    D,
    C,
    B,
    A,
    S,
}

impl ScalingGrade {
    /// Numeric multiplier used by the scaling formulas
    pub fn coefficient(self) -> f64 {
        match self {
            ScalingGrade::None => 0.0,
            ScalingGrade::E => 1.5,
            ScalingGrade::D => 2.5,
            ScalingGrade::C => 3.5,
            ScalingGrade::B => 4.5,
            ScalingGrade::A => 5.5,
            ScalingGrade::S => 7.0,
        }
    }

    /// Parse a letter grade, treating `-` and blanks as no scaling
    pub fn from_letter(letter: &str) -> Option<ScalingGrade> {
        match letter.trim() {
            "" | "-" => Some(ScalingGrade::None),
            "E" | "e" => Some(ScalingGrade::E),
            "D" | "d" => Some(ScalingGrade::D),
            "C" | "c" => Some(ScalingGrade::C),
            "B" | "b" => Some(ScalingGrade::B),
            "A" | "a" => Some(ScalingGrade::A),
            "S" | "s" => Some(ScalingGrade::S),
            _ => None,
        }
    }
}

impl fmt::Display for ScalingGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ScalingGrade::None => "-",
            ScalingGrade::E => "E",
            ScalingGrade::D => "D",
            ScalingGrade::C => "C",
            ScalingGrade::B => "B",
            ScalingGrade::A => "A",
            ScalingGrade::S => "S",
        };
        f.write_str(letter)
    }
}

impl Serialize for ScalingGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScalingGrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let letter = String::deserialize(deserializer)?;
        ScalingGrade::from_letter(&letter)
            .ok_or_else(|| de::Error::custom(format!("unknown scaling grade '{}'", letter)))
    }
}

/// Material used to reinforce a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeMaterial {
    #[serde(rename = "Smithing Stones")]
    RegularSmithingStones,
    #[serde(rename = "Somber Smithing Stones")]
    SomberSmithingStones,
}

impl UpgradeMaterial {
    /// Highest reinforcement level reachable with this material
    pub fn max_level(self) -> i32 {
        match self {
            UpgradeMaterial::RegularSmithingStones => REGULAR_MAX_LEVEL,
            UpgradeMaterial::SomberSmithingStones => SOMBER_MAX_LEVEL,
        }
    }

    /// Damage gained per reinforcement level (0.02 = 2%)
    pub fn level_rate(self) -> f64 {
        match self {
            UpgradeMaterial::RegularSmithingStones => REGULAR_LEVEL_RATE,
            UpgradeMaterial::SomberSmithingStones => SOMBER_LEVEL_RATE,
        }
    }

    /// Clamp a raw level into `[0, max_level]`
    pub fn clamp_level(self, level: i32) -> i32 {
        level.clamp(0, self.max_level())
    }

    /// Display label matching the source data
    pub fn label(self) -> &'static str {
        match self {
            UpgradeMaterial::RegularSmithingStones => "Smithing Stones",
            UpgradeMaterial::SomberSmithingStones => "Somber Smithing Stones",
        }
    }
}

impl fmt::Display for UpgradeMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-request player parameters applied to a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerContext {
    /// Weapon reinforcement level
    #[serde(default)]
    pub level: i32,
    #[serde(default = "default_attribute")]
    pub strength: i32,
    #[serde(default = "default_attribute")]
    pub dexterity: i32,
    #[serde(default = "default_attribute")]
    pub intelligence: i32,
    #[serde(default = "default_attribute")]
    pub faith: i32,
    #[serde(default = "default_attribute")]
    pub arcane: i32,
}

fn default_attribute() -> i32 {
    ATTRIBUTE_DEFAULT
}

impl Default for PlayerContext {
    fn default() -> Self {
        PlayerContext {
            level: 0,
            strength: ATTRIBUTE_DEFAULT,
            dexterity: ATTRIBUTE_DEFAULT,
            intelligence: ATTRIBUTE_DEFAULT,
            faith: ATTRIBUTE_DEFAULT,
            arcane: ATTRIBUTE_DEFAULT,
        }
    }
}

impl PlayerContext {
    /// Read one attribute value
    pub fn attribute(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Faith => self.faith,
            Attribute::Arcane => self.arcane,
        }
    }

    /// Builder-style attribute override
    pub fn with_attribute(mut self, attribute: Attribute, value: i32) -> Self {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Faith => self.faith = value,
            Attribute::Arcane => self.arcane = value,
        }
        self
    }

    /// Builder-style level override
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_coefficients() {
        assert!((ScalingGrade::None.coefficient() - 0.0).abs() < f64::EPSILON);
        assert!((ScalingGrade::E.coefficient() - 1.5).abs() < f64::EPSILON);
        assert!((ScalingGrade::C.coefficient() - 3.5).abs() < f64::EPSILON);
        assert!((ScalingGrade::S.coefficient() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grade_from_letter() {
        assert_eq!(ScalingGrade::from_letter("-"), Some(ScalingGrade::None));
        assert_eq!(ScalingGrade::from_letter(" "), Some(ScalingGrade::None));
        assert_eq!(ScalingGrade::from_letter("b"), Some(ScalingGrade::B));
        assert_eq!(ScalingGrade::from_letter("Z"), None);
    }

    #[test]
    fn test_grade_serde() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            grade: ScalingGrade,
        }

        let parsed: Wrapper = toml::from_str(r#"grade = "a""#).unwrap();
        assert_eq!(parsed.grade, ScalingGrade::A);
        let blank: Wrapper = toml::from_str(r#"grade = """#).unwrap();
        assert_eq!(blank.grade, ScalingGrade::None);
        assert!(toml::from_str::<Wrapper>(r#"grade = "Q""#).is_err());

        let out = toml::to_string(&Wrapper { grade: ScalingGrade::None }).unwrap();
        assert_eq!(out.trim(), r#"grade = "-""#);
    }

    #[test]
    fn test_upgrade_material_levels() {
        assert_eq!(UpgradeMaterial::SomberSmithingStones.max_level(), 10);
        assert_eq!(UpgradeMaterial::RegularSmithingStones.max_level(), 25);
        assert_eq!(UpgradeMaterial::SomberSmithingStones.clamp_level(14), 10);
        assert_eq!(UpgradeMaterial::RegularSmithingStones.clamp_level(-3), 0);
    }

    #[test]
    fn test_damage_type_scaling_attributes() {
        assert_eq!(
            DamageType::Physical.scaling_attributes(),
            &[Attribute::Strength, Attribute::Dexterity]
        );
        assert_eq!(DamageType::Holy.scaling_attributes(), &[Attribute::Faith]);
    }

    #[test]
    fn test_parse_upgrade_material() {
        #[derive(Deserialize)]
        struct Wrapper {
            upgrade: UpgradeMaterial,
        }

        let parsed: Wrapper = toml::from_str(r#"upgrade = "Somber Smithing Stones""#).unwrap();
        assert_eq!(parsed.upgrade, UpgradeMaterial::SomberSmithingStones);
    }

    #[test]
    fn test_player_context_defaults() {
        let ctx: PlayerContext = toml::from_str("strength = 40").unwrap();
        assert_eq!(ctx.level, 0);
        assert_eq!(ctx.strength, 40);
        assert_eq!(ctx.arcane, 10);
        assert_eq!(PlayerContext::default().attribute(Attribute::Faith), 10);
    }
}
