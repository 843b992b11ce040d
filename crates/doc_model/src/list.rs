//! List and numbering definitions
//!
//! This module holds OOXML-compatible list definitions:
//! - Abstract numbering definitions (templates with up to 9 levels, 0-8)
//! - Numbering instances (concrete uses of templates, with per-level overrides)
//! - Number formats
//!
//! Counters and label rendering live in the cascade engine; these types are
//! read-only input.

use crate::{Alignment, DocModelError, ParagraphProperties, Result, RunProperties};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

/// Highest list level index
pub const MAX_LEVEL: u8 = 8;

// =============================================================================
// Number Format
// =============================================================================

/// Number format of a list level (`w:numFmt`)
///
/// Serialized as its OOXML name; names without a variant load as [`NumberFormat::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NumberFormat {
    /// 1, 2, 3, ...
    #[default]
    Decimal,
    /// 01, 02, 03, ...
    DecimalZero,
    /// a, b, c, ... z, aa, ab, ...
    LowerLetter,
    /// A, B, C, ...
    UpperLetter,
    /// i, ii, iii, ...
    LowerRoman,
    /// I, II, III, ...
    UpperRoman,
    /// 1st, 2nd, 3rd, ...
    Ordinal,
    /// First, Second, Third, ...
    OrdinalText,
    /// One, Two, Three, ...
    CardinalText,
    /// Bullet glyph taken from the level text
    Bullet,
    /// No number displayed
    None,
    /// (1), (2), (3), ...
    DecimalEnclosedParen,
    /// 1., 2., 3., ...
    DecimalEnclosedFullstop,
    /// ①, ②, ③, ...
    DecimalEnclosedCircle,
    /// Full-width digits
    DecimalFullWidth,
    /// Half-width digits
    DecimalHalfWidth,
    /// Hexadecimal
    Hex,
    /// *, †, ‡, §, **, ...
    Chicago,
    /// Any other format; rendered as plain decimal
    Other(String),
}

impl NumberFormat {
    /// Check if this format never shows or advances a number
    pub fn is_bullet(&self) -> bool {
        matches!(self, NumberFormat::Bullet | NumberFormat::None)
    }

    /// The OOXML name of this format
    pub fn as_str(&self) -> &str {
        match self {
            NumberFormat::Decimal => "decimal",
            NumberFormat::DecimalZero => "decimalZero",
            NumberFormat::LowerLetter => "lowerLetter",
            NumberFormat::UpperLetter => "upperLetter",
            NumberFormat::LowerRoman => "lowerRoman",
            NumberFormat::UpperRoman => "upperRoman",
            NumberFormat::Ordinal => "ordinal",
            NumberFormat::OrdinalText => "ordinalText",
            NumberFormat::CardinalText => "cardinalText",
            NumberFormat::Bullet => "bullet",
            NumberFormat::None => "none",
            NumberFormat::DecimalEnclosedParen => "decimalEnclosedParen",
            NumberFormat::DecimalEnclosedFullstop => "decimalEnclosedFullstop",
            NumberFormat::DecimalEnclosedCircle => "decimalEnclosedCircle",
            NumberFormat::DecimalFullWidth => "decimalFullWidth",
            NumberFormat::DecimalHalfWidth => "decimalHalfWidth",
            NumberFormat::Hex => "hex",
            NumberFormat::Chicago => "chicago",
            NumberFormat::Other(name) => name,
        }
    }
}

impl FromStr for NumberFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "decimal" => NumberFormat::Decimal,
            "decimalZero" => NumberFormat::DecimalZero,
            "lowerLetter" => NumberFormat::LowerLetter,
            "upperLetter" => NumberFormat::UpperLetter,
            "lowerRoman" => NumberFormat::LowerRoman,
            "upperRoman" => NumberFormat::UpperRoman,
            "ordinal" => NumberFormat::Ordinal,
            "ordinalText" => NumberFormat::OrdinalText,
            "cardinalText" => NumberFormat::CardinalText,
            "bullet" => NumberFormat::Bullet,
            "none" => NumberFormat::None,
            "decimalEnclosedParen" => NumberFormat::DecimalEnclosedParen,
            "decimalEnclosedFullstop" => NumberFormat::DecimalEnclosedFullstop,
            "decimalEnclosedCircle" => NumberFormat::DecimalEnclosedCircle,
            "decimalFullWidth" | "decimalFullWidth2" => NumberFormat::DecimalFullWidth,
            "decimalHalfWidth" => NumberFormat::DecimalHalfWidth,
            "hex" => NumberFormat::Hex,
            "chicago" => NumberFormat::Chicago,
            other => NumberFormat::Other(other.to_string()),
        })
    }
}

impl From<String> for NumberFormat {
    fn from(name: String) -> Self {
        match name.parse() {
            Ok(format) => format,
            Err(never) => match never {},
        }
    }
}

impl From<NumberFormat> for String {
    fn from(format: NumberFormat) -> Self {
        match format {
            NumberFormat::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// List Level Definition
// =============================================================================

/// Separator between the label and the paragraph text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LevelSuffix {
    #[default]
    Tab,
    Space,
    Nothing,
}

impl LevelSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelSuffix::Tab => "\t",
            LevelSuffix::Space => " ",
            LevelSuffix::Nothing => "",
        }
    }
}

/// Definition of a single list level (0-8)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Level index (0-8)
    pub ilvl: u8,
    /// Starting number; 1 when absent
    #[serde(default)]
    pub start: Option<u32>,
    /// Number format; decimal when absent
    #[serde(default)]
    pub num_fmt: Option<NumberFormat>,
    /// Label template, e.g. "%1." or "%1.%2."
    #[serde(default)]
    pub lvl_text: Option<String>,
    /// Separator after the label; tab when absent
    #[serde(default)]
    pub suffix: Option<LevelSuffix>,
    /// Level whose advance restarts this one (0-based); the previous level when absent
    #[serde(default)]
    pub restart: Option<u8>,
    /// Render every placeholder as decimal (legal numbering)
    #[serde(default)]
    pub is_legal: bool,
    /// Label alignment
    #[serde(default)]
    pub alignment: Option<Alignment>,
    /// Paragraph formatting of list items at this level (indents)
    #[serde(default)]
    pub paragraph_props: ParagraphProperties,
    /// Formatting of the label itself
    #[serde(default)]
    pub run_props: RunProperties,
}

impl Level {
    /// Create a level with nothing specified
    pub fn new(ilvl: u8) -> Self {
        Self {
            ilvl,
            ..Default::default()
        }
    }

    /// Create a numbered level with the given format and template
    pub fn numbered(ilvl: u8, format: NumberFormat, text: impl Into<String>) -> Self {
        Self {
            ilvl,
            start: Some(1),
            num_fmt: Some(format),
            lvl_text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Create a bullet level
    pub fn bullet(ilvl: u8, glyph: impl Into<String>) -> Self {
        Self {
            ilvl,
            start: Some(1),
            num_fmt: Some(NumberFormat::Bullet),
            lvl_text: Some(glyph.into()),
            ..Default::default()
        }
    }

    /// Set the start value
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the suffix
    pub fn with_suffix(mut self, suffix: LevelSuffix) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Set the restart trigger level
    pub fn with_restart(mut self, level: u8) -> Self {
        self.restart = Some(level);
        self
    }

    /// Effective format
    pub fn format(&self) -> NumberFormat {
        self.num_fmt.clone().unwrap_or_default()
    }

    /// Effective suffix
    pub fn effective_suffix(&self) -> LevelSuffix {
        self.suffix.unwrap_or_default()
    }

    /// Level whose advance restarts this one, if any
    pub fn restart_trigger(&self) -> Option<u8> {
        self.restart.or_else(|| self.ilvl.checked_sub(1))
    }
}

// =============================================================================
// Abstract Numbering Definition
// =============================================================================

/// Abstract numbering definition - a template for list styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractNumbering {
    /// Unique identifier
    pub abstract_num_id: u32,
    /// Levels (0-8)
    pub levels: Vec<Level>,
}

impl AbstractNumbering {
    /// Create a definition without levels
    pub fn new(abstract_num_id: u32) -> Self {
        Self {
            abstract_num_id,
            levels: Vec::new(),
        }
    }

    /// Add or replace a level
    pub fn insert_level(&mut self, level: Level) -> Result<()> {
        if level.ilvl > MAX_LEVEL {
            return Err(DocModelError::InvalidLevel(level.ilvl));
        }
        match self.levels.iter_mut().find(|l| l.ilvl == level.ilvl) {
            Some(existing) => *existing = level,
            None => self.levels.push(level),
        }
        Ok(())
    }

    /// Builder form of [`AbstractNumbering::insert_level`]
    pub fn with_level(mut self, level: Level) -> Result<Self> {
        self.insert_level(level)?;
        Ok(self)
    }

    /// Get a level definition
    pub fn get_level(&self, ilvl: u8) -> Option<&Level> {
        self.levels.iter().find(|l| l.ilvl == ilvl)
    }
}

// =============================================================================
// Numbering Instance
// =============================================================================

/// Level override for a numbering instance (`w:lvlOverride`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelOverride {
    /// Level index (0-8)
    pub ilvl: u8,
    /// Override the starting number
    #[serde(default)]
    pub start_override: Option<u32>,
    /// Replace the level definition entirely
    #[serde(default)]
    pub level: Option<Level>,
}

/// Concrete numbering instance - a use of an abstract numbering definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingInstance {
    /// Unique identifier
    pub num_id: u32,
    /// Reference to abstract numbering definition
    pub abstract_num_id: u32,
    /// Per-level overrides
    #[serde(default)]
    pub level_overrides: Vec<LevelOverride>,
}

impl NumberingInstance {
    /// Create a new numbering instance
    pub fn new(num_id: u32, abstract_num_id: u32) -> Self {
        Self {
            num_id,
            abstract_num_id,
            level_overrides: Vec::new(),
        }
    }

    /// Add a start override for a level
    pub fn with_start_override(mut self, ilvl: u8, start: u32) -> Self {
        self.override_entry(ilvl).start_override = Some(start);
        self
    }

    /// Replace a level definition for this instance
    pub fn with_level_override(mut self, level: Level) -> Self {
        let ilvl = level.ilvl;
        self.override_entry(ilvl).level = Some(level);
        self
    }

    fn override_entry(&mut self, ilvl: u8) -> &mut LevelOverride {
        let index = match self.level_overrides.iter().position(|o| o.ilvl == ilvl) {
            Some(index) => index,
            None => {
                self.level_overrides.push(LevelOverride {
                    ilvl,
                    ..Default::default()
                });
                self.level_overrides.len() - 1
            }
        };
        &mut self.level_overrides[index]
    }

    /// Get the override for a level
    pub fn get_override(&self, ilvl: u8) -> Option<&LevelOverride> {
        self.level_overrides.iter().find(|o| o.ilvl == ilvl)
    }

    /// Get the start override for a level
    pub fn get_start_override(&self, ilvl: u8) -> Option<u32> {
        self.get_override(ilvl).and_then(|o| o.start_override)
    }
}

// =============================================================================
// Numbering
// =============================================================================

/// All list definitions of one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Numbering {
    abstract_nums: HashMap<u32, AbstractNumbering>,
    instances: HashMap<u32, NumberingInstance>,
}

impl Numbering {
    /// Create an empty numbering part
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from parsed definitions; repeated ids keep the last definition
    pub fn from_parts(
        abstract_nums: impl IntoIterator<Item = AbstractNumbering>,
        instances: impl IntoIterator<Item = NumberingInstance>,
    ) -> Self {
        Self {
            abstract_nums: abstract_nums
                .into_iter()
                .map(|a| (a.abstract_num_id, a))
                .collect(),
            instances: instances.into_iter().map(|i| (i.num_id, i)).collect(),
        }
    }

    /// Add an abstract numbering definition
    pub fn add_abstract(&mut self, abstract_num: AbstractNumbering) {
        self.abstract_nums
            .insert(abstract_num.abstract_num_id, abstract_num);
    }

    /// Add an instance; its abstract definition must already exist
    pub fn add_instance(&mut self, instance: NumberingInstance) -> Result<()> {
        if !self.abstract_nums.contains_key(&instance.abstract_num_id) {
            return Err(DocModelError::UnknownAbstractNumbering(
                instance.abstract_num_id,
            ));
        }
        self.instances.insert(instance.num_id, instance);
        Ok(())
    }

    /// Get an abstract numbering definition
    pub fn get_abstract(&self, abstract_num_id: u32) -> Option<&AbstractNumbering> {
        self.abstract_nums.get(&abstract_num_id)
    }

    /// Get a numbering instance
    pub fn get_instance(&self, num_id: u32) -> Option<&NumberingInstance> {
        self.instances.get(&num_id)
    }

    /// Get all numbering instances
    pub fn instances(&self) -> impl Iterator<Item = &NumberingInstance> {
        self.instances.values()
    }

    /// Get all abstract numbering definitions
    pub fn abstract_nums(&self) -> impl Iterator<Item = &AbstractNumbering> {
        self.abstract_nums.values()
    }
}

// =============================================================================
// Tests
// =============================================================================
