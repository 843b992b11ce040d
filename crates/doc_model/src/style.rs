//! Style system - Style definitions, document defaults, and the style sheet
//!
//! This module holds the immutable style input of a document:
//! - Named styles (Paragraph, Character, Table, Numbering)
//! - Inheritance links via `based_on` and paragraph/character `link` pairs
//! - Conditional table formatting (first row, banding, corners, ...)
//! - Document defaults applied beneath every style
//!
//! Resolution of inheritance chains lives in the cascade engine; nothing here
//! walks `based_on`.

use crate::{
    CellProperties, DocModelError, ParagraphProperties, Result, RowProperties, RunProperties,
    TableProperties,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Style Identifier
// =============================================================================

/// Unique identifier for a style
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleId(pub String);

impl StyleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StyleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&StyleId> for StyleId {
    fn from(id: &StyleId) -> Self {
        id.clone()
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Style Types
// =============================================================================

/// The type of style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleType {
    /// Paragraph style - applied to entire paragraphs
    Paragraph,
    /// Character style - applied to text runs
    Character,
    /// Table style - applied to tables
    Table,
    /// Numbering style - for list formatting
    Numbering,
}

// =============================================================================
// Conditional Table Formatting
// =============================================================================

/// Region of a table a conditional override applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableCondition {
    WholeTable,
    FirstRow,
    LastRow,
    FirstCol,
    LastCol,
    Band1Vert,
    Band2Vert,
    Band1Horz,
    Band2Horz,
    NeCell,
    NwCell,
    SeCell,
    SwCell,
}

/// Formatting a table style applies to one conditional region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStyleOverride {
    pub condition: TableCondition,
    #[serde(default)]
    pub paragraph_props: ParagraphProperties,
    #[serde(default)]
    pub run_props: RunProperties,
    #[serde(default)]
    pub table_props: TableProperties,
    #[serde(default)]
    pub row_props: RowProperties,
    #[serde(default)]
    pub cell_props: CellProperties,
}

impl TableStyleOverride {
    /// Create an empty override for a region
    pub fn new(condition: TableCondition) -> Self {
        Self {
            condition,
            paragraph_props: ParagraphProperties::default(),
            run_props: RunProperties::default(),
            table_props: TableProperties::default(),
            row_props: RowProperties::default(),
            cell_props: CellProperties::default(),
        }
    }
}

// =============================================================================
// Style Definition
// =============================================================================

/// A complete style definition
///
/// An empty property record means the style says nothing about that family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Unique identifier for this style
    pub id: StyleId,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Style type
    pub style_type: StyleType,
    /// Base style this style inherits from
    #[serde(default)]
    pub based_on: Option<StyleId>,
    /// Linked paragraph/character counterpart
    #[serde(default)]
    pub link: Option<StyleId>,
    /// Style to use for the following paragraph
    #[serde(default)]
    pub next_style: Option<StyleId>,
    /// Default style for its type
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub paragraph_props: ParagraphProperties,
    #[serde(default)]
    pub run_props: RunProperties,
    #[serde(default)]
    pub table_props: TableProperties,
    #[serde(default)]
    pub row_props: RowProperties,
    #[serde(default)]
    pub cell_props: CellProperties,
    /// Conditional table formatting, in document order
    #[serde(default)]
    pub conditional_props: Vec<TableStyleOverride>,
}

impl Style {
    /// Create an empty style of the given type
    pub fn new(id: impl Into<StyleId>, style_type: StyleType) -> Self {
        Self {
            id: id.into(),
            name: None,
            style_type,
            based_on: None,
            link: None,
            next_style: None,
            is_default: false,
            paragraph_props: ParagraphProperties::default(),
            run_props: RunProperties::default(),
            table_props: TableProperties::default(),
            row_props: RowProperties::default(),
            cell_props: CellProperties::default(),
            conditional_props: Vec::new(),
        }
    }

    /// Create a new paragraph style
    pub fn paragraph(id: impl Into<StyleId>) -> Self {
        Self::new(id, StyleType::Paragraph)
    }

    /// Create a new character style
    pub fn character(id: impl Into<StyleId>) -> Self {
        Self::new(id, StyleType::Character)
    }

    /// Create a new table style
    pub fn table(id: impl Into<StyleId>) -> Self {
        Self::new(id, StyleType::Table)
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the base style
    pub fn with_based_on(mut self, base: impl Into<StyleId>) -> Self {
        self.based_on = Some(base.into());
        self
    }

    /// Set the linked style
    pub fn with_link(mut self, link: impl Into<StyleId>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set next style
    pub fn with_next_style(mut self, next: impl Into<StyleId>) -> Self {
        self.next_style = Some(next.into());
        self
    }

    /// Mark as the default style of its type
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Set paragraph properties
    pub fn with_paragraph_props(mut self, props: ParagraphProperties) -> Self {
        self.paragraph_props = props;
        self
    }

    /// Set run properties
    pub fn with_run_props(mut self, props: RunProperties) -> Self {
        self.run_props = props;
        self
    }

    /// Set table properties
    pub fn with_table_props(mut self, props: TableProperties) -> Self {
        self.table_props = props;
        self
    }

    /// Set row properties
    pub fn with_row_props(mut self, props: RowProperties) -> Self {
        self.row_props = props;
        self
    }

    /// Set cell properties
    pub fn with_cell_props(mut self, props: CellProperties) -> Self {
        self.cell_props = props;
        self
    }

    /// Add a conditional table override
    pub fn with_conditional(mut self, conditional: TableStyleOverride) -> Self {
        self.conditional_props.push(conditional);
        self
    }
}

// =============================================================================
// Document Defaults
// =============================================================================

/// Formatting applied beneath every style (`w:docDefaults`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDefaults {
    #[serde(default)]
    pub paragraph_props: Option<ParagraphProperties>,
    #[serde(default)]
    pub run_props: Option<RunProperties>,
}

// =============================================================================
// Style Sheet
// =============================================================================

/// All styles of one document, indexed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Document defaults
    #[serde(default)]
    pub defaults: DocumentDefaults,
    /// All styles indexed by ID
    styles: HashMap<StyleId, Style>,
}

impl StyleSheet {
    /// Create an empty style sheet
    pub fn new(defaults: DocumentDefaults) -> Self {
        Self {
            defaults,
            styles: HashMap::new(),
        }
    }

    /// Build from a list of styles; a repeated id keeps the last definition
    pub fn from_styles(defaults: DocumentDefaults, styles: impl IntoIterator<Item = Style>) -> Self {
        let mut sheet = Self::new(defaults);
        for style in styles {
            sheet.register(style);
        }
        sheet
    }

    /// Register a style, replacing any style with the same id
    pub fn register(&mut self, style: Style) {
        self.styles.insert(style.id.clone(), style);
    }

    /// Insert a style, rejecting duplicate ids
    pub fn insert(&mut self, style: Style) -> Result<()> {
        if self.styles.contains_key(&style.id) {
            return Err(DocModelError::DuplicateStyle(style.id));
        }
        self.register(style);
        Ok(())
    }

    /// Get a style by ID
    pub fn get(&self, id: &StyleId) -> Option<&Style> {
        self.styles.get(id)
    }

    /// Check if a style exists
    pub fn contains(&self, id: &StyleId) -> bool {
        self.styles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Get all styles
    pub fn all_styles(&self) -> impl Iterator<Item = &Style> {
        self.styles.values()
    }

    /// Get all styles of one type
    pub fn styles_of_type(&self, style_type: StyleType) -> impl Iterator<Item = &Style> {
        self.styles
            .values()
            .filter(move |s| s.style_type == style_type)
    }

    /// The style marked as default for a type, if any
    ///
    /// When several styles claim to be the default, the smallest id wins so the
    /// answer does not depend on hash order.
    pub fn default_style(&self, style_type: StyleType) -> Option<&Style> {
        self.styles_of_type(style_type)
            .filter(|s| s.is_default)
            .min_by(|a, b| a.id.cmp(&b.id))
    }
}

// =============================================================================
// Tests
// =============================================================================
