//! Table model - Tables, rows, cells, and their property families
//!
//! Tables are plain value trees handed over by the parser: rows of cells,
//! each cell holding paragraphs. Table, row and cell properties follow the
//! same "every field optional" convention as paragraph and run properties so
//! they can be cascaded from table styles.

use crate::{
    merge_nested, Alignment, Border, BorderEdge, BorderSet, Merge, Paragraph, Shading, StyleId,
};
use serde::{Deserialize, Serialize};

static UNSPECIFIED: Border = Border::Unspecified;

// =============================================================================
// Width Types
// =============================================================================

/// How a width value is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthType {
    /// Let the layout decide
    Auto,
    /// Twips
    Dxa,
    /// Fiftieths of a percent
    Pct,
    /// No width
    Nil,
}

/// Width specification with value and type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableWidth {
    pub value: u32,
    pub width_type: WidthType,
}

impl TableWidth {
    /// Fixed width in twips
    pub fn dxa(value: u32) -> Self {
        Self {
            value,
            width_type: WidthType::Dxa,
        }
    }

    /// Automatic width
    pub fn auto() -> Self {
        Self {
            value: 0,
            width_type: WidthType::Auto,
        }
    }
}

// =============================================================================
// Cell Margins
// =============================================================================

/// Cell margins in twips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMargins {
    pub top: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

impl Merge for CellMargins {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            top: overlay.top.or(self.top),
            bottom: overlay.bottom.or(self.bottom),
            left: overlay.left.or(self.left),
            right: overlay.right.or(self.right),
        }
    }

    fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

// =============================================================================
// Table Properties
// =============================================================================

/// Table layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    Autofit,
    Fixed,
}

/// Table-level formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableProperties {
    /// Preferred table width
    pub width: Option<TableWidth>,
    /// Table alignment within the page
    pub alignment: Option<Alignment>,
    /// Left indent in twips
    pub indent: Option<i32>,
    /// Table borders
    pub borders: Option<BorderSet>,
    /// Default cell margins
    pub cell_margins: Option<CellMargins>,
    /// Layout algorithm
    pub layout: Option<TableLayout>,
    /// Table shading
    pub shading: Option<Shading>,
}

impl Merge for TableProperties {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            width: overlay.width.or(self.width),
            alignment: overlay.alignment.or(self.alignment),
            indent: overlay.indent.or(self.indent),
            borders: merge_nested(&self.borders, &overlay.borders),
            cell_margins: merge_nested(&self.cell_margins, &overlay.cell_margins),
            layout: overlay.layout.or(self.layout),
            shading: merge_nested(&self.shading, &overlay.shading),
        }
    }

    fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.alignment.is_none()
            && self.indent.is_none()
            && self.borders.is_none()
            && self.cell_margins.is_none()
            && self.layout.is_none()
            && self.shading.is_none()
    }
}

// =============================================================================
// Row Properties
// =============================================================================

/// How row height is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightRule {
    Auto,
    AtLeast,
    Exact,
}

/// Row-level formatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowProperties {
    /// Row height in twips
    pub height: Option<u32>,
    pub height_rule: Option<HeightRule>,
    /// Repeat as header row
    pub is_header: Option<bool>,
    /// Do not split across pages
    pub cant_split: Option<bool>,
}

impl Merge for RowProperties {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            height: overlay.height.or(self.height),
            height_rule: overlay.height_rule.or(self.height_rule),
            is_header: overlay.is_header.or(self.is_header),
            cant_split: overlay.cant_split.or(self.cant_split),
        }
    }

    fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.height_rule.is_none()
            && self.is_header.is_none()
            && self.cant_split.is_none()
    }
}

// =============================================================================
// Cell Properties
// =============================================================================

/// Vertical alignment within a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellVerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Vertical merge state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMerge {
    /// Starts a merged region
    Restart,
    /// Continues the region above
    Continue,
}

/// Cell-level formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellProperties {
    /// Preferred cell width
    pub width: Option<TableWidth>,
    /// Cell borders
    pub borders: Option<BorderSet>,
    /// Background shading
    pub shading: Option<Shading>,
    /// Vertical alignment
    pub vertical_align: Option<CellVerticalAlign>,
    /// Cell margins
    pub margins: Option<CellMargins>,
    /// Number of grid columns spanned
    pub grid_span: Option<u32>,
    /// Vertical merge state
    pub v_merge: Option<VerticalMerge>,
}

impl CellProperties {
    /// Create default cell properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the borders
    pub fn with_borders(mut self, borders: BorderSet) -> Self {
        self.borders = Some(borders);
        self
    }

    /// Border slot for an edge class; `Unspecified` when no borders are set
    pub fn border(&self, edge: BorderEdge) -> &Border {
        self.borders
            .as_ref()
            .map(|borders| borders.get(edge))
            .unwrap_or(&UNSPECIFIED)
    }
}

impl Merge for CellProperties {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            width: overlay.width.or(self.width),
            borders: merge_nested(&self.borders, &overlay.borders),
            shading: merge_nested(&self.shading, &overlay.shading),
            vertical_align: overlay.vertical_align.or(self.vertical_align),
            margins: merge_nested(&self.margins, &overlay.margins),
            grid_span: overlay.grid_span.or(self.grid_span),
            v_merge: overlay.v_merge.or(self.v_merge),
        }
    }

    fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.borders.is_none()
            && self.shading.is_none()
            && self.vertical_align.is_none()
            && self.margins.is_none()
            && self.grid_span.is_none()
            && self.v_merge.is_none()
    }
}

// =============================================================================
// Table Cell
// =============================================================================

/// A cell in a table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell properties
    #[serde(default)]
    pub properties: CellProperties,
    /// Cell content
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create a new empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding one paragraph of plain text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            properties: CellProperties::default(),
            paragraphs: vec![Paragraph::with_text(text)],
        }
    }

    /// Set the cell borders
    pub fn with_borders(mut self, borders: BorderSet) -> Self {
        self.properties.borders = Some(borders);
        self
    }

    /// Plain text: non-empty paragraphs joined by newlines
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Table Row
// =============================================================================

/// A row of cells
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row properties
    #[serde(default)]
    pub properties: RowProperties,
    /// Cells, left to right
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from cells
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            properties: RowProperties::default(),
            cells,
        }
    }

    /// Create a row of plain-text cells
    pub fn from_texts<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self::new(texts.into_iter().map(TableCell::with_text).collect())
    }
}

// =============================================================================
// Table
// =============================================================================

/// A table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table style reference
    pub style_id: Option<StyleId>,
    /// Direct table properties
    #[serde(default)]
    pub properties: TableProperties,
    /// Rows, top to bottom
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a table from rows
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            style_id: None,
            properties: TableProperties::default(),
            rows,
        }
    }

    /// Set the table style
    pub fn with_style(mut self, style_id: impl Into<StyleId>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Set the direct table borders
    pub fn with_borders(mut self, borders: BorderSet) -> Self {
        self.properties.borders = Some(borders);
        self
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in cells
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_uses_widest_row() {
        let table = Table::new(vec![
            TableRow::from_texts(["a", "b"]),
            TableRow::from_texts(["c", "d", "e"]),
        ]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_cell_border_defaults_to_unspecified() {
        let cell = TableCell::with_text("x");
        assert!(cell.properties.border(BorderEdge::Top).is_unspecified());

        let cell = cell.with_borders(BorderSet::default().with(BorderEdge::Top, Border::None));
        assert!(cell.properties.border(BorderEdge::Top).is_none());
        assert!(cell.properties.border(BorderEdge::Left).is_unspecified());
    }

    #[test]
    fn test_cell_plain_text_skips_empty_paragraphs() {
        let cell = TableCell {
            properties: CellProperties::default(),
            paragraphs: vec![
                Paragraph::with_text("first"),
                Paragraph::default(),
                Paragraph::with_text("second"),
            ],
        };
        assert_eq!(cell.plain_text(), "first\nsecond");
    }

    #[test]
    fn test_table_properties_merge_borders_nested() {
        let style = TableProperties {
            borders: Some(BorderSet::all(Border::single())),
            ..Default::default()
        };
        let direct = TableProperties {
            borders: Some(BorderSet::default().with(BorderEdge::InsideV, Border::None)),
            indent: Some(120),
            ..Default::default()
        };

        let merged = style.merge(&direct);
        let borders = merged.borders.unwrap();
        assert!(borders.top.is_visible());
        assert!(borders.inside_v.is_none());
        assert_eq!(merged.indent, Some(120));
    }
}
