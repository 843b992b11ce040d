//! Property families and the overlay merge
//!
//! Every formatting property is an `Option`: `None` means "not specified at
//! this level" and lets a lower level of the cascade show through. Merging
//! overlays one record onto another, field by field. Nested records (spacing,
//! indentation, fonts, shading, borders) merge recursively rather than being
//! replaced wholesale.

use crate::BorderSet;
use serde::{Deserialize, Serialize};

// =============================================================================
// Merge
// =============================================================================

/// Overlay merge for a property record.
pub trait Merge: Clone + Default {
    /// Merge `overlay` on top of `self`.
    ///
    /// Fields present in `overlay` replace the corresponding fields of `self`;
    /// absent fields keep the value from `self`.
    fn merge(&self, overlay: &Self) -> Self;

    /// Check if no field is specified
    fn is_empty(&self) -> bool;
}

/// Merge two optional nested records field by field.
pub fn merge_nested<T: Merge>(base: &Option<T>, overlay: &Option<T>) -> Option<T> {
    match (base, overlay) {
        (Some(base), Some(overlay)) => Some(base.merge(overlay)),
        (None, Some(overlay)) => Some(overlay.clone()),
        (base, None) => base.clone(),
    }
}

/// Fold a sequence of records, root first, into one.
pub fn merge_all<'a, T, I>(layers: I) -> T
where
    T: Merge + 'a,
    I: IntoIterator<Item = &'a T>,
{
    layers
        .into_iter()
        .fold(T::default(), |acc, layer| acc.merge(layer))
}

// =============================================================================
// Shared Records
// =============================================================================

/// Background shading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shading {
    /// Fill color (hex, without '#')
    pub fill: Option<String>,
    /// Pattern color
    pub color: Option<String>,
    /// Pattern name (e.g. "clear", "solid", "pct25")
    pub pattern: Option<String>,
}

impl Merge for Shading {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            fill: overlay.fill.clone().or_else(|| self.fill.clone()),
            color: overlay.color.clone().or_else(|| self.color.clone()),
            pattern: overlay.pattern.clone().or_else(|| self.pattern.clone()),
        }
    }

    fn is_empty(&self) -> bool {
        self.fill.is_none() && self.color.is_none() && self.pattern.is_none()
    }
}

// =============================================================================
// Paragraph Properties
// =============================================================================

/// Paragraph alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
    Distribute,
}

/// How the `line` value of [`Spacing`] is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineRule {
    /// `line` is in 240ths of a line
    Auto,
    /// `line` is an exact height in twips
    Exact,
    /// `line` is a minimum height in twips
    AtLeast,
}

/// Paragraph spacing, in twips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub before: Option<u32>,
    pub after: Option<u32>,
    pub line: Option<u32>,
    pub line_rule: Option<LineRule>,
}

impl Merge for Spacing {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            before: overlay.before.or(self.before),
            after: overlay.after.or(self.after),
            line: overlay.line.or(self.line),
            line_rule: overlay.line_rule.or(self.line_rule),
        }
    }

    fn is_empty(&self) -> bool {
        self.before.is_none()
            && self.after.is_none()
            && self.line.is_none()
            && self.line_rule.is_none()
    }
}

/// Paragraph indentation, in twips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indentation {
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub first_line: Option<i32>,
    pub hanging: Option<i32>,
}

impl Merge for Indentation {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            left: overlay.left.or(self.left),
            right: overlay.right.or(self.right),
            first_line: overlay.first_line.or(self.first_line),
            hanging: overlay.hanging.or(self.hanging),
        }
    }

    fn is_empty(&self) -> bool {
        self.left.is_none()
            && self.right.is_none()
            && self.first_line.is_none()
            && self.hanging.is_none()
    }
}

/// Reference from a paragraph (or paragraph style) to a numbering instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingReference {
    /// Numbering instance id
    pub num_id: Option<u32>,
    /// List level (0-8)
    pub ilvl: Option<u8>,
}

impl NumberingReference {
    pub fn new(num_id: u32, ilvl: u8) -> Self {
        Self {
            num_id: Some(num_id),
            ilvl: Some(ilvl),
        }
    }
}

impl Merge for NumberingReference {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            num_id: overlay.num_id.or(self.num_id),
            ilvl: overlay.ilvl.or(self.ilvl),
        }
    }

    fn is_empty(&self) -> bool {
        self.num_id.is_none() && self.ilvl.is_none()
    }
}

/// Paragraph formatting properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphProperties {
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Space before/after and line spacing
    pub spacing: Option<Spacing>,
    /// Left/right/first-line/hanging indentation
    pub indentation: Option<Indentation>,
    /// Keep with next paragraph
    pub keep_next: Option<bool>,
    /// Keep lines together
    pub keep_lines: Option<bool>,
    /// Page break before
    pub page_break_before: Option<bool>,
    /// Widow/orphan control
    pub widow_control: Option<bool>,
    /// Outline level (0-8)
    pub outline_level: Option<u8>,
    /// List membership
    pub numbering: Option<NumberingReference>,
    /// Background shading
    pub shading: Option<Shading>,
    /// Paragraph borders (`inside_h` is the between-paragraphs border)
    pub borders: Option<BorderSet>,
    /// Right-to-left paragraph
    pub bidi: Option<bool>,
}

impl ParagraphProperties {
    /// Create new empty paragraph properties
    pub fn new() -> Self {
        Self::default()
    }
}

impl Merge for ParagraphProperties {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            alignment: overlay.alignment.or(self.alignment),
            spacing: merge_nested(&self.spacing, &overlay.spacing),
            indentation: merge_nested(&self.indentation, &overlay.indentation),
            keep_next: overlay.keep_next.or(self.keep_next),
            keep_lines: overlay.keep_lines.or(self.keep_lines),
            page_break_before: overlay.page_break_before.or(self.page_break_before),
            widow_control: overlay.widow_control.or(self.widow_control),
            outline_level: overlay.outline_level.or(self.outline_level),
            numbering: merge_nested(&self.numbering, &overlay.numbering),
            shading: merge_nested(&self.shading, &overlay.shading),
            borders: merge_nested(&self.borders, &overlay.borders),
            bidi: overlay.bidi.or(self.bidi),
        }
    }

    fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.spacing.is_none()
            && self.indentation.is_none()
            && self.keep_next.is_none()
            && self.keep_lines.is_none()
            && self.page_break_before.is_none()
            && self.widow_control.is_none()
            && self.outline_level.is_none()
            && self.numbering.is_none()
            && self.shading.is_none()
            && self.borders.is_none()
            && self.bidi.is_none()
    }
}

// =============================================================================
// Run Properties
// =============================================================================

/// Font slots of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFonts {
    pub ascii: Option<String>,
    pub h_ansi: Option<String>,
    pub east_asia: Option<String>,
    pub cs: Option<String>,
}

impl RunFonts {
    /// Use the same family for every slot
    pub fn all(family: impl Into<String>) -> Self {
        let family = family.into();
        Self {
            ascii: Some(family.clone()),
            h_ansi: Some(family.clone()),
            east_asia: Some(family.clone()),
            cs: Some(family),
        }
    }

    /// The family used for Latin text
    pub fn primary(&self) -> Option<&str> {
        self.ascii.as_deref().or(self.h_ansi.as_deref())
    }
}

impl Merge for RunFonts {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            ascii: overlay.ascii.clone().or_else(|| self.ascii.clone()),
            h_ansi: overlay.h_ansi.clone().or_else(|| self.h_ansi.clone()),
            east_asia: overlay.east_asia.clone().or_else(|| self.east_asia.clone()),
            cs: overlay.cs.clone().or_else(|| self.cs.clone()),
        }
    }

    fn is_empty(&self) -> bool {
        self.ascii.is_none() && self.h_ansi.is_none() && self.east_asia.is_none() && self.cs.is_none()
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnderlineStyle {
    /// Explicitly no underline
    None,
    Single,
    Double,
    Thick,
    Dotted,
    Dash,
    Wave,
    Words,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Baseline,
    Superscript,
    Subscript,
}

/// Character (run) formatting properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunProperties {
    /// Font families
    pub fonts: Option<RunFonts>,
    /// Font size in half-points
    pub size: Option<u32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<UnderlineStyle>,
    pub strike: Option<bool>,
    pub double_strike: Option<bool>,
    /// Text color (hex, without '#')
    pub color: Option<String>,
    /// Highlight color name
    pub highlight: Option<String>,
    pub vertical_align: Option<VerticalAlign>,
    /// All caps
    pub caps: Option<bool>,
    pub small_caps: Option<bool>,
    /// Character spacing adjustment in twips
    pub spacing: Option<i32>,
    pub shading: Option<Shading>,
    pub hidden: Option<bool>,
}

impl RunProperties {
    /// Create new empty run properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Font size in points
    pub fn size_points(&self) -> Option<f32> {
        self.size.map(|half_points| half_points as f32 / 2.0)
    }
}

impl Merge for RunProperties {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            fonts: merge_nested(&self.fonts, &overlay.fonts),
            size: overlay.size.or(self.size),
            bold: overlay.bold.or(self.bold),
            italic: overlay.italic.or(self.italic),
            underline: overlay.underline.or(self.underline),
            strike: overlay.strike.or(self.strike),
            double_strike: overlay.double_strike.or(self.double_strike),
            color: overlay.color.clone().or_else(|| self.color.clone()),
            highlight: overlay.highlight.clone().or_else(|| self.highlight.clone()),
            vertical_align: overlay.vertical_align.or(self.vertical_align),
            caps: overlay.caps.or(self.caps),
            small_caps: overlay.small_caps.or(self.small_caps),
            spacing: overlay.spacing.or(self.spacing),
            shading: merge_nested(&self.shading, &overlay.shading),
            hidden: overlay.hidden.or(self.hidden),
        }
    }

    fn is_empty(&self) -> bool {
        self.fonts.is_none()
            && self.size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.strike.is_none()
            && self.double_strike.is_none()
            && self.color.is_none()
            && self.highlight.is_none()
            && self.vertical_align.is_none()
            && self.caps.is_none()
            && self.small_caps.is_none()
            && self.spacing.is_none()
            && self.shading.is_none()
            && self.hidden.is_none()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_spacing_merges_field_by_field() {
        let base = ParagraphProperties {
            spacing: Some(Spacing {
                before: Some(200),
                after: Some(200),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overlay = ParagraphProperties {
            spacing: Some(Spacing {
                before: Some(240),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = base.merge(&overlay);
        let spacing = merged.spacing.unwrap();
        assert_eq!(spacing.before, Some(240));
        assert_eq!(spacing.after, Some(200));
    }

    #[test]
    fn test_absent_overlay_keeps_base() {
        let base = RunProperties {
            bold: Some(true),
            color: Some("FF0000".to_string()),
            ..Default::default()
        };
        let merged = base.merge(&RunProperties::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_explicit_false_overrides() {
        let base = RunProperties {
            bold: Some(true),
            ..Default::default()
        };
        let overlay = RunProperties {
            bold: Some(false),
            ..Default::default()
        };
        assert_eq!(base.merge(&overlay).bold, Some(false));
    }

    #[test]
    fn test_fonts_merge_per_slot() {
        let base = RunProperties {
            fonts: Some(RunFonts::all("Calibri")),
            ..Default::default()
        };
        let overlay = RunProperties {
            fonts: Some(RunFonts {
                east_asia: Some("MS Mincho".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let fonts = base.merge(&overlay).fonts.unwrap();
        assert_eq!(fonts.primary(), Some("Calibri"));
        assert_eq!(fonts.east_asia.as_deref(), Some("MS Mincho"));
    }

    #[test]
    fn test_numbering_reference_merges_ilvl_separately() {
        let style = ParagraphProperties {
            numbering: Some(NumberingReference {
                num_id: Some(3),
                ilvl: None,
            }),
            ..Default::default()
        };
        let direct = ParagraphProperties {
            numbering: Some(NumberingReference {
                num_id: None,
                ilvl: Some(2),
            }),
            ..Default::default()
        };

        assert_eq!(
            style.merge(&direct).numbering,
            Some(NumberingReference::new(3, 2))
        );
    }

    #[test]
    fn test_merge_all_folds_root_first() {
        let layers = [
            RunProperties {
                size: Some(22),
                ..Default::default()
            },
            RunProperties {
                size: Some(28),
                bold: Some(true),
                ..Default::default()
            },
            RunProperties {
                italic: Some(true),
                ..Default::default()
            },
        ];

        let merged: RunProperties = merge_all(layers.iter());
        assert_eq!(merged.size, Some(28));
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.italic, Some(true));
        assert_eq!(merged.size_points(), Some(14.0));
    }

    #[test]
    fn test_is_empty() {
        assert!(ParagraphProperties::new().is_empty());
        assert!(RunProperties::new().is_empty());
        let props = ParagraphProperties {
            keep_next: Some(false),
            ..Default::default()
        };
        assert!(!props.is_empty());
    }
}
