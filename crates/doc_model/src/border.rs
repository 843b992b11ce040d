//! Tri-state borders for paragraphs, tables and cells
//!
//! A border slot is either not mentioned at all, explicitly turned off, or a
//! visible line. The first two are distinct: an unmentioned cell border falls
//! through to the table, an explicitly disabled one suppresses it.

use crate::Merge;
use serde::{Deserialize, Serialize};

// =============================================================================
// Border Line
// =============================================================================

/// Line style of a visible border
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
    DotDash,
    Triple,
    Wave,
    /// Any other art or line style
    Other,
}

/// A visible border line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderLine {
    /// Line style
    pub style: BorderStyle,
    /// Width in eighths of a point
    pub width: Option<u32>,
    /// Color (hex, without '#'; "auto" allowed)
    pub color: Option<String>,
}

impl BorderLine {
    /// Create a single line of the given width
    pub fn single(width: u32) -> Self {
        Self {
            style: BorderStyle::Single,
            width: Some(width),
            color: None,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Border
// =============================================================================

/// One border slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Border {
    /// Not mentioned at this level
    #[default]
    Unspecified,
    /// Explicitly disabled (`none` / `nil`)
    None,
    /// A visible line
    Visible(BorderLine),
}

impl Border {
    /// Shorthand for a visible single line
    pub fn single() -> Self {
        Border::Visible(BorderLine::single(4))
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Border::Visible(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Border::None)
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Border::Unspecified)
    }

    /// The line, if visible
    pub fn line(&self) -> Option<&BorderLine> {
        match self {
            Border::Visible(line) => Some(line),
            _ => None,
        }
    }

    /// Overlay `overlay` on this slot; only `Unspecified` lets this slot through
    pub fn overlay(&self, overlay: &Border) -> Border {
        if overlay.is_unspecified() {
            self.clone()
        } else {
            overlay.clone()
        }
    }
}

// =============================================================================
// Border Set
// =============================================================================

/// The six border edge classes of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderEdge {
    Top,
    Bottom,
    Left,
    Right,
    InsideH,
    InsideV,
}

impl BorderEdge {
    /// Every edge class, in declaration order
    pub const ALL: [BorderEdge; 6] = [
        BorderEdge::Top,
        BorderEdge::Bottom,
        BorderEdge::Left,
        BorderEdge::Right,
        BorderEdge::InsideH,
        BorderEdge::InsideV,
    ];
}

/// Borders for the six edge classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSet {
    pub top: Border,
    pub bottom: Border,
    pub left: Border,
    pub right: Border,
    pub inside_h: Border,
    pub inside_v: Border,
}

impl BorderSet {
    /// Same border on every edge
    pub fn all(border: Border) -> Self {
        Self {
            top: border.clone(),
            bottom: border.clone(),
            left: border.clone(),
            right: border.clone(),
            inside_h: border.clone(),
            inside_v: border,
        }
    }

    /// Border slot for an edge class
    pub fn get(&self, edge: BorderEdge) -> &Border {
        match edge {
            BorderEdge::Top => &self.top,
            BorderEdge::Bottom => &self.bottom,
            BorderEdge::Left => &self.left,
            BorderEdge::Right => &self.right,
            BorderEdge::InsideH => &self.inside_h,
            BorderEdge::InsideV => &self.inside_v,
        }
    }

    /// Replace the slot for an edge class
    pub fn set(&mut self, edge: BorderEdge, border: Border) {
        let slot = match edge {
            BorderEdge::Top => &mut self.top,
            BorderEdge::Bottom => &mut self.bottom,
            BorderEdge::Left => &mut self.left,
            BorderEdge::Right => &mut self.right,
            BorderEdge::InsideH => &mut self.inside_h,
            BorderEdge::InsideV => &mut self.inside_v,
        };
        *slot = border;
    }

    /// Builder form of [`BorderSet::set`]
    pub fn with(mut self, edge: BorderEdge, border: Border) -> Self {
        self.set(edge, border);
        self
    }
}

impl Merge for BorderSet {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            top: self.top.overlay(&overlay.top),
            bottom: self.bottom.overlay(&overlay.bottom),
            left: self.left.overlay(&overlay.left),
            right: self.right.overlay(&overlay.right),
            inside_h: self.inside_h.overlay(&overlay.inside_h),
            inside_v: self.inside_v.overlay(&overlay.inside_v),
        }
    }

    fn is_empty(&self) -> bool {
        BorderEdge::ALL.iter().all(|edge| self.get(*edge).is_unspecified())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_overlay_falls_through() {
        let base = BorderSet::all(Border::single());
        let merged = base.merge(&BorderSet::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_explicit_none_suppresses() {
        let base = BorderSet::all(Border::single());
        let overlay = BorderSet::default().with(BorderEdge::Top, Border::None);

        let merged = base.merge(&overlay);
        assert!(merged.top.is_none());
        assert!(merged.bottom.is_visible());
    }

    #[test]
    fn test_set_and_get_each_edge() {
        let mut set = BorderSet::default();
        assert!(set.is_empty());
        for edge in BorderEdge::ALL {
            set.set(edge, Border::None);
            assert!(set.get(edge).is_none());
        }
        assert!(!set.is_empty());
    }

    #[test]
    fn test_json_omitted_slots_are_unspecified() {
        let set: BorderSet = serde_json::from_str(
            r#"{"top": "none", "bottom": {"visible": {"style": "double", "width": 8, "color": null}}}"#,
        )
        .unwrap();
        assert!(set.top.is_none());
        assert_eq!(set.bottom.line().map(|l| l.style), Some(BorderStyle::Double));
        assert!(set.left.is_unspecified());
        assert!(set.inside_v.is_unspecified());
    }

    #[test]
    fn test_line_accessor() {
        let border = Border::Visible(BorderLine::single(8).with_color("FF0000"));
        assert_eq!(border.line().and_then(|l| l.width), Some(8));
        assert!(Border::None.line().is_none());
    }
}
