//! Table border precedence
//!
//! Decides which of the six border classes of a table are visible, combining
//! the table-level border set with the slots of the cells that sit on each
//! edge. Cell slots beat the table: one visible adjacent slot shows the edge,
//! and adjacent slots that are all explicitly `None` hide it even when the
//! table default draws it.

use doc_model::{Border, BorderEdge, BorderSet, Table};
use serde::{Deserialize, Serialize};

/// Which border classes of a table are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderInfo {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    /// Horizontal lines between rows
    pub inside_h: bool,
    /// Vertical lines between columns
    pub inside_v: bool,
}

impl BorderInfo {
    /// Every border drawn
    pub fn full() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
            inside_h: true,
            inside_v: true,
        }
    }

    /// Check if any border is drawn
    pub fn has_any(&self) -> bool {
        self.top || self.bottom || self.left || self.right || self.inside_h || self.inside_v
    }

    pub fn get(&self, edge: BorderEdge) -> bool {
        match edge {
            BorderEdge::Top => self.top,
            BorderEdge::Bottom => self.bottom,
            BorderEdge::Left => self.left,
            BorderEdge::Right => self.right,
            BorderEdge::InsideH => self.inside_h,
            BorderEdge::InsideV => self.inside_v,
        }
    }

    fn set(&mut self, edge: BorderEdge, visible: bool) {
        match edge {
            BorderEdge::Top => self.top = visible,
            BorderEdge::Bottom => self.bottom = visible,
            BorderEdge::Left => self.left = visible,
            BorderEdge::Right => self.right = visible,
            BorderEdge::InsideH => self.inside_h = visible,
            BorderEdge::InsideV => self.inside_v = visible,
        }
    }
}

/// Detect visible borders from the table's direct borders and its cells
pub fn detect_borders(table: &Table) -> BorderInfo {
    match &table.properties.borders {
        Some(borders) => detect_borders_with(table, borders),
        None => detect_borders_with(table, &BorderSet::default()),
    }
}

/// Detect visible borders against a caller-supplied table-level border set
/// (for example one already resolved through the table style)
pub fn detect_borders_with(table: &Table, table_level: &BorderSet) -> BorderInfo {
    let mut info = BorderInfo::default();
    for edge in BorderEdge::ALL {
        let slots = adjacent_slots(table, edge);
        info.set(edge, edge_visible(&slots, table_level.get(edge)));
    }
    tracing::trace!(target: "cascade::borders", ?info, "detected table borders");
    info
}

fn edge_visible(slots: &[&Border], table_slot: &Border) -> bool {
    if slots.iter().any(|slot| slot.is_visible()) {
        return true;
    }
    if !slots.is_empty() && slots.iter().all(|slot| slot.is_none()) {
        return false;
    }
    table_slot.is_visible()
}

/// Cell slots that lie on an edge class
fn adjacent_slots(table: &Table, edge: BorderEdge) -> Vec<&Border> {
    let rows = &table.rows;
    let last_row = rows.len().saturating_sub(1);

    match edge {
        BorderEdge::Top => rows
            .first()
            .map(|row| row.cells.iter().map(|c| c.properties.border(edge)).collect())
            .unwrap_or_default(),
        BorderEdge::Bottom => rows
            .last()
            .map(|row| row.cells.iter().map(|c| c.properties.border(edge)).collect())
            .unwrap_or_default(),
        BorderEdge::Left => rows
            .iter()
            .filter_map(|row| row.cells.first())
            .map(|c| c.properties.border(edge))
            .collect(),
        BorderEdge::Right => rows
            .iter()
            .filter_map(|row| row.cells.last())
            .map(|c| c.properties.border(edge))
            .collect(),
        BorderEdge::InsideH => rows
            .iter()
            .enumerate()
            .flat_map(|(index, row)| {
                let below = (index < last_row).then_some(BorderEdge::Bottom);
                let above = (index > 0).then_some(BorderEdge::Top);
                row.cells.iter().flat_map(move |cell| {
                    below
                        .into_iter()
                        .chain(above)
                        .map(move |side| cell.properties.border(side))
                })
            })
            .collect(),
        BorderEdge::InsideV => rows
            .iter()
            .flat_map(|row| {
                let last_cell = row.cells.len().saturating_sub(1);
                row.cells.iter().enumerate().flat_map(move |(index, cell)| {
                    let right = (index < last_cell).then_some(BorderEdge::Right);
                    let left = (index > 0).then_some(BorderEdge::Left);
                    right
                        .into_iter()
                        .chain(left)
                        .map(move |side| cell.properties.border(side))
                })
            })
            .collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================
