//! Cascade Engine - Collapses overlapping formatting sources into effective values
//!
//! This crate resolves the cascades of a parsed word-processing document:
//! - Style inheritance chains merged with document defaults and direct formatting
//! - Multi-level list counters, restarts, overrides and label rendering
//! - Border precedence between a table and its cells, and table-to-text output
//!
//! Resolvers borrow the immutable document model and own their mutable state
//! (caches, counters); create one per document conversion.
//!
//! # Example
//!
//! ```rust
//! use cascade_engine::{NumberingTracker, StyleResolver};
//! use doc_model::{
//!     AbstractNumbering, DocumentDefaults, Level, NumberFormat, Numbering,
//!     NumberingInstance, RunProperties, Style, StyleId, StyleSheet,
//! };
//!
//! let styles = StyleSheet::from_styles(
//!     DocumentDefaults::default(),
//!     vec![
//!         Style::paragraph("Normal"),
//!         Style::paragraph("Heading1")
//!             .with_based_on("Normal")
//!             .with_run_props(RunProperties { bold: Some(true), ..Default::default() }),
//!     ],
//! );
//! let mut resolver = StyleResolver::new(&styles);
//! assert_eq!(resolver.resolve_run_properties(&StyleId::new("Heading1")).bold, Some(true));
//!
//! let mut numbering = Numbering::new();
//! numbering.add_abstract(
//!     AbstractNumbering::new(0)
//!         .with_level(Level::numbered(0, NumberFormat::Decimal, "%1."))
//!         .unwrap(),
//! );
//! numbering.add_instance(NumberingInstance::new(1, 0)).unwrap();
//!
//! let mut tracker = NumberingTracker::new(&numbering);
//! assert_eq!(tracker.get_number(1, 0), "1.\t");
//! assert_eq!(tracker.get_number(1, 0), "2.\t");
//! ```

mod error;
mod config;
mod numeral;
mod label;
mod numbering;
mod resolver;
mod borders;
mod table_text;

pub use error::*;
pub use config::*;
pub use numeral::*;
pub use label::*;
pub use numbering::*;
pub use resolver::*;
pub use borders::*;
pub use table_text::*;
