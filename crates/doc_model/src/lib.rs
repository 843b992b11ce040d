//! Document Model - Immutable input for cascade resolution
//!
//! This crate holds the values an OOXML parser produces for one document:
//! styles and document defaults, numbering definitions, and tables of
//! paragraphs. Every formatting property is optional so that layers of the
//! cascade can be overlaid with [`Merge`].

mod error;
mod properties;
mod border;
mod run;
mod paragraph;
pub mod style;
pub mod table;
pub mod list;

pub use error::*;
pub use properties::*;
pub use border::*;
pub use run::*;
pub use paragraph::*;
pub use style::*;
pub use table::*;
pub use list::*;
