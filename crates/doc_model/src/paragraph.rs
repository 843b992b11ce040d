//! Paragraph - a block of runs with a paragraph style and direct formatting

use crate::{NumberingReference, ParagraphProperties, Run, StyleId};
use serde::{Deserialize, Serialize};

/// A paragraph containing text runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style reference; `None` means the document's default paragraph style
    #[serde(default)]
    pub paragraph_style_id: Option<StyleId>,
    /// Direct formatting overrides
    #[serde(default)]
    pub direct_formatting: ParagraphProperties,
    /// Text runs
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single unformatted run
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
            ..Default::default()
        }
    }

    /// Set the paragraph style
    pub fn with_style(mut self, style_id: impl Into<StyleId>) -> Self {
        self.paragraph_style_id = Some(style_id.into());
        self
    }

    /// Set direct formatting
    pub fn with_formatting(mut self, props: ParagraphProperties) -> Self {
        self.direct_formatting = props;
        self
    }

    /// Append a run
    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Direct list membership, if any
    pub fn numbering(&self) -> Option<&NumberingReference> {
        self.direct_formatting.numbering.as_ref()
    }
}
