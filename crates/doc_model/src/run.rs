//! Text run - a contiguous span of text with consistent formatting

use crate::{RunProperties, StyleId};
use serde::{Deserialize, Serialize};

/// A text run - contiguous text with consistent formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content of this run
    pub text: String,
    /// Character style reference
    #[serde(default)]
    pub character_style_id: Option<StyleId>,
    /// Direct formatting overrides
    #[serde(default)]
    pub direct_formatting: RunProperties,
}

impl Run {
    /// Create a new run with text content
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            character_style_id: None,
            direct_formatting: RunProperties::default(),
        }
    }

    /// Set the character style
    pub fn with_style(mut self, style_id: impl Into<StyleId>) -> Self {
        self.character_style_id = Some(style_id.into());
        self
    }

    /// Set direct formatting
    pub fn with_formatting(mut self, props: RunProperties) -> Self {
        self.direct_formatting = props;
        self
    }
}
