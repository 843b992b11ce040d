//! List counters and label rendering
//!
//! A [`NumberingTracker`] walks list paragraphs in document order and keeps one
//! counter per `(num_id, ilvl)`. Each instance has its own counter space even
//! when several instances share an abstract definition.

use crate::{format_number, CascadeConfig, LabelTemplate};
use doc_model::{Level, LevelSuffix, NumberFormat, Numbering, MAX_LEVEL};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A rendered list label
#[derive(Debug, Clone, PartialEq)]
pub struct ListLabel {
    /// Label text without the suffix
    pub text: String,
    /// Separator between label and paragraph text
    pub suffix: LevelSuffix,
    /// Bullet (or unnumbered) level
    pub is_bullet: bool,
    /// Effective level definition, for label styling and indents
    pub level: Level,
}

impl ListLabel {
    /// Label text followed by its suffix
    pub fn rendered(&self) -> String {
        format!("{}{}", self.text, self.suffix.as_str())
    }
}

/// Per-document list counter state
pub struct NumberingTracker<'a> {
    numbering: &'a Numbering,
    /// Counter tracking: (num_id, ilvl) -> current count
    counters: HashMap<(u32, u8), u32>,
    /// Parsed label templates, keyed like the counters
    templates: HashMap<(u32, u8), LabelTemplate>,
    default_bullet: String,
}

impl<'a> NumberingTracker<'a> {
    /// Create a tracker with default settings
    pub fn new(numbering: &'a Numbering) -> Self {
        Self::with_config(numbering, &CascadeConfig::default())
    }

    /// Create a tracker using the given settings
    pub fn with_config(numbering: &'a Numbering, config: &CascadeConfig) -> Self {
        Self {
            numbering,
            counters: HashMap::new(),
            templates: HashMap::new(),
            default_bullet: config.default_bullet.clone(),
        }
    }

    /// Effective level definition after instance overrides
    pub fn get_level(&self, num_id: u32, ilvl: u8) -> Option<Level> {
        if ilvl > MAX_LEVEL {
            return None;
        }
        let instance = self.numbering.get_instance(num_id)?;
        let level_override = instance.get_override(ilvl);

        let mut level = match level_override.and_then(|o| o.level.clone()) {
            Some(replacement) => replacement,
            None => self
                .numbering
                .get_abstract(instance.abstract_num_id)?
                .get_level(ilvl)?
                .clone(),
        };
        level.ilvl = ilvl;

        if let Some(start) = level_override.and_then(|o| o.start_override) {
            level.start = Some(start);
        }
        Some(level)
    }

    /// Current counter value, if the level has been counted since its last restart
    pub fn counter(&self, num_id: u32, ilvl: u8) -> Option<u32> {
        self.counters.get(&(num_id, ilvl)).copied()
    }

    /// Advance the counter for a list paragraph and return its full label
    /// (text plus suffix), or an empty string when the reference does not resolve
    pub fn get_number(&mut self, num_id: u32, ilvl: u8) -> String {
        self.next_label(num_id, ilvl)
            .map(|label| label.rendered())
            .unwrap_or_default()
    }

    /// Advance the counter for a list paragraph and return its label
    pub fn next_label(&mut self, num_id: u32, ilvl: u8) -> Option<ListLabel> {
        let Some(level) = self.get_level(num_id, ilvl) else {
            tracing::debug!(
                target: "cascade::numbering",
                num_id,
                ilvl,
                "numbering reference does not resolve"
            );
            return None;
        };

        let format = level.format();
        let key = (num_id, ilvl);
        match self.counters.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(level.start.unwrap_or(1));
            }
            Entry::Occupied(_) if format.is_bullet() => {}
            Entry::Occupied(mut entry) => {
                let count = entry.get_mut();
                *count = count.saturating_add(1);
            }
        }

        self.restart_deeper_levels(num_id, ilvl);

        let label = match format {
            NumberFormat::Bullet => ListLabel {
                text: self.bullet_glyph(&level),
                suffix: LevelSuffix::Nothing,
                is_bullet: true,
                level,
            },
            _ => ListLabel {
                text: self.render_text(num_id, &level),
                suffix: level.effective_suffix(),
                is_bullet: format.is_bullet(),
                level,
            },
        };
        Some(label)
    }

    /// Clear all counters
    pub fn reset(&mut self) {
        self.counters.clear();
    }

    /// Drop the counters of deeper levels that restart when `ilvl` advances
    fn restart_deeper_levels(&mut self, num_id: u32, ilvl: u8) {
        for deeper in (ilvl + 1)..=MAX_LEVEL {
            if !self.counters.contains_key(&(num_id, deeper)) {
                continue;
            }
            let trigger = self
                .get_level(num_id, deeper)
                .and_then(|level| level.restart_trigger());
            if trigger == Some(ilvl) {
                self.counters.remove(&(num_id, deeper));
                tracing::trace!(
                    target: "cascade::numbering",
                    num_id,
                    level = deeper,
                    trigger = ilvl,
                    "restarted list level"
                );
            }
        }
    }

    fn render_text(&mut self, num_id: u32, level: &Level) -> String {
        let Some(text) = level.lvl_text.as_deref() else {
            let count = self.counter(num_id, level.ilvl).unwrap_or(1);
            return count.to_string();
        };

        let template = self
            .templates
            .entry((num_id, level.ilvl))
            .or_insert_with(|| LabelTemplate::parse(text))
            .clone();

        template.render(|referenced| {
            let count = self.counter(num_id, referenced).unwrap_or(1);
            let format = if level.is_legal {
                NumberFormat::Decimal
            } else if referenced == level.ilvl {
                level.format()
            } else {
                self.get_level(num_id, referenced)
                    .map(|l| l.format())
                    .unwrap_or_default()
            };
            format_number(&format, count)
        })
    }

    fn bullet_glyph(&self, level: &Level) -> String {
        match level.lvl_text.as_deref() {
            None | Some("") => self.default_bullet.clone(),
            Some(text) => normalize_bullet(text),
        }
    }
}

/// Map private-use Symbol/Wingdings bullet code points to Unicode glyphs
pub fn normalize_bullet(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{F0B7}' => '\u{2022}',
            '\u{F0A7}' => '\u{25AA}',
            '\u{F0FC}' => '\u{2713}',
            '\u{F0D8}' => '\u{27A2}',
            other => other,
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
