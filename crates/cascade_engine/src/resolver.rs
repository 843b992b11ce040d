//! Style resolution - inheritance chains, document defaults, direct formatting
//!
//! A [`StyleResolver`] borrows an immutable [`StyleSheet`] for one conversion and
//! caches every resolved style by id. The cache is never invalidated on its
//! own; call [`StyleResolver::clear_cache`] if the sheet is swapped out.

use doc_model::{
    merge_all, CellProperties, Merge, Paragraph, ParagraphProperties, RowProperties, Run,
    RunProperties, Style, StyleId, StyleSheet, StyleType, Table, TableProperties,
    TableStyleOverride,
};
use std::collections::{HashMap, HashSet};

/// A fully resolved style with all inherited properties merged
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// The style ID this was resolved from
    pub style_id: StyleId,
    pub paragraph_props: ParagraphProperties,
    pub run_props: RunProperties,
    pub table_props: TableProperties,
    pub row_props: RowProperties,
    pub cell_props: CellProperties,
    /// Conditional table formatting, root style first
    pub conditional_props: Vec<TableStyleOverride>,
    /// Chain of style IDs that contributed to this resolution, root first
    pub inheritance_chain: Vec<StyleId>,
}

/// Resolves effective formatting for one document
pub struct StyleResolver<'a> {
    styles: &'a StyleSheet,
    cache: HashMap<StyleId, ResolvedStyle>,
}

impl<'a> StyleResolver<'a> {
    pub fn new(styles: &'a StyleSheet) -> Self {
        Self {
            styles,
            cache: HashMap::new(),
        }
    }

    /// The style sheet being resolved
    pub fn styles(&self) -> &'a StyleSheet {
        self.styles
    }

    /// The style's own definition, without anything inherited
    pub fn resolve_style(&self, id: &StyleId) -> Option<Style> {
        self.styles.get(id).cloned()
    }

    /// Ids of the styles that contribute to `id`, root first
    ///
    /// Empty for an unknown id.
    pub fn inheritance_chain(&self, id: &StyleId) -> Vec<StyleId> {
        self.chain(id).into_iter().map(|s| s.id.clone()).collect()
    }

    /// Resolve a style, using the cache when possible
    pub fn resolve(&mut self, id: &StyleId) -> Option<&ResolvedStyle> {
        if self.cache.contains_key(id) {
            tracing::trace!(target: "cascade::styles", style = %id, "style cache hit");
        } else {
            tracing::trace!(target: "cascade::styles", style = %id, "style cache miss");
            let resolved = self.compute(id)?;
            self.cache.insert(id.clone(), resolved);
        }
        self.cache.get(id)
    }

    pub fn resolve_paragraph_properties(&mut self, id: &StyleId) -> ParagraphProperties {
        self.resolve(id)
            .map(|r| r.paragraph_props.clone())
            .unwrap_or_default()
    }

    pub fn resolve_run_properties(&mut self, id: &StyleId) -> RunProperties {
        self.resolve(id)
            .map(|r| r.run_props.clone())
            .unwrap_or_default()
    }

    pub fn resolve_table_properties(&mut self, id: &StyleId) -> TableProperties {
        self.resolve(id)
            .map(|r| r.table_props.clone())
            .unwrap_or_default()
    }

    pub fn resolve_row_properties(&mut self, id: &StyleId) -> RowProperties {
        self.resolve(id)
            .map(|r| r.row_props.clone())
            .unwrap_or_default()
    }

    pub fn resolve_cell_properties(&mut self, id: &StyleId) -> CellProperties {
        self.resolve(id)
            .map(|r| r.cell_props.clone())
            .unwrap_or_default()
    }

    /// Conditional table formatting along the chain, root first
    ///
    /// Later entries take precedence when several apply to the same cell.
    pub fn conditional_table_properties(&mut self, id: &StyleId) -> Vec<TableStyleOverride> {
        self.resolve(id)
            .map(|r| r.conditional_props.clone())
            .unwrap_or_default()
    }

    /// Apply direct formatting on top of resolved style formatting
    ///
    /// Absent direct fields keep the inherited value.
    pub fn merge_with_direct<T: Merge>(resolved: &T, direct: &T) -> T {
        resolved.merge(direct)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Effective paragraph formatting: defaults, style chain, direct formatting
    ///
    /// A paragraph without a style uses the document's default paragraph style.
    pub fn effective_paragraph(&mut self, paragraph: &Paragraph) -> ParagraphProperties {
        let base = match self.paragraph_style_id(paragraph) {
            Some(id) if self.styles.contains(&id) => self.resolve_paragraph_properties(&id),
            _ => self.styles.defaults.paragraph_props.clone().unwrap_or_default(),
        };
        Self::merge_with_direct(&base, &paragraph.direct_formatting)
    }

    /// Effective run formatting: defaults, paragraph style chain, character
    /// style chain, direct formatting
    pub fn effective_run(&mut self, paragraph: &Paragraph, run: &Run) -> RunProperties {
        let mut props = match self.paragraph_style_id(paragraph) {
            Some(id) if self.styles.contains(&id) => self.resolve_run_properties(&id),
            _ => self.styles.defaults.run_props.clone().unwrap_or_default(),
        };

        if let Some(char_id) = &run.character_style_id {
            props = props.merge(&self.chain_run_properties(char_id));
        }

        Self::merge_with_direct(&props, &run.direct_formatting)
    }

    /// Effective table formatting: table style chain overlaid with direct formatting
    ///
    /// A table without a style uses the document's default table style.
    pub fn effective_table(&mut self, table: &Table) -> TableProperties {
        let style_id = table.style_id.clone().or_else(|| {
            self.styles
                .default_style(StyleType::Table)
                .map(|s| s.id.clone())
        });
        let base = style_id
            .map(|id| self.resolve_table_properties(&id))
            .unwrap_or_default();
        Self::merge_with_direct(&base, &table.properties)
    }

    fn paragraph_style_id(&self, paragraph: &Paragraph) -> Option<StyleId> {
        paragraph.paragraph_style_id.clone().or_else(|| {
            self.styles
                .default_style(StyleType::Paragraph)
                .map(|s| s.id.clone())
        })
    }

    /// Walk `based_on` from `id` toward the root; returns the chain root first
    fn chain(&self, id: &StyleId) -> Vec<&'a Style> {
        let styles = self.styles;
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = styles.get(id);

        while let Some(style) = current {
            visited.insert(&style.id);
            chain.push(style);

            current = match &style.based_on {
                None => None,
                Some(parent) if visited.contains(parent) => {
                    tracing::debug!(
                        target: "cascade::styles",
                        style = %style.id,
                        parent = %parent,
                        "cycle in based-on chain"
                    );
                    None
                }
                Some(parent) => {
                    let next = styles.get(parent);
                    if next.is_none() {
                        tracing::debug!(
                            target: "cascade::styles",
                            style = %style.id,
                            parent = %parent,
                            "based-on style not found"
                        );
                    }
                    next
                }
            };
        }

        chain.reverse();
        chain
    }

    /// Run properties from a style chain alone, without document defaults
    fn chain_run_properties(&self, id: &StyleId) -> RunProperties {
        merge_all(self.chain(id).into_iter().map(|s| &s.run_props))
    }

    fn compute(&self, id: &StyleId) -> Option<ResolvedStyle> {
        let style = self.styles.get(id)?;
        let chain = self.chain(id);
        let defaults = &self.styles.defaults;

        let paragraph_base = defaults.paragraph_props.clone().unwrap_or_default();
        let run_base = defaults.run_props.clone().unwrap_or_default();

        let paragraph_props = chain
            .iter()
            .fold(paragraph_base, |acc, s| acc.merge(&s.paragraph_props));

        let run_props = match self.linked_paragraph_style(style) {
            Some(linked) => {
                let paragraph_side = self
                    .chain(&linked.id)
                    .iter()
                    .fold(run_base, |acc, s| acc.merge(&s.run_props));
                paragraph_side.merge(&self.chain_run_properties(id))
            }
            None => chain.iter().fold(run_base, |acc, s| acc.merge(&s.run_props)),
        };

        Some(ResolvedStyle {
            style_id: id.clone(),
            paragraph_props,
            run_props,
            table_props: merge_all(chain.iter().map(|s| &s.table_props)),
            row_props: merge_all(chain.iter().map(|s| &s.row_props)),
            cell_props: merge_all(chain.iter().map(|s| &s.cell_props)),
            conditional_props: chain
                .iter()
                .flat_map(|s| s.conditional_props.iter().cloned())
                .collect(),
            inheritance_chain: chain.iter().map(|s| s.id.clone()).collect(),
        })
    }

    /// The paragraph style a character style is linked to, if any
    fn linked_paragraph_style(&self, style: &Style) -> Option<&'a Style> {
        if style.style_type != StyleType::Character {
            return None;
        }
        let linked = self.styles.get(style.link.as_ref()?)?;
        (linked.style_type == StyleType::Paragraph).then_some(linked)
    }
}

// =============================================================================
// Tests
// =============================================================================
