//! Label templates such as `%1.` or `%1.%2)`
//!
//! A template is tokenized once into literal text and level placeholders;
//! rendering then fills each placeholder without touching the literal text,
//! so a counter value that happens to contain `%2` is never substituted again.

/// One piece of a label template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelToken {
    /// Text copied verbatim
    Literal(String),
    /// Placeholder for a level's counter (0-based level index)
    Level(u8),
}

/// A parsed label template
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelTemplate {
    tokens: Vec<LabelToken>,
}

impl LabelTemplate {
    /// Tokenize a template; `%1`..`%9` become placeholders, any other `%` is literal
    pub fn parse(text: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            let level = match (c, chars.peek()) {
                ('%', Some(&d @ '1'..='9')) => Some(d as u8 - b'1'),
                _ => None,
            };
            match level {
                Some(level) => {
                    chars.next();
                    if !literal.is_empty() {
                        tokens.push(LabelToken::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(LabelToken::Level(level));
                }
                None => literal.push(c),
            }
        }

        if !literal.is_empty() {
            tokens.push(LabelToken::Literal(literal));
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[LabelToken] {
        &self.tokens
    }

    /// Levels referenced by placeholders, in template order
    pub fn levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            LabelToken::Level(level) => Some(*level),
            LabelToken::Literal(_) => None,
        })
    }

    /// Render, asking `value_of` for the text of each placeholder
    pub fn render<F>(&self, mut value_of: F) -> String
    where
        F: FnMut(u8) -> String,
    {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                LabelToken::Literal(text) => out.push_str(text),
                LabelToken::Level(level) => out.push_str(&value_of(*level)),
            }
        }
        out
    }
}
