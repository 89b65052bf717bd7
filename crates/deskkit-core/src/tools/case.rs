//! Case conversions for free text.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    ScreamingSnake,
    /// Swap the case of every letter.
    Reverse,
    /// Lowercase at even positions, uppercase at odd ones.
    Alternating,
    Random,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 12] = [
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::Title,
        CaseStyle::Sentence,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::ScreamingSnake,
        CaseStyle::Reverse,
        CaseStyle::Alternating,
        CaseStyle::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::Title => "title",
            CaseStyle::Sentence => "sentence",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::ScreamingSnake => "screaming-snake",
            CaseStyle::Reverse => "reverse",
            CaseStyle::Alternating => "alternating",
            CaseStyle::Random => "random",
        }
    }

    /// Convert with the thread-local rng backing [`CaseStyle::Random`].
    pub fn apply(self, text: &str) -> String {
        self.apply_with(text, &mut rand::thread_rng())
    }

    pub fn apply_with<R: Rng + ?Sized>(self, text: &str, rng: &mut R) -> String {
        match self {
            CaseStyle::Upper => text.to_uppercase(),
            CaseStyle::Lower => text.to_lowercase(),
            CaseStyle::Title => title_case(text),
            CaseStyle::Sentence => sentence_case(text),
            CaseStyle::Camel => joined_words(text, false),
            CaseStyle::Pascal => joined_words(text, true),
            CaseStyle::Snake => collapse_whitespace(&text.to_lowercase(), '_'),
            CaseStyle::Kebab => collapse_whitespace(&text.to_lowercase(), '-'),
            CaseStyle::ScreamingSnake => collapse_whitespace(&text.to_uppercase(), '_'),
            CaseStyle::Reverse => text
                .chars()
                .map(|c| if upper(c) == c { lower(c) } else { upper(c) })
                .collect(),
            CaseStyle::Alternating => text
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { lower(c) } else { upper(c) })
                .collect(),
            CaseStyle::Random => text
                .chars()
                .map(|c| if rng.gen_bool(0.5) { upper(c) } else { lower(c) })
                .collect(),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "case".into(),
                message: format!("unknown style '{s}'"),
            })
    }
}

// Single-char mappings only, so per-char styles keep the char count.
fn upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    let first = it.next()?;
    it.next().is_none().then_some(first)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_token = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_token = false;
            out.push(c);
        } else if in_token {
            out.extend(c.to_lowercase());
        } else if is_word_char(c) {
            in_token = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize = true;
    for c in text.to_lowercase().chars() {
        if capitalize && is_word_char(c) {
            out.extend(c.to_uppercase());
            capitalize = false;
            continue;
        }
        if matches!(c, '.' | '!' | '?') {
            capitalize = true;
        } else if !c.is_whitespace() {
            capitalize = false;
        }
        out.push(c);
    }
    out
}

/// camelCase or PascalCase: words joined, first letter of each word raised,
/// the rest left as typed.
fn joined_words(text: &str, pascal: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 && !pascal {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Replace each whitespace run with `sep`, edges included.
fn collapse_whitespace(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_gap {
                out.push(sep);
                in_gap = true;
            }
        } else {
            out.push(c);
            in_gap = false;
        }
    }
    out
}
