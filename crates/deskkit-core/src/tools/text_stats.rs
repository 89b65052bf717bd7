use serde::Serialize;

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub average_words_per_sentence: f64,
    pub reading_minutes: usize,
}

impl TextStats {
    pub fn analyze(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();
        let average_words_per_sentence = if sentences > 0 {
            words as f64 / sentences as f64
        } else {
            0.0
        };

        Self {
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            words,
            sentences,
            paragraphs: count_paragraphs(text),
            average_words_per_sentence,
            reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }
}

/// Runs of non-blank lines separated by at least one blank line.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            count += 1;
        }
        in_paragraph = !blank;
    }
    count
}
