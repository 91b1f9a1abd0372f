use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generators::{check_bounds, GeneratorError};

pub const MAX_PARAGRAPHS: usize = 20;
pub const MAX_SENTENCES: usize = 20;

const OPENING: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoremOptions {
    pub paragraphs: usize,
    pub sentences_per_paragraph: usize,
    pub start_with_lorem: bool,
}

impl Default for LoremOptions {
    fn default() -> Self {
        Self {
            paragraphs: 3,
            sentences_per_paragraph: 5,
            start_with_lorem: true,
        }
    }
}

fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(6..=14);
    let words: Vec<&str> = (0..len)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect();

    let mut out = words.join(" ");
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    out.push('.');
    out
}

/// Generates placeholder paragraphs. With `start_with_lorem` the first
/// sentence is the classic "Lorem ipsum dolor sit amet" opening.
pub fn generate_lorem<R: Rng + ?Sized>(
    options: &LoremOptions,
    rng: &mut R,
) -> Result<Vec<String>, GeneratorError> {
    check_bounds("paragraphs", options.paragraphs, 1, MAX_PARAGRAPHS)?;
    check_bounds(
        "sentences_per_paragraph",
        options.sentences_per_paragraph,
        1,
        MAX_SENTENCES,
    )?;

    let mut paragraphs = Vec::with_capacity(options.paragraphs);
    for p in 0..options.paragraphs {
        let sentences: Vec<String> = (0..options.sentences_per_paragraph)
            .map(|s| {
                if p == 0 && s == 0 && options.start_with_lorem {
                    OPENING.to_string()
                } else {
                    sentence(rng)
                }
            })
            .collect();
        paragraphs.push(sentences.join(" "));
    }
    Ok(paragraphs)
}
