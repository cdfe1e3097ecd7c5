//! Reading-time estimation over a post's rich-text content.
//!
//! Words are counted per block after markup is stripped, summed across the
//! whole post, and divided by a fixed reading speed, rounding up. Empty
//! content estimates to zero minutes.

use std::fmt;

use html_escape::decode_html_entities;

use crate::domain::RichTextBlock;

pub const WORDS_PER_MINUTE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ReadingTime {
    pub minutes: u32,
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes)
    }
}

/// Estimate at the default speed of [`WORDS_PER_MINUTE`].
pub fn estimate(content: &[RichTextBlock]) -> ReadingTime {
    estimate_with_speed(content, WORDS_PER_MINUTE)
}

pub fn estimate_with_speed(content: &[RichTextBlock], words_per_minute: u32) -> ReadingTime {
    let words_per_minute = words_per_minute.max(1);
    let total: u64 = content.iter().map(|block| word_count(block) as u64).sum();

    ReadingTime {
        minutes: total.div_ceil(words_per_minute as u64) as u32,
    }
}

/// Number of whitespace-separated words in a block's body.
pub fn word_count(block: &RichTextBlock) -> usize {
    plain_text(block).split_whitespace().count()
}

/// Body of a block as plain text: spans joined by a space, tags removed,
/// entities decoded. The heading is not part of the body.
pub fn plain_text(block: &RichTextBlock) -> String {
    block
        .body
        .iter()
        .map(|span| strip_markup(&span.text))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove `<...>` tags, replacing each with a space so that words on either
/// side of a `<br>` stay separate, then decode HTML entities.
///
/// A `<` only opens a tag when a letter, `/` or `!` follows it and a `>`
/// closes it later on; any other `<` is kept as text.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');

        match after.find('>').filter(|_| opens_tag) {
            Some(close) => {
                out.push(' ');
                rest = &after[close + 1..];
            }
            None => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    decode_html_entities(&out).into_owned()
}
