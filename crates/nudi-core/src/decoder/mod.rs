//! Legacy Nudi glyph text to Unicode Kannada.
//!
//! A single left-to-right pass with no backtracking. At each position the
//! tiers are tried in fixed priority order (clusters, full syllables, base
//! consonant plus an optional vowel sign, joiner skip, independent vowels) and
//! the longest key within a tier wins. Anything left unmatched is copied
//! through unchanged, so a partial decode stays readable and the failing
//! glyphs remain visible in the output.

pub mod explain;
mod stats;
mod token;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::table::SymbolTable;

pub use explain::{explain, format_text, ExplainResult, ExplainToken};
pub use stats::DecodeStats;
pub use token::{Token, TokenKind, Tokens};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("input is {len} characters, limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

/// Split `text` into decoder steps.
pub fn tokenize<'s, 't>(text: &'s str, table: &'t SymbolTable) -> Tokens<'s, 't> {
    Tokens::new(text, table)
}

/// Decode legacy-encoded `text` with `table`.
///
/// Never fails: unrecognized characters are passed through as-is.
pub fn transliterate(text: &str, table: &SymbolTable) -> String {
    if text.is_empty() {
        return String::new();
    }
    let _span = debug_span!("transliterate", input_len = text.len()).entered();

    // Kannada is 3 bytes per char in UTF-8 and legacy glyphs are mostly 1-2.
    let mut out = String::with_capacity(text.len() * 2);
    let mut token_count = 0usize;
    for token in tokenize(text, table) {
        token.push_output(&mut out);
        token_count += 1;
    }
    debug!(token_count, output_len = out.len());
    out
}

/// Reject `text` if it is longer than `max_chars` characters.
pub fn check_input_len(text: &str, max_chars: usize) -> Result<(), DecodeError> {
    let len = text.chars().count();
    if len > max_chars {
        return Err(DecodeError::InputTooLong {
            len,
            max: max_chars,
        });
    }
    Ok(())
}

/// Like [`transliterate`], but refuses inputs longer than `max_chars`.
pub fn transliterate_bounded(
    text: &str,
    table: &SymbolTable,
    max_chars: usize,
) -> Result<String, DecodeError> {
    check_input_len(text, max_chars)?;
    Ok(transliterate(text, table))
}

/// Decode and count how many tokens each tier produced.
pub fn transliterate_with_stats(text: &str, table: &SymbolTable) -> (String, DecodeStats) {
    let mut stats = DecodeStats::default();
    let mut out = String::with_capacity(text.len() * 2);
    for token in tokenize(text, table) {
        stats.record(&token);
        token.push_output(&mut out);
    }
    debug!(
        tokens = stats.tokens(),
        passthrough = stats.passthrough,
        "decoded with stats"
    );
    (out, stats)
}

/// Per-tier counts for `text`, without keeping the output.
pub fn decode_stats(text: &str, table: &SymbolTable) -> DecodeStats {
    let mut stats = DecodeStats::default();
    for token in tokenize(text, table) {
        stats.record(&token);
    }
    stats
}
