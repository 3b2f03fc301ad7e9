//! Character n-gram frequencies over raw legacy text.
//!
//! Used offline while growing the symbol table: sequences that recur often in
//! real documents are candidates for new cluster entries. Counting is over
//! Unicode scalar values (`char`), so a character is never split in half; a
//! UTF-16 based counter would report surrogate halves separately for text
//! outside the BMP.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::decoder::{tokenize, TokenKind};
use crate::table::SymbolTable;

/// Unigram, bigram and trigram counts for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub char_freq: BTreeMap<String, usize>,
    pub bigram_freq: BTreeMap<String, usize>,
    pub trigram_freq: BTreeMap<String, usize>,
}

impl FrequencyTable {
    /// Count the n-grams of one run of text into `self`.
    ///
    /// Windows never cross from one call to the next.
    fn add_run(&mut self, chars: &[char]) {
        count_windows(&mut self.char_freq, chars, 1);
        count_windows(&mut self.bigram_freq, chars, 2);
        count_windows(&mut self.trigram_freq, chars, 3);
    }

    /// Number of characters counted.
    pub fn total_chars(&self) -> usize {
        self.char_freq.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.char_freq.is_empty()
    }

    pub fn top_chars(&self, n: usize) -> Vec<(&str, usize)> {
        top_n(&self.char_freq, n)
    }

    pub fn top_bigrams(&self, n: usize) -> Vec<(&str, usize)> {
        top_n(&self.bigram_freq, n)
    }

    pub fn top_trigrams(&self, n: usize) -> Vec<(&str, usize)> {
        top_n(&self.trigram_freq, n)
    }
}

fn count_windows(freq: &mut BTreeMap<String, usize>, chars: &[char], size: usize) {
    for window in chars.windows(size) {
        let gram: String = window.iter().collect();
        *freq.entry(gram).or_insert(0) += 1;
    }
}

/// The `n` most frequent entries, highest count first, ties in key order.
pub fn top_n(freq: &BTreeMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = freq.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    // Stable sort keeps BTreeMap key order among equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// Count every character, overlapping bigram and overlapping trigram in `text`.
pub fn analyze_frequencies(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    if text.is_empty() {
        return table;
    }
    let _span = debug_span!("analyze_frequencies", input_len = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    table.add_run(&chars);
    debug!(
        chars = table.char_freq.len(),
        bigrams = table.bigram_freq.len(),
        trigrams = table.trigram_freq.len()
    );
    table
}

/// Frequencies of the text the decoder could not map.
///
/// Consecutive passthrough characters form one run; any mapped token (or a
/// dropped joiner) ends the run, so no n-gram spans a decoded glyph.
pub fn unmapped_frequencies(text: &str, symbols: &SymbolTable) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    if text.is_empty() {
        return table;
    }
    let _span = debug_span!("unmapped_frequencies", input_len = text.len()).entered();

    let mut run: Vec<char> = Vec::new();
    let mut runs = 0usize;
    for token in tokenize(text, symbols) {
        if token.kind == TokenKind::Passthrough {
            run.extend(token.source.chars());
        } else if !run.is_empty() {
            table.add_run(&run);
            run.clear();
            runs += 1;
        }
    }
    if !run.is_empty() {
        table.add_run(&run);
        runs += 1;
    }
    debug!(runs, unmapped_chars = table.total_chars());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Tier;

    fn freq(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_aab() {
        let t = analyze_frequencies("aab");
        assert_eq!(t.char_freq, freq(&[("a", 2), ("b", 1)]));
        assert_eq!(t.bigram_freq, freq(&[("aa", 1), ("ab", 1)]));
        assert_eq!(t.trigram_freq, freq(&[("aab", 1)]));
    }

    #[test]
    fn test_single_char() {
        let t = analyze_frequencies("a");
        assert_eq!(t.char_freq, freq(&[("a", 1)]));
        assert!(t.bigram_freq.is_empty());
        assert!(t.trigram_freq.is_empty());
    }

    #[test]
    fn test_two_chars() {
        let t = analyze_frequencies("ab");
        assert_eq!(t.bigram_freq, freq(&[("ab", 1)]));
        assert!(t.trigram_freq.is_empty());
    }

    #[test]
    fn test_empty() {
        let t = analyze_frequencies("");
        assert!(t.is_empty());
        assert!(t.bigram_freq.is_empty());
        assert!(t.trigram_freq.is_empty());
        assert_eq!(t, FrequencyTable::default());
    }

    #[test]
    fn test_overlapping_windows() {
        let t = analyze_frequencies("aaaa");
        assert_eq!(t.char_freq, freq(&[("a", 4)]));
        assert_eq!(t.bigram_freq, freq(&[("aa", 3)]));
        assert_eq!(t.trigram_freq, freq(&[("aaa", 2)]));
    }

    #[test]
    fn test_no_normalization() {
        let t = analyze_frequencies("aA a");
        assert_eq!(t.char_freq, freq(&[(" ", 1), ("A", 1), ("a", 2)]));
    }

    #[test]
    fn test_non_ascii_chars_are_whole() {
        // "È" is two UTF-8 bytes, "𝒜" is outside the BMP.
        let t = analyze_frequencies("=jÈ𝒜");
        assert_eq!(t.total_chars(), 4);
        assert_eq!(t.char_freq["È"], 1);
        assert_eq!(t.char_freq["𝒜"], 1);
        assert_eq!(t.trigram_freq, freq(&[("=jÈ", 1), ("jÈ𝒜", 1)]));
    }

    #[test]
    fn test_deterministic() {
        let s = "=jÈAjo =jÈAjo¢ EzjÄ";
        assert_eq!(analyze_frequencies(s), analyze_frequencies(s));
    }

    #[test]
    fn test_window_counts_match_length() {
        let s = "ªjvjÛÄ C®éoºjï";
        let n = s.chars().count();
        let t = analyze_frequencies(s);
        assert_eq!(t.total_chars(), n);
        assert_eq!(t.bigram_freq.values().sum::<usize>(), n - 1);
        assert_eq!(t.trigram_freq.values().sum::<usize>(), n - 2);
    }

    #[test]
    fn test_top_n_orders_by_count_then_key() {
        let t = analyze_frequencies("abcabca");
        assert_eq!(t.top_chars(2), vec![("a", 3), ("b", 2)]);
        assert_eq!(t.top_chars(10).len(), 3);
        assert_eq!(t.top_bigrams(1), vec![("ab", 2)]);
        // "abc" and "bca" both occur twice; ties stay in key order.
        assert_eq!(t.top_trigrams(2), vec![("abc", 2), ("bca", 2)]);
        assert!(t.top_trigrams(0).is_empty());
    }

    #[test]
    fn test_unmapped_only_counts_passthrough() {
        let symbols = SymbolTable::builder()
            .entry(Tier::Clusters, "=jÈ", "ಪ್ರ")
            .entry(Tier::BaseConsonants, "Aj", "ವ")
            .entry(Tier::VowelSigns, "o", "ಾ")
            .build()
            .unwrap();
        let t = unmapped_frequencies("=jÈXYAjoZ", &symbols);
        assert_eq!(t.char_freq, freq(&[("X", 1), ("Y", 1), ("Z", 1)]));
        // "YZ" is not a bigram: the consonant sits between them.
        assert_eq!(t.bigram_freq, freq(&[("XY", 1)]));
        assert!(t.trigram_freq.is_empty());
    }

    #[test]
    fn test_unmapped_joiner_breaks_runs() {
        let symbols = SymbolTable::builder()
            .entry(Tier::BaseConsonants, "Aj", "ವ")
            .build()
            .unwrap();
        let t = unmapped_frequencies("XjY", &symbols);
        assert_eq!(t.char_freq.len(), 2);
        assert!(t.bigram_freq.is_empty());
    }

    #[test]
    fn test_unmapped_empty_and_fully_mapped() {
        let symbols = SymbolTable::global();
        assert!(unmapped_frequencies("", symbols).is_empty());
        assert!(unmapped_frequencies("=jÈAjo¢", symbols).is_empty());
    }
}
