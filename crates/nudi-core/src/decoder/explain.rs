use serde::Serialize;

use crate::table::SymbolTable;

use super::stats::DecodeStats;
use super::tokenize;

/// Full diagnostic result for a single input.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub tokens: Vec<ExplainToken>,
    pub stats: DecodeStats,
    pub passthrough_ratio: f64,
}

/// One decoder step for diagnostic display.
#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub offset: usize,
    pub source: String,
    pub kind: &'static str,
    pub output: String,
}

pub fn explain(text: &str, table: &SymbolTable) -> ExplainResult {
    let mut stats = DecodeStats::default();
    let mut output = String::new();
    let tokens: Vec<ExplainToken> = tokenize(text, table)
        .map(|token| {
            stats.record(&token);
            token.push_output(&mut output);
            ExplainToken {
                offset: token.offset,
                source: token.source.to_string(),
                kind: token.kind.label(),
                output: token.output(),
            }
        })
        .collect();

    let passthrough_ratio = stats.passthrough_ratio();
    ExplainResult {
        input: text.to_string(),
        output,
        tokens,
        stats,
        passthrough_ratio,
    }
}

fn pad(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Tokens for \"{}\" ({} chars, {} tokens) ===\n",
        result.input,
        result.stats.input_chars,
        result.tokens.len(),
    ));
    for t in &result.tokens {
        let output = if t.output.is_empty() {
            "(dropped)"
        } else {
            t.output.as_str()
        };
        out.push_str(&format!(
            "  @{:<4} {} {} {}\n",
            t.offset,
            pad(&t.source, 10),
            pad(t.kind, 18),
            output,
        ));
    }

    out.push_str(&format!("\n=== Output ===\n  {}\n", result.output));
    let s = &result.stats;
    out.push_str(&format!(
        "\nclusters={} syllables={} consonants={} (+sign {}) joiners={} vowels={} passthrough={} ({:.1}%)\n",
        s.clusters,
        s.full_syllables,
        s.consonants,
        s.vowel_signs,
        s.joiners,
        s.independent_vowels,
        s.passthrough,
        result.passthrough_ratio * 100.0,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Tier;

    fn sample_table() -> SymbolTable {
        SymbolTable::builder()
            .entry(Tier::Clusters, "=jÈ", "ಪ್ರ")
            .entry(Tier::BaseConsonants, "Aj", "ವ")
            .entry(Tier::VowelSigns, "o", "ಾ")
            .build()
            .unwrap()
    }

    #[test]
    fn explain_lists_every_step() {
        let result = explain("=jÈAjoj?", &sample_table());
        assert_eq!(result.output, "ಪ್ರವಾ?");
        let kinds: Vec<&str> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec!["cluster", "consonant+sign", "joiner", "passthrough"]
        );
        let sources: Vec<&str> = result.tokens.iter().map(|t| t.source.as_str()).collect();
        assert_eq!(sources, vec!["=jÈ", "Ajo", "j", "?"]);
        // "È" is two bytes, so the consonant starts at byte 4.
        assert_eq!(result.tokens[1].offset, 4);
        assert_eq!(result.stats.input_chars, 8);
        assert_eq!(result.stats.passthrough, 1);
    }

    #[test]
    fn format_text_mentions_output_and_counts() {
        let text = format_text(&explain("=jÈAjo", &sample_table()));
        assert!(text.contains("ಪ್ರವಾ"));
        assert!(text.contains("consonant+sign"));
        assert!(text.contains("passthrough=0"));
    }

    #[test]
    fn format_text_marks_dropped_joiner() {
        let text = format_text(&explain("j", &sample_table()));
        assert!(text.contains("(dropped)"));
    }
}
