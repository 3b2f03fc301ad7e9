use serde::Serialize;

use nudi_core::analyzer::{analyze_frequencies, unmapped_frequencies, FrequencyTable};
use nudi_core::settings::settings;
use nudi_core::SymbolTable;

#[derive(Debug, Serialize)]
struct NgramCount<'a> {
    gram: &'a str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport<'a> {
    unmapped_only: bool,
    total_chars: usize,
    chars: Vec<NgramCount<'a>>,
    bigrams: Vec<NgramCount<'a>>,
    trigrams: Vec<NgramCount<'a>>,
}

fn to_counts(top: Vec<(&str, usize)>) -> Vec<NgramCount<'_>> {
    top.into_iter()
        .map(|(gram, count)| NgramCount { gram, count })
        .collect()
}

fn print_section(title: &str, rows: &[NgramCount<'_>]) {
    println!("=== {title} ({}) ===", rows.len());
    for row in rows {
        // Debug formatting keeps spaces and control characters visible.
        println!("  {:>8}  {:?}", row.count, row.gram);
    }
}

pub fn analyze_cmd(input: Option<&str>, n: Option<usize>, unmapped: bool, json: bool) {
    let text = super::read_input(input);
    let n = n.unwrap_or(settings().analyzer.top_n);
    let freq: FrequencyTable = if unmapped {
        unmapped_frequencies(&text, SymbolTable::global())
    } else {
        analyze_frequencies(&text)
    };

    let report = AnalyzeReport {
        unmapped_only: unmapped,
        total_chars: freq.total_chars(),
        chars: to_counts(freq.top_chars(n)),
        bigrams: to_counts(freq.top_bigrams(n)),
        trigrams: to_counts(freq.top_trigrams(n)),
    };

    if json {
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
        return;
    }

    let label = if unmapped { "unmapped chars" } else { "chars" };
    println!("{} {label}", report.total_chars);
    print_section("Characters", &report.chars);
    print_section("Bigrams", &report.bigrams);
    print_section("Trigrams", &report.trigrams);
}
