use nudi_core::decoder::{
    check_input_len, explain, format_text, transliterate, transliterate_with_stats,
};
use nudi_core::settings::settings;
use nudi_core::unicode::kannada_ratio;
use nudi_core::SymbolTable;

pub fn convert_cmd(input: Option<&str>, show_stats: bool) {
    let table = SymbolTable::global();
    let text = super::read_input(input);
    die!(
        check_input_len(&text, settings().limits.max_input_chars),
        "Error: {}"
    );

    if !show_stats {
        print!("{}", transliterate(&text, table));
        return;
    }

    let (output, s) = transliterate_with_stats(&text, table);
    print!("{output}");
    eprintln!(
        "tokens={} clusters={} syllables={} consonants={} (+sign {}) joiners={} vowels={} passthrough={}",
        s.tokens(),
        s.clusters,
        s.full_syllables,
        s.consonants,
        s.vowel_signs,
        s.joiners,
        s.independent_vowels,
        s.passthrough,
    );
    eprintln!(
        "passthrough_ratio={:.3} kannada_ratio={:.3}",
        s.passthrough_ratio(),
        kannada_ratio(&output)
    );
}

pub fn explain_cmd(text: &str, json: bool) {
    let result = explain(text, SymbolTable::global());
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_text(&result));
    }
}
