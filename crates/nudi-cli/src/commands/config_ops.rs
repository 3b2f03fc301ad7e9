use std::fs;

use nudi_core::{SymbolTable, Tier};

pub fn table_export() {
    print!("{}", nudi_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(SymbolTable::from_toml(&content), "Error: {}");
    let counts: Vec<String> = Tier::ALL
        .iter()
        .map(|&tier| format!("{}={}", tier, table.tier(tier).len()))
        .collect();
    println!(
        "OK: {} mappings ({}), joiner={:?}",
        table.len(),
        counts.join(", "),
        table.joiner()
    );
}

pub fn settings_export() {
    print!("{}", nudi_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        nudi_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: limits.max_input_chars={}, analyzer.top_n={}",
        s.limits.max_input_chars, s.analyzer.top_n
    );
}
