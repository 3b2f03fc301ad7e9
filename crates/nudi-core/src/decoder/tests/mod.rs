
use crate::table::{SymbolTable, Tier};

/// The three-entry table used throughout the decoder docs:
/// `=jÈ` → ಪ್ರ, `Aj` → ವ, `o` → ಾ.
pub(super) fn sample_table() -> SymbolTable {
    SymbolTable::builder()
        .entry(Tier::Clusters, "=jÈ", "ಪ್ರ")
        .entry(Tier::BaseConsonants, "Aj", "ವ")
        .entry(Tier::VowelSigns, "o", "ಾ")
        .build()
        .unwrap()
}
