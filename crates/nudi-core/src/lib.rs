//! Decoder for Kannada text typed in the legacy Nudi glyph encoding.
//!
//! - [`table`]: the layered symbol table and its TOML loader
//! - [`decoder`]: greedy longest-match transliteration to Unicode
//! - [`analyzer`]: n-gram frequencies for growing the table

pub mod analyzer;
pub mod decoder;
pub mod settings;
pub mod table;
pub mod unicode;

pub use analyzer::{analyze_frequencies, FrequencyTable};
pub use decoder::{transliterate, transliterate_bounded, DecodeError};
pub use table::{SymbolTable, TableError, Tier};
