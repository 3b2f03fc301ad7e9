//! Layered legacy-glyph → Kannada symbol table.
//!
//! A `SymbolTable` holds five tiers, each a map from a legacy-font key to a
//! Unicode Kannada string. Each tier is compiled into a double-array trie when
//! the table is built, so the decoder's per-position lookup is a single
//! common-prefix walk that yields the longest key. A table with every tier
//! empty is valid and passes all input through except the joiner. The
//! embedded default table is parsed lazily into a process-wide
//! singleton, following the same `OnceLock` pattern as the settings module.

mod config;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use lexime_trie::{DoubleArray, TrieSearch};
use serde::Serialize;

pub use config::TableError;
use config::{parse_joiner, parse_table_toml, validate_tier, DEFAULT_JOINER};

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}

/// The five mapping tiers, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Clusters,
    FullSyllables,
    BaseConsonants,
    /// Only consulted right after a `BaseConsonants` match.
    VowelSigns,
    IndependentVowels,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Clusters,
        Tier::FullSyllables,
        Tier::BaseConsonants,
        Tier::VowelSigns,
        Tier::IndependentVowels,
    ];

    /// Section name used in table TOML files.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Clusters => "clusters",
            Tier::FullSyllables => "full_syllables",
            Tier::BaseConsonants => "base_consonants",
            Tier::VowelSigns => "vowel_signs",
            Tier::IndependentVowels => "independent_vowels",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tier's entries, indexed by a byte-wise double-array trie.
#[derive(Debug, Clone)]
pub struct TierMap {
    da: DoubleArray<u8>,
    /// Sorted by key bytes; position is the trie's value id.
    entries: Vec<(String, String)>,
    /// Indices into `entries`, longest key first.
    order: Vec<usize>,
}

impl TierMap {
    fn from_map(map: BTreeMap<String, String>) -> Self {
        // BTreeMap iterates in byte order, which is what DoubleArray::build expects.
        let entries: Vec<(String, String)> = map.into_iter().collect();
        let keys: Vec<&[u8]> = entries.iter().map(|(k, _)| k.as_bytes()).collect();
        let da = DoubleArray::<u8>::build(&keys);

        let mut order: Vec<usize> = (0..entries.len()).collect();
        // Ties are kept in key order so iteration is deterministic.
        order.sort_by(|&a, &b| {
            let (ka, kb) = (&entries[a].0, &entries[b].0);
            kb.chars()
                .count()
                .cmp(&ka.chars().count())
                .then_with(|| ka.cmp(kb))
        });
        Self { da, entries, order }
    }

    fn entry(&self, value_id: u32) -> (&str, &str) {
        let (k, v) = &self.entries[value_id as usize];
        (k.as_str(), v.as_str())
    }

    /// Find the longest key that `input` starts with.
    ///
    /// Returns `(key, value)`; `key.len()` is the number of bytes to consume.
    pub fn longest_match(&self, input: &str) -> Option<(&str, &str)> {
        // Matches come back shortest first. Every key is valid UTF-8, so a
        // hit always ends on a char boundary of `input`.
        self.da
            .common_prefix_search(input.as_bytes())
            .last()
            .map(|m| self.entry(m.value_id))
    }

    /// Exact lookup of a single key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.da
            .exact_match(key.as_bytes())
            .map(|id| self.entry(id).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in lookup-priority order (longest key first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|&i| {
            let (k, v) = &self.entries[i];
            (k.as_str(), v.as_str())
        })
    }
}

/// An immutable, validated five-tier symbol table.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    clusters: TierMap,
    full_syllables: TierMap,
    base_consonants: TierMap,
    vowel_signs: TierMap,
    independent_vowels: TierMap,
    joiner: char,
}

impl SymbolTable {
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::default()
    }

    /// Parse and validate a table from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        let (joiner, tiers) = parse_table_toml(toml_str)?.into_tiers();
        let mut builder = SymbolTableBuilder::default();
        if let Some(raw) = joiner {
            builder.joiner = parse_joiner(&raw)?;
        }
        for (tier, entries) in tiers {
            builder.tiers[tier as usize] = entries;
        }
        builder.build()
    }

    /// Read a table TOML file from disk.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        Self::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global table.
    pub fn global() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TABLE_TOML);
            SymbolTable::from_toml(toml_str).expect("symbol table TOML must be valid")
        })
    }

    pub fn tier(&self, tier: Tier) -> &TierMap {
        match tier {
            Tier::Clusters => &self.clusters,
            Tier::FullSyllables => &self.full_syllables,
            Tier::BaseConsonants => &self.base_consonants,
            Tier::VowelSigns => &self.vowel_signs,
            Tier::IndependentVowels => &self.independent_vowels,
        }
    }

    /// The filler glyph skipped when nothing else matches.
    pub fn joiner(&self) -> char {
        self.joiner
    }

    /// Total number of entries across all tiers.
    pub fn len(&self) -> usize {
        Tier::ALL.iter().map(|&t| self.tier(t).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects entries from in-memory maps; later inserts of the same key win.
#[derive(Debug, Clone)]
pub struct SymbolTableBuilder {
    tiers: [BTreeMap<String, String>; 5],
    joiner: char,
}

impl Default for SymbolTableBuilder {
    fn default() -> Self {
        Self {
            tiers: Default::default(),
            joiner: DEFAULT_JOINER,
        }
    }
}

impl SymbolTableBuilder {
    pub fn entry(mut self, tier: Tier, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tiers[tier as usize].insert(key.into(), value.into());
        self
    }

    pub fn entries<K, V>(mut self, tier: Tier, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.tiers[tier as usize].extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn joiner(mut self, joiner: char) -> Self {
        self.joiner = joiner;
        self
    }

    pub fn build(self) -> Result<SymbolTable, TableError> {
        for tier in Tier::ALL {
            validate_tier(tier, &self.tiers[tier as usize])?;
        }

        let [clusters, full_syllables, base_consonants, vowel_signs, independent_vowels] =
            self.tiers;
        Ok(SymbolTable {
            clusters: TierMap::from_map(clusters),
            full_syllables: TierMap::from_map(full_syllables),
            base_consonants: TierMap::from_map(base_consonants),
            vowel_signs: TierMap::from_map(vowel_signs),
            independent_vowels: TierMap::from_map(independent_vowels),
            joiner: self.joiner,
        })
    }
}
