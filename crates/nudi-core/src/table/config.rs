use std::collections::BTreeMap;

use serde::Deserialize;

use super::Tier;

pub(super) const DEFAULT_JOINER: char = 'j';

/// On-disk shape of a symbol table. Missing tiers are empty.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct TableConfig {
    #[serde(default)]
    pub joiner: Option<String>,
    #[serde(default)]
    pub clusters: BTreeMap<String, String>,
    #[serde(default)]
    pub full_syllables: BTreeMap<String, String>,
    #[serde(default)]
    pub base_consonants: BTreeMap<String, String>,
    #[serde(default)]
    pub vowel_signs: BTreeMap<String, String>,
    #[serde(default)]
    pub independent_vowels: BTreeMap<String, String>,
}

impl TableConfig {
    pub fn into_tiers(self) -> (Option<String>, [(Tier, BTreeMap<String, String>); 5]) {
        (
            self.joiner,
            [
                (Tier::Clusters, self.clusters),
                (Tier::FullSyllables, self.full_syllables),
                (Tier::BaseConsonants, self.base_consonants),
                (Tier::VowelSigns, self.vowel_signs),
                (Tier::IndependentVowels, self.independent_vowels),
            ],
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty key in [{tier}]")]
    EmptyKey { tier: Tier },
    #[error("empty value for key {key:?} in [{tier}]")]
    EmptyValue { tier: Tier, key: String },
    #[error("key {key:?} in [{tier}] must be a single character")]
    MultiCharKey { tier: Tier, key: String },
    #[error("joiner must be a single character, got {0:?}")]
    InvalidJoiner(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("symbol table already initialized")]
    AlreadyInitialized,
}

pub(super) fn parse_table_toml(toml_str: &str) -> Result<TableConfig, TableError> {
    toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))
}

pub(super) fn parse_joiner(raw: &str) -> Result<char, TableError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::InvalidJoiner(raw.to_string())),
    }
}

/// Checks one tier's entries against the per-tier rules.
pub(super) fn validate_tier(
    tier: Tier,
    entries: &BTreeMap<String, String>,
) -> Result<(), TableError> {
    for (key, value) in entries {
        if key.is_empty() {
            return Err(TableError::EmptyKey { tier });
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue {
                tier,
                key: key.clone(),
            });
        }
        if tier == Tier::IndependentVowels && key.chars().count() != 1 {
            return Err(TableError::MultiCharKey {
                tier,
                key: key.clone(),
            });
        }
    }
    Ok(())
}
