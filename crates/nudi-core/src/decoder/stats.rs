use serde::Serialize;

use super::token::{Token, TokenKind};

/// Per-tier token counts for one decoded input.
///
/// `passthrough_ratio` is a rough confidence signal: the share of input
/// characters that no tier recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    pub input_chars: usize,
    pub clusters: usize,
    pub full_syllables: usize,
    pub consonants: usize,
    /// Consonant tokens that also picked up a vowel sign.
    pub vowel_signs: usize,
    pub joiners: usize,
    pub independent_vowels: usize,
    /// Characters copied through unchanged (one token each).
    pub passthrough: usize,
}

impl DecodeStats {
    pub(super) fn record(&mut self, token: &Token<'_, '_>) {
        self.input_chars += token.source.chars().count();
        match token.kind {
            TokenKind::Cluster(_) => self.clusters += 1,
            TokenKind::FullSyllable(_) => self.full_syllables += 1,
            TokenKind::Consonant { sign, .. } => {
                self.consonants += 1;
                if sign.is_some() {
                    self.vowel_signs += 1;
                }
            }
            TokenKind::Joiner => self.joiners += 1,
            TokenKind::IndependentVowel(_) => self.independent_vowels += 1,
            TokenKind::Passthrough => self.passthrough += 1,
        }
    }

    /// Total number of tokens produced.
    pub fn tokens(&self) -> usize {
        self.clusters
            + self.full_syllables
            + self.consonants
            + self.joiners
            + self.independent_vowels
            + self.passthrough
    }

    pub fn passthrough_ratio(&self) -> f64 {
        if self.input_chars == 0 {
            return 0.0;
        }
        self.passthrough as f64 / self.input_chars as f64
    }
}
