use crate::table::{SymbolTable, Tier};

/// What a single decoding step matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'t> {
    Cluster(&'t str),
    FullSyllable(&'t str),
    /// A base consonant, fused with the vowel sign that directly follows it.
    Consonant {
        base: &'t str,
        sign: Option<&'t str>,
    },
    /// The filler glyph; produces no output.
    Joiner,
    IndependentVowel(&'t str),
    /// Unrecognized character, copied through unchanged.
    Passthrough,
}

impl TokenKind<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Cluster(_) => "cluster",
            TokenKind::FullSyllable(_) => "full_syllable",
            TokenKind::Consonant { sign: Some(_), .. } => "consonant+sign",
            TokenKind::Consonant { sign: None, .. } => "consonant",
            TokenKind::Joiner => "joiner",
            TokenKind::IndependentVowel(_) => "independent_vowel",
            TokenKind::Passthrough => "passthrough",
        }
    }
}

/// One step of the decoder: the consumed slice of input and what it became.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'s, 't> {
    /// Byte offset of `source` in the input.
    pub offset: usize,
    pub source: &'s str,
    pub kind: TokenKind<'t>,
}

impl Token<'_, '_> {
    pub fn push_output(&self, out: &mut String) {
        match self.kind {
            TokenKind::Cluster(v) | TokenKind::FullSyllable(v) | TokenKind::IndependentVowel(v) => {
                out.push_str(v)
            }
            TokenKind::Consonant { base, sign } => {
                out.push_str(base);
                if let Some(sign) = sign {
                    out.push_str(sign);
                }
            }
            TokenKind::Joiner => {}
            TokenKind::Passthrough => out.push_str(self.source),
        }
    }

    pub fn output(&self) -> String {
        let mut out = String::new();
        self.push_output(&mut out);
        out
    }
}

/// Greedy longest-match tokenizer over a [`SymbolTable`].
///
/// Every token consumes at least one character, and the cursor only moves
/// forward, so iteration always terminates after at most `input.chars().count()`
/// tokens.
pub struct Tokens<'s, 't> {
    input: &'s str,
    pos: usize,
    table: &'t SymbolTable,
}

impl<'s, 't> Tokens<'s, 't> {
    pub(super) fn new(input: &'s str, table: &'t SymbolTable) -> Self {
        Self {
            input,
            pos: 0,
            table,
        }
    }

    /// Match at the start of `rest`. Returns the byte length consumed.
    fn step(&self, rest: &str, first: char) -> (usize, TokenKind<'t>) {
        let table = self.table;

        if let Some((key, value)) = table.tier(Tier::Clusters).longest_match(rest) {
            return (key.len(), TokenKind::Cluster(value));
        }
        if let Some((key, value)) = table.tier(Tier::FullSyllables).longest_match(rest) {
            return (key.len(), TokenKind::FullSyllable(value));
        }
        if let Some((key, base)) = table.tier(Tier::BaseConsonants).longest_match(rest) {
            // One vowel-sign attempt at the new cursor, without restarting the tiers.
            return match table.tier(Tier::VowelSigns).longest_match(&rest[key.len()..]) {
                Some((sign_key, sign)) => (
                    key.len() + sign_key.len(),
                    TokenKind::Consonant {
                        base,
                        sign: Some(sign),
                    },
                ),
                None => (key.len(), TokenKind::Consonant { base, sign: None }),
            };
        }

        let width = first.len_utf8();
        if first == table.joiner() {
            return (width, TokenKind::Joiner);
        }
        if let Some(value) = table.tier(Tier::IndependentVowels).get(&rest[..width]) {
            return (width, TokenKind::IndependentVowel(value));
        }
        (width, TokenKind::Passthrough)
    }
}

impl<'s, 't> Iterator for Tokens<'s, 't> {
    type Item = Token<'s, 't>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;
        let (len, kind) = self.step(rest, first);

        let offset = self.pos;
        self.pos += len;
        Some(Token {
            offset,
            source: &self.input[offset..self.pos],
            kind,
        })
    }
}
