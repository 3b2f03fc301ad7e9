//! Character-level Unicode classification for Kannada text.

/// Check the full Kannada block (U+0C80..U+0CFF). Includes unassigned
/// codepoints, but the decoder only ever emits assigned ones, so the simpler
/// block-level check is preferred.
pub fn is_kannada(c: char) -> bool {
    ('\u{0C80}'..='\u{0CFF}').contains(&c)
}

/// Independent vowel letters (ಅ..ಔ, plus ೠ and ೡ).
pub fn is_kannada_vowel(c: char) -> bool {
    ('\u{0C85}'..='\u{0C94}').contains(&c) || c == '\u{0CE0}' || c == '\u{0CE1}'
}

/// Consonant letters ಕ..ಹ and ೞ.
pub fn is_kannada_consonant(c: char) -> bool {
    ('\u{0C95}'..='\u{0CB9}').contains(&c) || c == '\u{0CDE}'
}

/// Dependent vowel signs, virama, anusvara and visarga.
pub fn is_kannada_sign(c: char) -> bool {
    ('\u{0C81}'..='\u{0C83}').contains(&c)
        || ('\u{0CBC}'..='\u{0CD6}').contains(&c)
        || c == '\u{0CE2}'
        || c == '\u{0CE3}'
}

/// Share of non-whitespace characters in `s` that are Kannada.
///
/// Returns 0.0 when there is nothing to measure.
pub fn kannada_ratio(s: &str) -> f64 {
    let (mut kannada, mut total) = (0usize, 0usize);
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if is_kannada(c) {
            kannada += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    kannada as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{SymbolTable, Tier};

    #[test]
    fn test_char_classification() {
        assert!(is_kannada('ಕ'));
        assert!(is_kannada('ಾ'));
        assert!(!is_kannada('a'));
        assert!(!is_kannada('क'));
        assert!(is_kannada_vowel('ಅ'));
        assert!(is_kannada_vowel('ಔ'));
        assert!(!is_kannada_vowel('ಕ'));
        assert!(is_kannada_consonant('ಕ'));
        assert!(is_kannada_consonant('ಹ'));
        assert!(!is_kannada_consonant('ಾ'));
        assert!(is_kannada_sign('ಾ'));
        assert!(is_kannada_sign('್'));
        assert!(is_kannada_sign('ಂ'));
        assert!(!is_kannada_sign('ಅ'));
    }

    #[test]
    fn test_kannada_ratio() {
        assert_eq!(kannada_ratio(""), 0.0);
        assert_eq!(kannada_ratio("   "), 0.0);
        assert_eq!(kannada_ratio("ಪ್ರವಾ"), 1.0);
        assert_eq!(kannada_ratio("ಅ b"), 0.5);
    }

    #[test]
    fn test_default_table_values_are_kannada() {
        let table = SymbolTable::global();
        for tier in Tier::ALL {
            for (key, value) in table.tier(tier).iter() {
                assert!(
                    value.chars().all(is_kannada),
                    "[{tier}] {key:?} maps to non-Kannada {value:?}"
                );
            }
        }
        for (_, value) in table.tier(Tier::IndependentVowels).iter() {
            assert!(value.chars().all(is_kannada_vowel));
        }
        for (_, value) in table.tier(Tier::VowelSigns).iter() {
            assert!(value.chars().all(is_kannada_sign));
        }
        for (_, value) in table.tier(Tier::BaseConsonants).iter() {
            assert!(value.chars().all(is_kannada_consonant));
        }
    }
}
