// Integration tests for character dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use kana_cards::{CharacterSet, HIRAGANA, KANJI, KATAKANA};

#[test]
fn glyphs_are_unique_per_set() {
    for set in CharacterSet::ALL {
        let mut seen = HashSet::new();
        for c in set.cards() {
            assert!(seen.insert(c.glyph), "duplicate glyph '{}' in {}", c.glyph, set);
        }
    }
}

#[test]
fn romaji_is_lowercase_ascii() {
    for set in CharacterSet::ALL {
        for c in set.cards() {
            assert!(!c.romaji.is_empty(), "empty romaji for '{}'", c.glyph);
            for ch in c.romaji.chars() {
                assert!(ch.is_ascii_lowercase(), "invalid char '{}' in romaji '{}' for '{}'", ch, c.romaji, c.glyph);
            }
        }
    }
}

#[test]
fn only_kanji_carry_meanings() {
    for c in HIRAGANA.iter().chain(KATAKANA) {
        assert!(c.meaning.is_none(), "kana '{}' should not have a meaning", c.glyph);
    }
    for c in KANJI {
        assert!(c.meaning.is_some_and(|m| !m.is_empty()), "kanji '{}' lacks a meaning", c.glyph);
    }
}

#[test]
fn glyphs_are_single_characters() {
    for set in CharacterSet::ALL {
        for c in set.cards() {
            assert_eq!(c.glyph.chars().count(), 1, "glyph '{}' in {} is not one character", c.glyph, set);
        }
    }
}

#[test]
fn sample_glyphs_belong_to_their_sets() {
    assert!(HIRAGANA.iter().any(|c| c.glyph == CharacterSet::Hiragana.sample_glyph()));
    assert!(KATAKANA.iter().any(|c| c.glyph == CharacterSet::Katakana.sample_glyph()));
}
