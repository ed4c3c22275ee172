// Session flow tests driven natively with a seeded RNG and a silent speech backend.

use std::collections::HashMap;

use kana_cards::app::screens;
use kana_cards::config::SessionConfig;
use kana_cards::speech::SilentPronouncer;
use kana_cards::{Character, CharacterSet, Mode, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn counts(cards: &[Character]) -> HashMap<Character, usize> {
    let mut map = HashMap::new();
    for c in cards {
        *map.entry(*c).or_insert(0) += 1;
    }
    map
}

#[test]
fn start_session_permutes_every_set() {
    let mut rng = StdRng::seed_from_u64(42);
    for set in CharacterSet::ALL {
        let mut s = Session::new(SilentPronouncer, SessionConfig::default());
        s.start_session(set, &mut rng);
        assert_eq!(s.mode(), Mode::Studying(set));
        assert_eq!(s.cards().len(), set.cards().len());
        assert_eq!(counts(s.cards()), counts(set.cards()));
        assert_eq!(s.index(), 0);
        assert_eq!(s.score().total, 0);
    }
}

#[test]
fn shuffle_changes_order_for_some_seed() {
    let reordered = (0..8u64).any(|seed| {
        let mut s = Session::new(SilentPronouncer, SessionConfig::default());
        s.start_session(CharacterSet::Hiragana, &mut StdRng::seed_from_u64(seed));
        s.cards() != CharacterSet::Hiragana.cards()
    });
    assert!(reordered);
}

#[test]
fn score_counts_unsuppressed_answers() {
    let mut s = Session::new(SilentPronouncer, SessionConfig::default());
    let mut rng = StdRng::seed_from_u64(11);
    s.start_session(CharacterSet::Katakana, &mut rng);
    let mut accepted = 0;
    for i in 0..20 {
        s.reveal();
        if let Some(pending) = s.record_answer(i % 3 == 0) {
            accepted += 1;
            // second click on the same card is swallowed
            assert!(s.record_answer(true).is_none());
            s.advance(pending);
        }
        assert!(s.score().correct <= s.score().total);
    }
    assert_eq!(s.score().total, accepted);
}

#[test]
fn ten_card_session_reports_seventy_percent() {
    let deck: Vec<Character> = CharacterSet::Kanji.cards()[..10].to_vec();
    let mut s = Session::new(SilentPronouncer, SessionConfig::default());
    let mut rng = StdRng::seed_from_u64(3);
    s.start_with_cards(CharacterSet::Kanji, &deck, &mut rng);
    for i in 0..10 {
        assert_eq!(s.mode(), Mode::Studying(CharacterSet::Kanji));
        assert_eq!(s.position(), (i + 1, 10));
        s.reveal();
        let pending = s.record_answer(i < 7).expect("fresh card accepts an answer");
        assert!(s.advance(pending));
    }
    assert_eq!(s.mode(), Mode::Complete(CharacterSet::Kanji));
    let html = screens::render(&s);
    assert!(html.contains("70%"));
    assert!(html.contains("7 / 10 Correct"));
}

#[test]
fn exit_mid_delay_abandons_advance() {
    let mut s = Session::new(SilentPronouncer, SessionConfig::default());
    let mut rng = StdRng::seed_from_u64(5);
    s.start_session(CharacterSet::Hiragana, &mut rng);
    s.reveal();
    let pending = s.record_answer(true).unwrap();
    s.reset_to_menu();
    assert!(!s.advance(pending));
    assert_eq!(s.mode(), Mode::Unset);
    assert!(screens::render(&s).contains("JAPANESE"));
}

#[test]
fn default_delay_is_800ms() {
    assert_eq!(SessionConfig::default().advance_delay_ms, 800);
}
