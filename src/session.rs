//! Study session state machine.
//!
//! `Unset -> Studying(set) -> Complete(set) -> Unset` (reset) or
//! `Complete(set) -> Studying(set)` (retry, reshuffled). Within a study mode each
//! card moves `hidden -> revealed -> answered -> hidden (next card)`.
//!
//! Answering does not advance immediately: [`Session::record_answer`] hands out
//! a [`PendingAdvance`] that the view layer redeems after the configured delay.
//! Tokens are tied to a generation counter so a timer that fires after the
//! session was reset or restarted is ignored.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::characters::{Character, CharacterSet};
use crate::config::SessionConfig;
use crate::speech::Pronouncer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Unset,
    Studying(CharacterSet),
    Complete(CharacterSet),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Running tally; `total >= correct` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    /// Rounded share of correct answers, 0 when nothing was answered.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.correct) / f64::from(self.total) * 100.0).round() as u32
    }
}

/// Ticket for the delayed move to the next card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct PendingAdvance {
    generation: u64,
}

pub struct Session<P: Pronouncer> {
    pronouncer: P,
    config: SessionConfig,
    mode: Mode,
    cards: Vec<Character>,
    index: usize,
    score: Score,
    revealed: bool,
    feedback: Option<Feedback>,
    writing: bool,
    generation: u64,
}

impl<P: Pronouncer> Session<P> {
    pub fn new(pronouncer: P, config: SessionConfig) -> Self {
        Self {
            pronouncer,
            config,
            mode: Mode::Unset,
            cards: Vec::new(),
            index: 0,
            score: Score::default(),
            revealed: false,
            feedback: None,
            writing: false,
            generation: 0,
        }
    }

    /// Start a fresh pass over the static deck for `set`.
    pub fn start_session<R: Rng + ?Sized>(&mut self, set: CharacterSet, rng: &mut R) {
        self.start_with_cards(set, set.cards(), rng);
    }

    /// Start a pass over an explicit deck. An empty deck completes immediately.
    pub fn start_with_cards<R: Rng + ?Sized>(
        &mut self,
        set: CharacterSet,
        cards: &[Character],
        rng: &mut R,
    ) {
        let mut deck = cards.to_vec();
        deck.shuffle(rng);
        self.clear_progress();
        self.cards = deck;
        self.mode = if self.cards.is_empty() {
            Mode::Complete(set)
        } else {
            Mode::Studying(set)
        };
        log::info!("started {} session with {} cards", set, self.cards.len());
    }

    /// Restart the set of a completed (or running) session with a new shuffle.
    pub fn retry<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.mode {
            Mode::Studying(set) | Mode::Complete(set) => self.start_session(set, rng),
            Mode::Unset => {}
        }
    }

    /// Flip the current card. Only the first call has any effect.
    pub fn reveal(&mut self) {
        if self.revealed || !matches!(self.mode, Mode::Studying(_)) {
            return;
        }
        self.revealed = true;
        self.play_audio();
    }

    /// Speak the current glyph, if there is one.
    pub fn play_audio(&self) {
        if let Some(card) = self.current() {
            self.pronouncer.pronounce(card.glyph);
        }
    }

    /// Score the current card. Returns `None` when the card was already answered
    /// or no card is being studied.
    pub fn record_answer(&mut self, is_correct: bool) -> Option<PendingAdvance> {
        if self.feedback.is_some() || !matches!(self.mode, Mode::Studying(_)) {
            return None;
        }
        self.feedback = Some(if is_correct { Feedback::Correct } else { Feedback::Incorrect });
        self.score.record(is_correct);
        Some(PendingAdvance { generation: self.generation })
    }

    /// Redeem a pending advance. Stale tokens are ignored and return `false`.
    pub fn advance(&mut self, pending: PendingAdvance) -> bool {
        if pending.generation != self.generation {
            log::debug!("dropping stale advance (generation {})", pending.generation);
            return false;
        }
        let Mode::Studying(set) = self.mode else {
            return false;
        };
        self.generation += 1;
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.revealed = false;
            self.feedback = None;
        } else {
            self.mode = Mode::Complete(set);
            log::info!(
                "{} session complete: {}/{} ({}%)",
                set,
                self.score.correct,
                self.score.total,
                self.score.percentage()
            );
        }
        true
    }

    pub fn reset_to_menu(&mut self) {
        self.clear_progress();
        self.cards.clear();
        self.mode = Mode::Unset;
    }

    pub fn toggle_writing(&mut self) {
        self.writing = !self.writing;
    }

    pub fn close_writing(&mut self) {
        self.writing = false;
    }

    fn clear_progress(&mut self) {
        self.index = 0;
        self.score = Score::default();
        self.revealed = false;
        self.feedback = None;
        self.writing = false;
        self.generation += 1;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Character] {
        &self.cards
    }

    pub fn current(&self) -> Option<&Character> {
        self.cards.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based position and deck length, as shown in the header.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.cards.len())
    }

    pub fn progress_percent(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.cards.len() as f64 * 100.0
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn is_writing(&self) -> bool {
        self.writing
    }

    /// Answer buttons are live only between reveal and answer.
    pub fn can_answer(&self) -> bool {
        self.revealed && self.feedback.is_none()
    }

    pub fn pronouncer(&self) -> &P {
        &self.pronouncer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Pronouncer for Recorder {
        fn pronounce(&self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    fn session() -> Session<Recorder> {
        Session::new(Recorder::default(), SessionConfig::default())
    }

    const TINY: &[Character] = &[
        Character { glyph: "あ", romaji: "a", meaning: None },
        Character { glyph: "い", romaji: "i", meaning: None },
    ];

    #[test]
    fn test_reveal_is_idempotent_and_speaks_once() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(7);
        s.start_session(CharacterSet::Hiragana, &mut rng);
        s.reveal();
        s.reveal();
        assert!(s.is_revealed());
        let spoken = s.pronouncer().0.borrow();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0], s.current().unwrap().glyph);
    }

    #[test]
    fn test_reveal_outside_session_is_ignored() {
        let mut s = session();
        s.reveal();
        assert!(!s.is_revealed());
        assert!(s.pronouncer().0.borrow().is_empty());
    }

    #[test]
    fn test_double_submission_is_suppressed() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        s.start_with_cards(CharacterSet::Hiragana, TINY, &mut rng);
        s.reveal();
        let first = s.record_answer(true);
        assert!(first.is_some());
        assert!(s.record_answer(false).is_none());
        assert_eq!(s.score(), Score { correct: 1, total: 1 });
        assert_eq!(s.feedback(), Some(Feedback::Correct));
        assert!(!s.can_answer());
    }

    #[test]
    fn test_advance_moves_to_next_card_and_clears_flags() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(2);
        s.start_with_cards(CharacterSet::Hiragana, TINY, &mut rng);
        s.reveal();
        let pending = s.record_answer(false).unwrap();
        assert!(s.advance(pending));
        assert_eq!(s.index(), 1);
        assert!(!s.is_revealed());
        assert_eq!(s.feedback(), None);
        assert_eq!(s.mode(), Mode::Studying(CharacterSet::Hiragana));
    }

    #[test]
    fn test_token_redeems_only_once() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(3);
        s.start_with_cards(CharacterSet::Hiragana, TINY, &mut rng);
        let pending = s.record_answer(true).unwrap();
        assert!(s.advance(pending));
        assert!(!s.advance(pending));
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn test_pending_advance_abandoned_after_reset() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(4);
        s.start_with_cards(CharacterSet::Hiragana, TINY, &mut rng);
        let pending = s.record_answer(true).unwrap();
        s.reset_to_menu();
        assert!(!s.advance(pending));
        assert_eq!(s.mode(), Mode::Unset);

        s.start_with_cards(CharacterSet::Katakana, TINY, &mut rng);
        assert!(!s.advance(pending));
        assert_eq!(s.index(), 0);
        assert_eq!(s.score(), Score::default());
    }

    #[test]
    fn test_last_card_completes_session() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(5);
        s.start_with_cards(CharacterSet::Kanji, TINY, &mut rng);
        for correct in [true, false] {
            s.reveal();
            let pending = s.record_answer(correct).unwrap();
            s.advance(pending);
        }
        assert_eq!(s.mode(), Mode::Complete(CharacterSet::Kanji));
        assert_eq!(s.score().percentage(), 50);
        assert!(s.record_answer(true).is_none());
    }

    #[test]
    fn test_empty_deck_completes_immediately() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(6);
        s.start_with_cards(CharacterSet::Hiragana, &[], &mut rng);
        assert_eq!(s.mode(), Mode::Complete(CharacterSet::Hiragana));
        assert!(s.current().is_none());
        assert_eq!(s.score().percentage(), 0);
        assert_eq!(s.progress_percent(), 0.0);
        s.play_audio();
        assert!(s.pronouncer().0.borrow().is_empty());
    }

    #[test]
    fn test_retry_reuses_completed_set() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(8);
        s.start_with_cards(CharacterSet::Katakana, &TINY[..1], &mut rng);
        let pending = s.record_answer(true).unwrap();
        s.advance(pending);
        assert_eq!(s.mode(), Mode::Complete(CharacterSet::Katakana));
        s.retry(&mut rng);
        assert_eq!(s.mode(), Mode::Studying(CharacterSet::Katakana));
        assert_eq!(s.cards().len(), CharacterSet::Katakana.cards().len());
        assert_eq!(s.score(), Score::default());
    }

    #[test]
    fn test_toggle_writing_leaves_progress_alone() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(9);
        s.start_with_cards(CharacterSet::Hiragana, TINY, &mut rng);
        let _ = s.record_answer(true);
        s.toggle_writing();
        assert!(s.is_writing());
        assert_eq!(s.score().total, 1);
        assert_eq!(s.index(), 0);
        s.toggle_writing();
        assert!(!s.is_writing());
        s.toggle_writing();
        s.close_writing();
        assert!(!s.is_writing());
    }

    #[test]
    fn test_score_percentage_rounds() {
        let score = Score { correct: 2, total: 3 };
        assert_eq!(score.percentage(), 67);
        assert_eq!(Score { correct: 7, total: 10 }.percentage(), 70);
    }
}
