//! Character-by-character text reveal for the typewriter panel.

use crate::constants::*;
use rand::prelude::*;
use std::time::Duration;

pub const TYPEWRITER_TEXT: &str = "Pryv AI LLM - The Future of AI Interaction\n\nAccess to our advanced language model will require $PRYV tokens:\n\n- Standard Queries: 0.5 $PRYV\n- Advanced Analysis: 10 $PRYV\n\nUnlock the power of truly autonomous AI with Pryv AI LLM.\nLaunch date to be announced.";

/// What one tick revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealStep {
    pub appended: String,
    /// Number of typewriter cues to play this frame.
    pub cues: usize,
    pub finished: bool,
}

pub struct TypewriterReveal {
    chars: Vec<char>,
    shown: usize,
    next_at: Duration,
    rng: StdRng,
}

impl TypewriterReveal {
    pub fn new(text: &str, now: Duration, seed: u64) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            next_at: now + Duration::from_millis(TYPEWRITER_START_DELAY_MS),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Reveals every character whose deadline has passed. Each revealed
    /// character schedules the next one a random 20-65 ms later.
    pub fn tick(&mut self, now: Duration) -> RevealStep {
        let mut step = RevealStep::default();
        while !self.is_finished() && now >= self.next_at {
            step.appended.push(self.chars[self.shown]);
            self.shown += 1;
            if self.shown % TYPEWRITER_CUE_EVERY == 0 {
                step.cues += 1;
            }
            let delay = self
                .rng
                .gen_range(TYPEWRITER_MIN_CHAR_DELAY_MS..TYPEWRITER_MAX_CHAR_DELAY_MS);
            self.next_at += Duration::from_millis(delay);
        }
        step.finished = self.is_finished();
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_before_start_delay() {
        let mut r = TypewriterReveal::new("abc", Duration::ZERO, 1);
        assert!(r.tick(Duration::from_millis(499)).appended.is_empty());
        let step = r.tick(Duration::from_millis(500));
        assert_eq!(step.appended, "a");
        assert_eq!(step.cues, 0);
    }

    #[test]
    fn every_third_char_cues() {
        let mut r = TypewriterReveal::new("abcdefg", Duration::ZERO, 7);
        let step = r.tick(Duration::from_secs(10));
        assert_eq!(step.appended, "abcdefg");
        assert_eq!(step.cues, 2);
        assert!(step.finished);
    }

    #[test]
    fn char_delays_stay_in_range() {
        let mut r = TypewriterReveal::new(TYPEWRITER_TEXT, Duration::ZERO, 42);
        r.tick(Duration::from_millis(500));
        assert_eq!(r.shown(), 1);
        // next char lands within [520, 565) ms
        assert!(r.tick(Duration::from_millis(519)).appended.is_empty());
        assert!(!r.tick(Duration::from_millis(565)).appended.is_empty());
    }
}
