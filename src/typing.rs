use crate::config::TypingTimings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Typing,
    Deleting,
}

/// Position within the phrase cycle. `char_count` never exceeds the current
/// phrase's length in characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingState {
    phrase_index: usize,
    char_count: usize,
    direction: Direction,
}

impl Default for TypingState {
    fn default() -> Self {
        Self {
            phrase_index: 0,
            char_count: 0,
            direction: Direction::Typing,
        }
    }
}

impl TypingState {
    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[cfg(test)]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advances one character and returns the delay before the next tick.
    pub fn tick(&mut self, phrases: &[String], timings: &TypingTimings) -> Option<u32> {
        let phrase = phrases.get(self.phrase_index)?;
        let len = phrase.chars().count();

        match self.direction {
            Direction::Typing => {
                self.char_count = (self.char_count + 1).min(len);
                if self.char_count == len {
                    self.direction = Direction::Deleting;
                    return Some(timings.full_hold_ms);
                }
                Some(timings.typing_interval_ms)
            }
            Direction::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.direction = Direction::Typing;
                    self.phrase_index = (self.phrase_index + 1) % phrases.len();
                    return Some(timings.empty_hold_ms);
                }
                Some(timings.deleting_interval_ms)
            }
        }
    }

    pub fn text<'a>(&self, phrases: &'a [String]) -> &'a str {
        let Some(phrase) = phrases.get(self.phrase_index) else {
            return "";
        };

        match phrase.char_indices().nth(self.char_count) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }
}

/// Phrase cycle plus a stop flag. Once stopped, ticks are refused so a host
/// timer that fires late cannot reschedule.
#[derive(Debug)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    timings: TypingTimings,
    state: TypingState,
    stopped: bool,
}

impl TypingAnimator {
    pub fn new(phrases: Vec<String>, timings: TypingTimings) -> Self {
        Self {
            phrases,
            timings,
            state: TypingState::default(),
            stopped: false,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.stopped || self.phrases.is_empty()
    }

    pub fn advance(&mut self) -> Option<u32> {
        if self.stopped {
            return None;
        }
        self.state.tick(&self.phrases, &self.timings)
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn text(&self) -> &str {
        self.state.text(&self.phrases)
    }

    #[cfg(test)]
    pub fn state(&self) -> &TypingState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn one_phrase_shows_prefixes_up_then_down() {
        let phrases = phrases(&["abc", "de"]);
        let timings = TypingTimings::default();
        let mut state = TypingState::default();

        let mut shown = vec![state.text(&phrases).to_string()];
        while state.phrase_index() == 0 {
            state.tick(&phrases, &timings);
            shown.push(state.text(&phrases).to_string());
        }

        // The last push already belongs to the next phrase, at count zero.
        assert_eq!(shown, vec!["", "a", "ab", "abc", "ab", "a", ""]);
    }

    #[test]
    fn delays_follow_direction_and_boundaries() {
        let phrases = phrases(&["ab"]);
        let timings = TypingTimings::default();
        let mut state = TypingState::default();

        let delays: Vec<_> = (0..5).filter_map(|_| state.tick(&phrases, &timings)).collect();
        assert_eq!(delays, vec![100, 2_000, 50, 500, 100]);
    }

    #[test]
    fn count_stays_within_phrase_bounds_for_many_ticks() {
        let phrases = phrases(&["Full Stack Developer", "UI/UX Designer", "Problem Solver", "Adaptive"]);
        let timings = TypingTimings::default();
        let mut state = TypingState::default();

        for _ in 0..1_000 {
            state.tick(&phrases, &timings);
            let len = phrases[state.phrase_index()].chars().count();
            assert!(state.char_count() <= len);
        }
    }

    #[test]
    fn phrase_index_wraps_cyclically() {
        let phrases = phrases(&["a", "b"]);
        let timings = TypingTimings::default();
        let mut state = TypingState::default();

        let mut visited = Vec::new();
        for _ in 0..8 {
            state.tick(&phrases, &timings);
            if state.char_count() == 0 {
                visited.push(state.phrase_index());
            }
        }
        assert_eq!(visited, vec![1, 0, 1, 0]);
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let phrases = phrases(&["PLSPCart – Shop"]);
        let timings = TypingTimings::default();
        let mut state = TypingState::default();

        for _ in 0..10 {
            state.tick(&phrases, &timings);
        }
        assert_eq!(state.text(&phrases), "PLSPCart –");
    }

    #[test]
    fn empty_catalog_never_schedules() {
        let mut animator = TypingAnimator::new(Vec::new(), TypingTimings::default());
        assert!(animator.is_idle());
        assert_eq!(animator.advance(), None);
        assert_eq!(animator.text(), "");
    }

    #[test]
    fn stopped_animator_refuses_ticks_and_freezes_text() {
        let mut animator = TypingAnimator::new(phrases(&["hello"]), TypingTimings::default());
        animator.advance();
        animator.advance();
        animator.stop();

        assert_eq!(animator.advance(), None);
        assert_eq!(animator.text(), "he");
        assert_eq!(animator.state().direction(), Direction::Typing);
    }
}
