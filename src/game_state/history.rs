//! Position history and the half-move clock behind the draw rules.

use std::collections::HashMap;

use crate::game_state::chess_rules::{FIFTY_MOVE_LIMIT, REPETITION_LIMIT};

/// Canonical board strings, one per committed ply, plus an occurrence index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardHistory {
    entries: Vec<String>,
    counts: HashMap<String, usize>,
}

impl BoardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, serialized: String) {
        *self.counts.entry(serialized.clone()).or_insert(0) += 1;
        self.entries.push(serialized);
    }

    pub fn occurrences(&self, serialized: &str) -> usize {
        self.counts.get(serialized).copied().unwrap_or(0)
    }

    /// True once any position has been recorded three times.
    pub fn is_threefold_repetition(&self) -> bool {
        self.counts.values().any(|&n| n >= REPETITION_LIMIT)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Plies since the last pawn move or capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfMoveClock(u16);

impl HalfMoveClock {
    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Resets on a pawn move or capture, otherwise ticks.
    pub fn record(&mut self, pawn_move: bool, capture: bool) {
        if pawn_move || capture {
            self.0 = 0;
        } else {
            self.0 = self.0.saturating_add(1);
        }
    }

    #[inline]
    pub fn is_fifty_move_draw(self) -> bool {
        self.0 >= FIFTY_MOVE_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_occurrence_triggers_repetition() {
        let mut history = BoardHistory::new();
        history.push("a".to_owned());
        history.push("b".to_owned());
        history.push("a".to_owned());
        assert!(!history.is_threefold_repetition());
        history.push("c".to_owned());
        history.push("a".to_owned());
        assert!(history.is_threefold_repetition());
        assert_eq!(history.occurrences("a"), 3);
        assert_eq!(history.occurrences("z"), 0);
        assert_eq!(history.len(), 5);
        assert_eq!(history.last(), Some("a"));
    }

    #[test]
    fn clock_resets_on_pawn_move_or_capture() {
        let mut clock = HalfMoveClock::default();
        for _ in 0..49 {
            clock.record(false, false);
        }
        assert!(!clock.is_fifty_move_draw());
        clock.record(false, false);
        assert!(clock.is_fifty_move_draw());

        clock.record(false, true);
        assert_eq!(clock.value(), 0);
        clock.record(false, false);
        clock.record(true, false);
        assert_eq!(clock.value(), 0);
    }
}
