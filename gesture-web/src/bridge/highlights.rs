//! Gesture card highlight timing
//!
//! A confirmation lights its card for `highlight_duration_ms`; any pose
//! change clears every card.

use crate::gesture::{GestureEvent, GestureLabel};

#[derive(Clone, Debug, Default)]
pub struct HighlightBoard {
    /// Expiry time per countable gesture (tally order)
    until_ms: [Option<f64>; 4],
}

impl HighlightBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, events: &[GestureEvent], now_ms: f64, duration_ms: f64) {
        for event in events {
            match event {
                GestureEvent::Highlight { gesture } => {
                    if let Some(idx) = gesture.tally_index() {
                        self.until_ms[idx] = Some(now_ms + duration_ms);
                    }
                }
                GestureEvent::ClearHighlights { .. } => self.clear(),
                GestureEvent::Confirmed { .. } | GestureEvent::Rejected { .. } => {}
            }
        }
    }

    /// Gestures whose highlight has not expired at `now_ms`
    pub fn active(&self, now_ms: f64) -> Vec<GestureLabel> {
        GestureLabel::COUNTED
            .iter()
            .zip(self.until_ms.iter())
            .filter(|(_, until)| matches!(until, Some(t) if now_ms < *t))
            .map(|(label, _)| *label)
            .collect()
    }

    pub fn clear(&mut self) {
        self.until_ms = [None; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_expires() {
        let mut board = HighlightBoard::new();
        board.apply(&[GestureEvent::Highlight { gesture: GestureLabel::Peace }], 1000.0, 1000.0);
        assert_eq!(board.active(1500.0), vec![GestureLabel::Peace]);
        assert!(board.active(2000.0).is_empty());
    }

    #[test]
    fn test_change_clears_all() {
        let mut board = HighlightBoard::new();
        board.apply(
            &[
                GestureEvent::Highlight { gesture: GestureLabel::Fist },
                GestureEvent::Highlight { gesture: GestureLabel::OpenHand },
            ],
            0.0,
            1000.0,
        );
        assert_eq!(board.active(10.0).len(), 2);

        board.apply(&[GestureEvent::ClearHighlights { hand: 0 }], 20.0, 1000.0);
        assert!(board.active(30.0).is_empty());
    }

    #[test]
    fn test_rejection_keeps_highlights() {
        let mut board = HighlightBoard::new();
        board.apply(&[GestureEvent::Highlight { gesture: GestureLabel::Peace }], 0.0, 1000.0);
        board.apply(&[GestureEvent::Rejected { hand: 0, error: "off frame".to_string() }], 10.0, 1000.0);
        assert_eq!(board.active(20.0), vec![GestureLabel::Peace]);
    }

    #[test]
    fn test_none_highlight_ignored() {
        let mut board = HighlightBoard::new();
        board.apply(&[GestureEvent::Highlight { gesture: GestureLabel::None }], 0.0, 1000.0);
        assert!(board.active(0.0).is_empty());
    }
}
