//! Hold-to-confirm debounce for per-frame labels
//!
//! A label must be seen on every frame for `threshold_ms` before it counts.
//! After a confirmation the timer restarts, so a sustained pose confirms
//! again every `threshold_ms`.

use super::label::GestureLabel;

/// Default hold time before a gesture counts
pub const DEFAULT_THRESHOLD_MS: f64 = 1000.0;

/// What a single observation did to the tracker
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerStep {
    /// Label differs from the previous frame; timer restarted
    Changed { from: GestureLabel, to: GestureLabel },
    /// Same label, still waiting (or `None`)
    Holding,
    /// Same label held for the full threshold
    Confirmed(GestureLabel),
}

/// Confirmation state for one hand
#[derive(Clone, Debug)]
pub struct ConfirmationTracker {
    threshold_ms: f64,
    current: GestureLabel,
    since_ms: f64,
}

impl ConfirmationTracker {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            current: GestureLabel::None,
            since_ms: 0.0,
        }
    }

    /// Advance with one frame's label, in frame order
    pub fn observe(&mut self, label: GestureLabel, now_ms: f64) -> TrackerStep {
        if label != self.current {
            let from = self.current;
            self.current = label;
            self.since_ms = now_ms;
            return TrackerStep::Changed { from, to: label };
        }

        if label.is_none() {
            return TrackerStep::Holding;
        }

        if now_ms - self.since_ms >= self.threshold_ms {
            self.since_ms = now_ms;
            return TrackerStep::Confirmed(label);
        }

        TrackerStep::Holding
    }

    pub fn current(&self) -> GestureLabel {
        self.current
    }

    pub fn since_ms(&self) -> f64 {
        self.since_ms
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Takes effect for the hold currently in progress
    pub fn set_threshold(&mut self, threshold_ms: f64) {
        self.threshold_ms = threshold_ms;
    }
}

impl Default for ConfirmationTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_confirmations(tracker: &mut ConfirmationTracker, label: GestureLabel, times: &[f64]) -> usize {
        times
            .iter()
            .filter(|&&t| matches!(tracker.observe(label, t), TrackerStep::Confirmed(_)))
            .count()
    }

    #[test]
    fn test_initial_state() {
        let tracker = ConfirmationTracker::default();
        assert_eq!(tracker.current(), GestureLabel::None);
        assert_eq!(tracker.since_ms(), 0.0);
        assert_eq!(tracker.threshold_ms(), 1000.0);
    }

    #[test]
    fn test_one_confirmation_after_threshold() {
        let mut tracker = ConfirmationTracker::default();
        // 30Hz-ish frames from 0 to 1000ms, then one more
        let mut times: Vec<f64> = (0..=10).map(|i| i as f64 * 100.0).collect();
        times.push(1033.0);
        assert_eq!(count_confirmations(&mut tracker, GestureLabel::Fist, &times), 1);
    }

    #[test]
    fn test_two_confirmations_after_double_threshold() {
        let mut tracker = ConfirmationTracker::default();
        let times: Vec<f64> = (0..=20).map(|i| i as f64 * 100.0).collect();
        assert_eq!(count_confirmations(&mut tracker, GestureLabel::Peace, &times), 2);
    }

    #[test]
    fn test_confirm_rearms_at_confirmation_time() {
        let mut tracker = ConfirmationTracker::default();
        tracker.observe(GestureLabel::OpenHand, 0.0);
        assert_eq!(tracker.observe(GestureLabel::OpenHand, 1200.0), TrackerStep::Confirmed(GestureLabel::OpenHand));
        assert_eq!(tracker.since_ms(), 1200.0);
        assert_eq!(tracker.observe(GestureLabel::OpenHand, 2100.0), TrackerStep::Holding);
        assert_eq!(tracker.observe(GestureLabel::OpenHand, 2200.0), TrackerStep::Confirmed(GestureLabel::OpenHand));
    }

    #[test]
    fn test_label_change_resets_timer() {
        let mut tracker = ConfirmationTracker::default();
        let a: Vec<f64> = (0..=9).map(|i| i as f64 * 100.0).collect();
        assert_eq!(count_confirmations(&mut tracker, GestureLabel::ThumbsUp, &a), 0);

        assert_eq!(
            tracker.observe(GestureLabel::Fist, 1000.0),
            TrackerStep::Changed { from: GestureLabel::ThumbsUp, to: GestureLabel::Fist }
        );
        assert_eq!(tracker.since_ms(), 1000.0);
        assert_eq!(tracker.observe(GestureLabel::Fist, 1999.0), TrackerStep::Holding);
        assert_eq!(tracker.observe(GestureLabel::Fist, 2000.0), TrackerStep::Confirmed(GestureLabel::Fist));
    }

    #[test]
    fn test_none_never_confirms() {
        let mut tracker = ConfirmationTracker::default();
        let times: Vec<f64> = (0..=50).map(|i| i as f64 * 100.0).collect();
        assert_eq!(count_confirmations(&mut tracker, GestureLabel::None, &times), 0);
        assert_eq!(tracker.since_ms(), 0.0);
    }

    #[test]
    fn test_flicker_never_confirms() {
        let mut tracker = ConfirmationTracker::default();
        for i in 0..40 {
            let label = if i % 2 == 0 { GestureLabel::Peace } else { GestureLabel::None };
            let step = tracker.observe(label, i as f64 * 100.0);
            assert!(!matches!(step, TrackerStep::Confirmed(_)));
        }
    }

    #[test]
    fn test_backwards_timestamp_does_not_confirm() {
        let mut tracker = ConfirmationTracker::default();
        tracker.observe(GestureLabel::Fist, 5000.0);
        assert_eq!(tracker.observe(GestureLabel::Fist, 100.0), TrackerStep::Holding);
        assert_eq!(tracker.since_ms(), 5000.0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = ConfirmationTracker::new(250.0);
        tracker.observe(GestureLabel::Peace, 0.0);
        assert_eq!(tracker.observe(GestureLabel::Peace, 250.0), TrackerStep::Confirmed(GestureLabel::Peace));

        tracker.set_threshold(500.0);
        assert_eq!(tracker.observe(GestureLabel::Peace, 500.0), TrackerStep::Holding);
        assert_eq!(tracker.observe(GestureLabel::Peace, 750.0), TrackerStep::Confirmed(GestureLabel::Peace));
    }
}
