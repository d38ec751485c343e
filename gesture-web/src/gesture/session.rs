//! Tracking session: one confirmation tracker per hand, one shared tally
//!
//! Hands are keyed by the id the detector assigns. Each hand debounces on
//! its own so two hands showing different poses never reset each other.

use std::collections::BTreeMap;

use serde::Serialize;

use super::classify::classify;
use super::error::GestureError;
use super::label::GestureLabel;
use super::landmarks::HandPose;
use super::tally::GestureTally;
use super::tracker::{ConfirmationTracker, TrackerStep, DEFAULT_THRESHOLD_MS};

/// Stable per-hand id from the detector (frame index as fallback)
pub type HandId = u32;

/// Output of one frame, consumed by the page
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GestureEvent {
    /// Tally went up; `total` is the new count for `gesture`
    Confirmed { hand: HandId, gesture: GestureLabel, total: u32 },
    /// Pulse the gesture's card; the page times the fade
    Highlight { gesture: GestureLabel },
    /// A hand changed pose, any live highlight should go
    ClearHighlights { hand: HandId },
    /// The hand was detected but its landmarks failed validation
    Rejected { hand: HandId, error: String },
}

/// Latest label seen for a hand
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandLabel {
    pub hand: HandId,
    pub gesture: GestureLabel,
}

/// Every hand the detector reported in one frame
#[derive(Debug, Default)]
pub struct HandFrame {
    /// Validated poses, in frame order
    pub hands: Vec<(HandId, HandPose)>,
    /// Hands that were present but failed validation
    pub rejected: Vec<(HandId, GestureError)>,
}

impl HandFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_present(&self, id: HandId) -> bool {
        self.hands.iter().any(|(hand, _)| *hand == id)
            || self.rejected.iter().any(|(hand, _)| *hand == id)
    }
}

impl From<Vec<(HandId, HandPose)>> for HandFrame {
    fn from(hands: Vec<(HandId, HandPose)>) -> Self {
        Self { hands, rejected: Vec::new() }
    }
}

pub struct GestureSession {
    threshold_ms: f64,
    trackers: BTreeMap<HandId, ConfirmationTracker>,
    tally: GestureTally,
    current: Vec<HandLabel>,
}

impl GestureSession {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            trackers: BTreeMap::new(),
            tally: GestureTally::new(),
            current: Vec::new(),
        }
    }

    /// Classify and track every hand of one frame, in frame order.
    ///
    /// Hands missing from the frame lose their tracker. A rejected hand is
    /// still present: its tracker and last label are left as they were.
    pub fn process_frame(&mut self, frame: &HandFrame, now_ms: f64) -> Vec<GestureEvent> {
        self.trackers.retain(|id, _| frame.is_present(*id));
        self.current.clear();

        let mut events = Vec::new();
        for (hand, pose) in &frame.hands {
            let label = classify(pose);
            self.current.push(HandLabel { hand: *hand, gesture: label });
            events.extend(self.observe_label(*hand, label, now_ms));
        }

        for (hand, err) in &frame.rejected {
            log::warn!("Rejected hand {}: {}", hand, err);
            if let Some(tracker) = self.trackers.get(hand) {
                self.current.push(HandLabel { hand: *hand, gesture: tracker.current() });
            }
            events.push(GestureEvent::Rejected { hand: *hand, error: err.to_string() });
        }
        events
    }

    /// Feed an already-classified label for one hand
    pub fn observe_label(&mut self, hand: HandId, label: GestureLabel, now_ms: f64) -> Vec<GestureEvent> {
        let threshold_ms = self.threshold_ms;
        let tracker = self
            .trackers
            .entry(hand)
            .or_insert_with(|| ConfirmationTracker::new(threshold_ms));

        match tracker.observe(label, now_ms) {
            TrackerStep::Changed { from, to } => {
                log::debug!("hand {}: {} -> {}", hand, from.as_str(), to.as_str());
                vec![GestureEvent::ClearHighlights { hand }]
            }
            TrackerStep::Holding => Vec::new(),
            TrackerStep::Confirmed(gesture) => match self.tally.increment(gesture) {
                Some(total) => {
                    log::info!("✋ {} confirmed (hand {}, total {})", gesture.as_str(), hand, total);
                    vec![
                        GestureEvent::Confirmed { hand, gesture, total },
                        GestureEvent::Highlight { gesture },
                    ]
                }
                None => Vec::new(),
            },
        }
    }

    pub fn tally(&self) -> &GestureTally {
        &self.tally
    }

    /// Labels from the most recent `process_frame`
    pub fn current_gestures(&self) -> &[HandLabel] {
        &self.current
    }

    pub fn tracked_hands(&self) -> usize {
        self.trackers.len()
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Applies to new trackers and to holds already in progress
    pub fn set_threshold(&mut self, threshold_ms: f64) {
        self.threshold_ms = threshold_ms;
        for tracker in self.trackers.values_mut() {
            tracker.set_threshold(threshold_ms);
        }
    }

    /// Forget hands without touching the tally (tracking stopped)
    pub fn clear_hands(&mut self) {
        self.trackers.clear();
        self.current.clear();
    }

    pub fn reset(&mut self) {
        self.clear_hands();
        self.tally.clear();
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_MS)
    }
}
