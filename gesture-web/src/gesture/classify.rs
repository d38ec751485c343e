//! Static pose classification
//!
//! Compares each fingertip with its base joint:
//! - thumb: tip further right than the MCP (x grows to the right)
//! - other fingers: tip above the MCP (y grows downward)
//!
//! The thumb rule assumes the camera's mirroring convention. A mirrored feed
//! flips it, so a raised thumb on the other hand reads as curled.

use super::label::GestureLabel;
use super::landmarks::{HandPose, FINGER_BASES, FINGER_TIPS};

/// Digit positions in `FingerStates`
pub const THUMB: usize = 0;
pub const INDEX: usize = 1;
pub const MIDDLE: usize = 2;

/// Extended flag per digit: thumb, index, middle, ring, pinky
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates(pub [bool; 5]);

impl FingerStates {
    pub fn from_pose(pose: &HandPose) -> Self {
        let mut up = [false; 5];
        for digit in 0..5 {
            let tip = pose.landmark(FINGER_TIPS[digit]);
            let base = pose.landmark(FINGER_BASES[digit]);
            up[digit] = if digit == THUMB {
                tip.x > base.x
            } else {
                tip.y < base.y
            };
        }
        Self(up)
    }

    pub fn is_extended(&self, digit: usize) -> bool {
        self.0[digit]
    }

    pub fn up_count(&self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }
}

/// Label a single frame's pose. First matching rule wins.
pub fn classify(pose: &HandPose) -> GestureLabel {
    classify_fingers(FingerStates::from_pose(pose))
}

pub fn classify_fingers(fingers: FingerStates) -> GestureLabel {
    let thumb = fingers.is_extended(THUMB);
    let peace_pair = fingers.is_extended(INDEX) && fingers.is_extended(MIDDLE);

    match fingers.up_count() {
        1 if thumb => GestureLabel::ThumbsUp,
        2 if peace_pair => GestureLabel::Peace,
        0 => GestureLabel::Fist,
        5 => GestureLabel::OpenHand,
        _ => GestureLabel::None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::gesture::landmarks::{Landmark, LANDMARK_COUNT};

    const RING: usize = 3;
    const PINKY: usize = 4;

    /// Build a pose with the given digits extended and the rest curled
    pub(crate) fn pose_with(up: [bool; 5]) -> HandPose {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        for digit in 0..5 {
            let tip = &mut points[FINGER_TIPS[digit]];
            if digit == THUMB {
                tip.x = if up[digit] { 0.6 } else { 0.4 };
            } else {
                tip.y = if up[digit] { 0.3 } else { 0.7 };
            }
        }
        HandPose::from_landmarks(&points).unwrap()
    }

    #[test]
    fn test_fist() {
        assert_eq!(classify(&pose_with([false; 5])), GestureLabel::Fist);
    }

    #[test]
    fn test_open_hand() {
        assert_eq!(classify(&pose_with([true; 5])), GestureLabel::OpenHand);
    }

    #[test]
    fn test_thumbs_up() {
        let pose = pose_with([true, false, false, false, false]);
        assert_eq!(classify(&pose), GestureLabel::ThumbsUp);
    }

    #[test]
    fn test_single_index_is_none() {
        let pose = pose_with([false, true, false, false, false]);
        assert_eq!(classify(&pose), GestureLabel::None);
    }

    #[test]
    fn test_peace() {
        let pose = pose_with([false, true, true, false, false]);
        assert_eq!(classify(&pose), GestureLabel::Peace);
    }

    #[test]
    fn test_thumb_and_index_is_not_peace() {
        let pose = pose_with([true, true, false, false, false]);
        assert_eq!(classify(&pose), GestureLabel::None);
    }

    #[test]
    fn test_three_or_four_up_is_none() {
        assert_eq!(classify(&pose_with([false, true, true, true, false])), GestureLabel::None);
        assert_eq!(classify(&pose_with([false, true, true, true, true])), GestureLabel::None);
    }

    #[test]
    fn test_fist_and_open_hand_track_all_flags() {
        // Every combination of the 5 flags: Fist iff none up, OpenHand iff all up
        for bits in 0u8..32 {
            let up: [bool; 5] = std::array::from_fn(|d| bits & (1 << d) != 0);
            let label = classify(&pose_with(up));
            assert_eq!(label == GestureLabel::Fist, up.iter().all(|u| !u));
            assert_eq!(label == GestureLabel::OpenHand, up.iter().all(|u| *u));
        }
    }

    #[test]
    fn test_deterministic() {
        let pose = pose_with([false, true, true, false, false]);
        let first = classify(&pose);
        for _ in 0..10 {
            assert_eq!(classify(&pose), first);
        }
    }

    #[test]
    fn test_tip_level_with_base_is_curled() {
        // Strict comparisons: equal coordinates do not count as extended
        let points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        let pose = HandPose::from_landmarks(&points).unwrap();
        assert_eq!(FingerStates::from_pose(&pose).up_count(), 0);
        assert_eq!(classify(&pose), GestureLabel::Fist);
    }

    #[test]
    fn test_finger_states_accessors() {
        let fingers = FingerStates::from_pose(&pose_with([true, false, true, false, true]));
        assert!(fingers.is_extended(THUMB));
        assert!(!fingers.is_extended(INDEX));
        assert!(fingers.is_extended(MIDDLE));
        assert!(!fingers.is_extended(RING));
        assert!(fingers.is_extended(PINKY));
        assert_eq!(fingers.up_count(), 3);
    }
}
