//! Gesture labels
//!
//! String keys double as the DOM ids of the gesture cards on the page.

use serde::{Deserialize, Serialize};

/// Gesture keys in tally order (excludes `None`)
pub const GESTURE_KEYS: [&str; 4] = ["thumbsUp", "peace", "fist", "openHand"];

/// Closed set of recognizable static poses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureLabel {
    ThumbsUp,
    Peace,
    Fist,
    OpenHand,
    #[default]
    None,
}

impl GestureLabel {
    /// Every countable gesture, in tally order
    pub const COUNTED: [GestureLabel; 4] = [
        GestureLabel::ThumbsUp,
        GestureLabel::Peace,
        GestureLabel::Fist,
        GestureLabel::OpenHand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::ThumbsUp => "thumbsUp",
            GestureLabel::Peace => "peace",
            GestureLabel::Fist => "fist",
            GestureLabel::OpenHand => "openHand",
            GestureLabel::None => "none",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "thumbsUp" => Some(GestureLabel::ThumbsUp),
            "peace" => Some(GestureLabel::Peace),
            "fist" => Some(GestureLabel::Fist),
            "openHand" => Some(GestureLabel::OpenHand),
            "none" => Some(GestureLabel::None),
            _ => None,
        }
    }

    /// Position in the tally, `None` has no slot
    pub fn tally_index(&self) -> Option<usize> {
        match self {
            GestureLabel::ThumbsUp => Some(0),
            GestureLabel::Peace => Some(1),
            GestureLabel::Fist => Some(2),
            GestureLabel::OpenHand => Some(3),
            GestureLabel::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == GestureLabel::None
    }
}
