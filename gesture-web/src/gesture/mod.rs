//! Gesture module - static pose classification and hold confirmation
//!
//! Pure Rust, no wasm bindings. The bridge feeds it landmark frames.

mod classify;
mod config;
mod error;
mod label;
mod landmarks;
mod session;
mod tally;
mod tracker;

pub use classify::{classify, classify_fingers, FingerStates};
pub use config::{DetectorOptions, GestureConfig, MAX_HANDS};
pub use error::GestureError;
pub use label::{GestureLabel, GESTURE_KEYS};
pub use landmarks::{
    HandPose, Landmark, HAND_SKELETON, LANDMARK_COUNT, LANDMARK_STRIDE, WRIST,
};
pub use session::{GestureEvent, GestureSession, HandFrame, HandId, HandLabel};
pub use tally::GestureTally;
pub use tracker::{ConfirmationTracker, TrackerStep, DEFAULT_THRESHOLD_MS};
