//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points for gesture data live here.
//! Re-exports only in mod.rs, logic in submodules.

// The internal API is only read by the wasm renderer
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]

mod hand_landmarks;
mod gesture_integration;
mod highlights;

pub use hand_landmarks::{
    // WASM entry points
    apply_hand_landmarks,
    // Internal API
    get_hand_poses,
    HAND_FLOATS,
};

pub use gesture_integration::{
    // WASM entry points
    get_gesture_counts,
    get_gesture_count,
    get_current_gestures,
    get_active_highlights,
    reset_session,
    configure,
    set_confirmation_threshold,
    get_detector_options,
    toggle_landmarks,
    start_tracking,
    stop_tracking,
    is_tracking_active,
    // Internal API
    landmarks_visible,
};

