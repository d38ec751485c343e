//! Gesture integration - connects the gesture session with the page
//!
//! Holds the session, config and highlight timers. JS reads the tally and
//! status through the getters below after each frame.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::gesture::{GestureConfig, GestureError, GestureEvent, GestureLabel, GestureSession, HandFrame};
use super::hand_landmarks::clear_hand_poses;
use super::highlights::HighlightBoard;
use crate::renderer::{set_status, Status};

impl From<GestureError> for JsValue {
    fn from(err: GestureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Session state
struct SessionState {
    session: GestureSession,
    config: GestureConfig,
    highlights: HighlightBoard,
    /// Set by start/stop; frames are ignored while false
    tracking: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        let config = GestureConfig::default();
        Self {
            session: GestureSession::new(config.confirmation_threshold_ms),
            config,
            highlights: HighlightBoard::new(),
            tracking: false,
        }
    }
}

thread_local! {
    static SESSION_STATE: RefCell<SessionState> = RefCell::new(SessionState::default());
}

// ============================================================================
// INTERNAL API
// ============================================================================

/// Run one frame's hands through the session (called from apply_hand_landmarks)
pub fn process_hands(frame: &HandFrame, timestamp_ms: f64) -> Vec<GestureEvent> {
    SESSION_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let events = state.session.process_frame(frame, timestamp_ms);
        let duration = state.config.highlight_duration_ms;
        state.highlights.apply(&events, timestamp_ms, duration);
        events
    })
}

pub fn is_tracking() -> bool {
    SESSION_STATE.with(|state_cell| state_cell.borrow().tracking)
}

pub fn max_hands() -> usize {
    SESSION_STATE.with(|state_cell| state_cell.borrow().config.detector.max_num_hands as usize)
}

pub fn landmarks_visible() -> bool {
    SESSION_STATE.with(|state_cell| state_cell.borrow().config.show_landmarks)
}

// ============================================================================
// WASM API
// ============================================================================

/// Tally as `{"thumbsUp": n, "peace": n, "fist": n, "openHand": n}`
#[wasm_bindgen]
pub fn get_gesture_counts() -> String {
    SESSION_STATE.with(|state_cell| {
        serde_json::to_string(state_cell.borrow().session.tally()).unwrap_or_else(|_| "{}".to_string())
    })
}

/// Single counter by DOM key, 0 for unknown keys
#[wasm_bindgen]
pub fn get_gesture_count(key: &str) -> u32 {
    let label = match GestureLabel::from_key(key) {
        Some(label) => label,
        None => return 0,
    };
    SESSION_STATE.with(|state_cell| state_cell.borrow().session.tally().get(label))
}

/// Labels of the last frame as `[{"hand": id, "gesture": key}, ...]`
#[wasm_bindgen]
pub fn get_current_gestures() -> String {
    SESSION_STATE.with(|state_cell| {
        serde_json::to_string(state_cell.borrow().session.current_gestures())
            .unwrap_or_else(|_| "[]".to_string())
    })
}

/// Gesture keys whose card should still be lit
#[wasm_bindgen]
pub fn get_active_highlights(now_ms: f64) -> String {
    SESSION_STATE.with(|state_cell| {
        let active = state_cell.borrow().highlights.active(now_ms);
        serde_json::to_string(&active).unwrap_or_else(|_| "[]".to_string())
    })
}

/// Zero the tally and forget all hands
#[wasm_bindgen]
pub fn reset_session() {
    SESSION_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.session.reset();
        state.highlights.clear();
    });
    clear_hand_poses();
    log::info!("🔄 Gesture session reset");
}

/// Replace the runtime config from a JSON object (missing fields use defaults)
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = GestureConfig::from_json(json)?;
    SESSION_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.session.set_threshold(config.confirmation_threshold_ms);
        state.config = config;
    });
    log::info!("⚙️ Gesture config updated");
    Ok(())
}

#[wasm_bindgen]
pub fn set_confirmation_threshold(ms: f64) -> Result<(), JsValue> {
    SESSION_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let mut config = state.config.clone();
        config.confirmation_threshold_ms = ms;
        config.validate()?;
        state.session.set_threshold(ms);
        state.config = config;
        Ok(())
    })
}

/// Options object for MediaPipe `Hands.setOptions`
#[wasm_bindgen]
pub fn get_detector_options() -> String {
    SESSION_STATE.with(|state_cell| {
        state_cell.borrow().config.detector.to_json().unwrap_or_else(|_| "{}".to_string())
    })
}

/// Flip skeleton overlay visibility, returns the new state
#[wasm_bindgen]
pub fn toggle_landmarks() -> bool {
    SESSION_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.config.show_landmarks = !state.config.show_landmarks;
        state.config.show_landmarks
    })
}

/// Camera is streaming; start accepting frames
#[wasm_bindgen]
pub fn start_tracking() {
    SESSION_STATE.with(|state_cell| {
        state_cell.borrow_mut().tracking = true;
    });
    set_status(Status::Tracking);
    log::info!("📷 Tracking started");
}

/// Camera stopped: drop hands and clear the overlay, keep the tally
#[wasm_bindgen]
pub fn stop_tracking() {
    SESSION_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.tracking = false;
        state.session.clear_hands();
        state.highlights.clear();
    });
    clear_hand_poses();
    set_status(Status::Stopped);
    log::info!("⏹️ Tracking stopped");
}

#[wasm_bindgen]
pub fn is_tracking_active() -> bool {
    is_tracking()
}
