//! Hand landmark intake from MediaPipe Hands
//!
//! JS flattens `results.multiHandLandmarks` into one Float32Array:
//! `num_hands × 21 landmarks × (x, y, z)`. Each hand is validated on its
//! own; a bad hand comes back as a `rejected` event and keeps its hold.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::gesture::{GestureError, HandFrame, HandId, HandPose, LANDMARK_COUNT, LANDMARK_STRIDE};
use super::gesture_integration;

/// Floats per hand in the flat buffer
pub const HAND_FLOATS: usize = LANDMARK_COUNT * LANDMARK_STRIDE;

/// Poses from the latest frame, read by the renderer
#[derive(Default)]
struct HandStore {
    hands: Vec<(HandId, HandPose)>,
}

thread_local! {
    static HAND_STORE: RefCell<HandStore> = RefCell::new(HandStore::default());
}

/// The buffer must hold exactly `num_hands` hands
fn check_frame_len(flat_len: usize, num_hands: usize) -> Result<(), GestureError> {
    let expected = num_hands
        .checked_mul(HAND_FLOATS)
        .ok_or(GestureError::HandCountOverflow { num_hands })?;
    if flat_len != expected {
        return Err(GestureError::FrameLength { expected, found: flat_len });
    }
    Ok(())
}

/// Split a flat frame buffer into validated poses.
///
/// `hand_ids[h]` is the detector's id for hand `h`; missing ids fall back
/// to the hand's position in the frame. Only the first `keep` hands are
/// parsed, the length check still uses `num_hands`.
pub(crate) fn parse_hands(
    flat_data: &[f32],
    num_hands: usize,
    keep: usize,
    hand_ids: &[u32],
) -> Result<HandFrame, GestureError> {
    check_frame_len(flat_data.len(), num_hands)?;

    let mut frame = HandFrame::new();
    for (h, chunk) in flat_data.chunks_exact(HAND_FLOATS).take(keep).enumerate() {
        let id = hand_ids.get(h).copied().unwrap_or(h as HandId);
        if frame.is_present(id) {
            return Err(GestureError::DuplicateHandId { id });
        }
        match HandPose::from_flat(chunk) {
            Ok(pose) => frame.hands.push((id, pose)),
            Err(e) => frame.rejected.push((id, e)),
        }
    }

    Ok(frame)
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JS once per MediaPipe result.
/// `timestamp_ms` defaults to `Date.now()`.
/// Returns the frame's gesture events as a JSON array.
#[wasm_bindgen]
pub fn apply_hand_landmarks(
    flat_data: &[f32],
    num_hands: usize,
    hand_ids: &[u32],
    timestamp_ms: Option<f64>,
) -> Result<String, JsValue> {
    let now = timestamp_ms.unwrap_or_else(js_sys::Date::now);

    if !gesture_integration::is_tracking() {
        return Ok("[]".to_string());
    }

    let max_hands = gesture_integration::max_hands();
    if num_hands > max_hands {
        log::warn!("Got {} hands, only tracking the first {}", num_hands, max_hands);
    }

    let frame = parse_hands(flat_data, num_hands, num_hands.min(max_hands), hand_ids)?;

    HAND_STORE.with(|store_cell| {
        store_cell.borrow_mut().hands = frame.hands.clone();
    });

    let events = gesture_integration::process_hands(&frame, now);
    serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ============================================================================
// INTERNAL API
// ============================================================================

/// Latest frame's hands, `None` if nothing to draw
pub fn get_hand_poses() -> Option<Vec<HandPose>> {
    HAND_STORE.with(|store_cell| {
        let store = store_cell.borrow();
        if store.hands.is_empty() {
            None
        } else {
            Some(store.hands.iter().map(|(_, pose)| pose.clone()).collect())
        }
    })
}

pub fn clear_hand_poses() {
    HAND_STORE.with(|store_cell| {
        store_cell.borrow_mut().hands.clear();
    });
}
