//! Status line and debug overlay text
//!
//! Tracks detector/camera status plus FPS and hand count for display.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::bridge;

/// Lifecycle of the camera + detector, shown in the page status line
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Status {
    #[default]
    Loading,
    Ready,
    Tracking,
    Stopped,
    CameraError(String),
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Loading => "Loading MediaPipe... Please wait.".to_string(),
            Status::Ready => "MediaPipe Hands ready. Click \"Start Camera\" to begin.".to_string(),
            Status::Tracking => "Camera started. Show your hands to the camera!".to_string(),
            Status::Stopped => "Camera stopped. Click \"Start Camera\" to begin again.".to_string(),
            Status::CameraError(msg) => format!("Error accessing camera: {}", msg),
        }
    }
}

/// Overlay storage
#[derive(Default)]
struct Metrics {
    status: Status,

    /// Frame timing
    fps: f32,
    frame_time_ms: f32,
}

impl Metrics {
    /// Ignore invalid times (tab backgrounded or first frame)
    fn record_frame(&mut self, fps: f32, frame_time_ms: f32) {
        if !(1.0..=200.0).contains(&frame_time_ms) {
            return;
        }
        // Exponential moving average for smooth display
        self.fps = self.fps * 0.9 + fps * 0.1;
        self.frame_time_ms = self.frame_time_ms * 0.9 + frame_time_ms * 0.1;
    }
}

thread_local! {
    static METRICS: RefCell<Metrics> = RefCell::new(Metrics::default());
}

pub fn set_status(status: Status) {
    METRICS.with(|m| {
        m.borrow_mut().status = status;
    });
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// MediaPipe Hands finished loading
#[wasm_bindgen]
pub fn set_detector_ready() {
    set_status(Status::Ready);
    log::info!("✅ MediaPipe Hands ready");
}

/// getUserMedia failed; `message` is the browser's error message
#[wasm_bindgen]
pub fn report_camera_error(message: &str) {
    log::error!("Error accessing camera: {}", message);
    set_status(Status::CameraError(message.to_string()));
}

#[wasm_bindgen]
pub fn get_status_text() -> String {
    METRICS.with(|m| m.borrow().status.text())
}

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    METRICS.with(|m| m.borrow_mut().record_frame(fps, frame_time_ms));
}

/// Get formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    let gestures = bridge::get_current_gestures();
    let counts = bridge::get_gesture_counts();
    METRICS.with(|m| {
        let metrics = m.borrow();
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\nHands: {}\nTally: {}",
            metrics.fps, metrics.frame_time_ms, gestures, counts,
        )
    })
}
