//! Gesture Web - hand gesture counter over MediaPipe Hands
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The `gesture` module is plain Rust and carries the classification and
//! hold-confirmation logic; everything browser-facing sits in `bridge` and
//! `renderer`.

pub mod gesture;
mod bridge;
mod renderer;
#[cfg(target_arch = "wasm32")]
mod logger;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{apply_hand_landmarks, get_gesture_counts};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init_logger(log::LevelFilter::Info);
}

/// Initialize WebGPU - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    log::info!("✅ WebGPU initialized with hand skeleton rendering");
    Ok(())
}

/// Render one frame with current hands
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_frame();
}

/// Resize the overlay once the video reports its dimensions
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn resize_canvas(width: u32, height: u32) -> Result<(), JsValue> {
    renderer::resize_surface(width, height)?;
    Ok(())
}
