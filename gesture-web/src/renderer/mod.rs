//! Renderer module - WebGPU skeleton overlay and status text
//!
//! Re-exports only. All logic in submodules.

// Vertex building is only reached from render_frame on wasm
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod state;
mod skeleton;
mod shapes;
mod debug_ui;

#[cfg(target_arch = "wasm32")]
pub use state::{initialize_gpu, resize_surface, GpuStateError};
#[cfg(target_arch = "wasm32")]
pub use skeleton::render_frame;
pub use debug_ui::{set_status, Status};
