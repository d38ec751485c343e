//! Overlay GPU state - device, surface and the skeleton pipeline
//!
//! The canvas sits on top of the <video>, so the surface is transparent and
//! blends premultiplied colors with the page.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use super::shapes::{Vertex, MAX_VERTICES};

/// Canvas the overlay draws on (stacked over the <video>)
pub const CANVAS_ID: &str = "output-canvas";

/// Camera resolution requested by the page
const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;

#[derive(Debug, thiserror::Error)]
pub enum GpuStateError {
    #[error("No window found")]
    NoWindow,
    #[error("No document found")]
    NoDocument,
    #[error("No canvas with id 'output-canvas' found")]
    NoCanvas,
    #[error("Surface creation failed: {0}")]
    SurfaceCreationFailed(String),
    #[error("Surface reports no usable format")]
    NoSurfaceFormat,
    #[error("Failed to find a suitable GPU adapter")]
    NoAdapter,
    #[error("Device creation failed: {0}")]
    DeviceCreationFailed(String),
    #[error("WebGPU not initialized")]
    NotInitialized,
}

impl From<GpuStateError> for JsValue {
    fn from(err: GpuStateError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub(crate) struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    pub canvas: web_sys::HtmlCanvasElement,
    pub render_pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
}

thread_local! {
    pub(crate) static GPU_STATE: RefCell<Option<GpuState>> = RefCell::new(None);
}

fn overlay_canvas() -> Result<web_sys::HtmlCanvasElement, GpuStateError> {
    web_sys::window()
        .ok_or(GpuStateError::NoWindow)?
        .document()
        .ok_or(GpuStateError::NoDocument)?
        .get_element_by_id(CANVAS_ID)
        .ok_or(GpuStateError::NoCanvas)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| GpuStateError::NoCanvas)
}

/// sRGB if offered, premultiplied alpha if offered
fn overlay_surface_config(
    caps: &wgpu::SurfaceCapabilities,
    width: u32,
    height: u32,
) -> Result<wgpu::SurfaceConfiguration, GpuStateError> {
    let format = caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
        .ok_or(GpuStateError::NoSurfaceFormat)?;

    let premultiplied = wgpu::CompositeAlphaMode::PreMultiplied;
    let alpha_mode = if caps.alpha_modes.contains(&premultiplied) {
        premultiplied
    } else {
        caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    };

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}

fn skeleton_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Overlay Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Overlay Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Hand Skeleton Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Set up WebGPU on the overlay canvas
pub async fn initialize_gpu() -> Result<(), GpuStateError> {
    let canvas = overlay_canvas()?;
    canvas.set_width(DEFAULT_WIDTH);
    canvas.set_height(DEFAULT_HEIGHT);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| GpuStateError::SurfaceCreationFailed(format!("{:?}", e)))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(GpuStateError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Gesture Overlay Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        )
        .await
        .map_err(|e| GpuStateError::DeviceCreationFailed(format!("{:?}", e)))?;

    let config = overlay_surface_config(&surface.get_capabilities(&adapter), DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
    surface.configure(&device, &config);
    log::debug!("Overlay surface {:?}, alpha {:?}", config.format, config.alpha_mode);

    let render_pipeline = skeleton_pipeline(&device, config.format);

    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Skeleton Vertices"),
        size: (MAX_VERTICES * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GPU_STATE.with(|state| {
        *state.borrow_mut() = Some(GpuState {
            device,
            queue,
            surface,
            config,
            canvas,
            render_pipeline,
            vertex_buffer,
        });
    });

    Ok(())
}

/// Match the canvas to the video's intrinsic size
pub fn resize_surface(width: u32, height: u32) -> Result<(), GpuStateError> {
    GPU_STATE.with(|state_cell| {
        let mut state_ref = state_cell.borrow_mut();
        let state = state_ref.as_mut().ok_or(GpuStateError::NotInitialized)?;

        let width = width.max(1);
        let height = height.max(1);
        state.canvas.set_width(width);
        state.canvas.set_height(height);
        state.config.width = width;
        state.config.height = height;
        state.surface.configure(&state.device, &state.config);
        Ok(())
    })
}
