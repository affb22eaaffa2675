use std::sync::Arc;
use wgpu::{Device, Instance, Queue, Surface, SurfaceConfiguration, TextureFormat};
use winit::window::Window;

use crate::surface::SurfaceSize;

/// Reasons the drawing surface could not be brought up
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface not supported by adapter")]
    UnsupportedSurface,
}

/// GPU context holding wgpu device, queue, and the window surface
pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    /// Format the frame is rendered through; never an sRGB-encoding view
    pub view_format: TextureFormat,
}

impl GpuContext {
    /// Create a new GPU context for the given window
    pub async fn new(window: Arc<Window>) -> Result<Self, InitError> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(InitError::NoAdapter)?;

        log::info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("quantum-field-device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await?;

        let size = window.inner_size();
        let mut config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or(InitError::UnsupportedSurface)?;

        // Palette bytes are written and blended unconverted, as on a 2D canvas
        let (view_format, view_formats) = canvas_view_format(config.format);
        config.view_formats = view_formats;

        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
        })
    }

    /// Reconfigure the surface to a new pixel size. Empty sizes are ignored.
    pub fn resize(&mut self, size: SurfaceSize) {
        if !size.is_empty() {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Format render targets and the pipeline use
    pub fn format(&self) -> TextureFormat {
        self.view_format
    }
}

/// View format for an sRGB-encoding surface: the same format without the
/// sRGB suffix, registered as an extra view format on the surface
fn canvas_view_format(surface_format: TextureFormat) -> (TextureFormat, Vec<TextureFormat>) {
    let view_format = surface_format.remove_srgb_suffix();
    if view_format == surface_format {
        (surface_format, Vec::new())
    } else {
        (view_format, vec![view_format])
    }
}
