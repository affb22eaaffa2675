use rand::rngs::ThreadRng;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::frame_loop::{FpsCounter, FrameLoop, LoopHandle};
use crate::gpu::{GpuContext, RenderPipeline, ShapeBuffers};
use crate::simulation::QuantumField;
use crate::surface::{ContainerBounds, SurfaceAdapter};

/// Application state
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    shape_buffers: Option<ShapeBuffers>,
    render_pipeline: Option<RenderPipeline>,
    field: Option<QuantumField<ThreadRng>>,
    surface: SurfaceAdapter,
    frame_loop: FrameLoop,
    loop_handle: Option<LoopHandle>,
    fps_counter: FpsCounter,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            shape_buffers: None,
            render_pipeline: None,
            field: None,
            surface: SurfaceAdapter::default(),
            frame_loop: FrameLoop::new(),
            loop_handle: None,
            fps_counter: FpsCounter::new(),
        }
    }

    /// Bring up window, GPU and field, then start the frame loop.
    ///
    /// Returns `None` when any part of the surface is unavailable; nothing is
    /// created in that case.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Option<LoopHandle> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::warn!("No drawing surface ({}), field disabled", e);
                return None;
            }
        };

        log::info!("Creating GPU context...");
        let gpu = match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => {
                log::warn!("GPU unavailable ({}), field disabled", e);
                return None;
            }
        };

        self.surface = SurfaceAdapter::new(container_of(&window));
        let size = self.surface.pixel_size();
        let field = QuantumField::attach(Some(size), rand::thread_rng())?;

        let shape_buffers = ShapeBuffers::new(&gpu.device);
        shape_buffers.update_viewport(&gpu.queue, size);
        let render_pipeline = RenderPipeline::new(&gpu.device, gpu.format());

        log::info!("Initialization complete! Escape to quit.");

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.shape_buffers = Some(shape_buffers);
        self.render_pipeline = Some(render_pipeline);
        self.field = Some(field);

        Some(self.frame_loop.start())
    }

    /// Advance the field to the current clock reading and draw it
    fn frame(&mut self) {
        let (Some(gpu), Some(buffers), Some(render), Some(field)) = (
            self.gpu.as_ref(),
            self.shape_buffers.as_mut(),
            self.render_pipeline.as_ref(),
            self.field.as_mut(),
        ) else {
            return;
        };

        field.advance(self.frame_loop.elapsed_ms());
        let scene = field.compose();

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(gpu.format()),
            ..Default::default()
        });

        buffers.upload(&gpu.device, &gpu.queue, &scene.shapes);

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        let bind_group =
            render.create_bind_group(&gpu.device, &buffers.shape_buffer, &buffers.viewport_buffer);
        render.draw(&mut encoder, &view, &bind_group, buffers.instance_count());

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if let Some(fps) = self.fps_counter.tick() {
            log::debug!(
                "{:.0} FPS, {} shapes, t = {:.0} ms",
                fps,
                scene.len(),
                field.state().time
            );
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} FPS", WINDOW_TITLE, fps));
            }
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        let size = self.surface.resize(ContainerBounds {
            left: 0.0,
            top: 0.0,
            width: new_size.width as f64,
            height: new_size.height as f64,
        });
        let (display_width, display_height) = self.surface.display_size();
        log::info!("Window resized to {}x{}", display_width, display_height);

        if size.is_empty() {
            return;
        }

        if let Some(gpu) = &mut self.gpu {
            gpu.resize(size);
            if let Some(buffers) = &self.shape_buffers {
                buffers.update_viewport(&gpu.queue, size);
            }
        }
        if let Some(field) = &mut self.field {
            field.resize(size);
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(handle) = self.loop_handle.take() {
            handle.stop();
        }
        event_loop.exit();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing quantum field...");

        match self.init(event_loop) {
            Some(handle) => {
                self.loop_handle = Some(handle);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            None => event_loop.exit(),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                self.shutdown(event_loop);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    log::info!("Escape pressed, exiting...");
                    self.shutdown(event_loop);
                }
            }
            WindowEvent::Resized(new_size) => self.resize(new_size),
            WindowEvent::CursorMoved { position, .. } => {
                let pointer = self.surface.pointer_moved(position.x, position.y);
                if let Some(field) = &mut self.field {
                    field.record_pointer(pointer);
                }
            }
            WindowEvent::RedrawRequested => {
                if !self.frame_loop.is_running() {
                    return;
                }
                self.frame();
                // Schedule the next frame on the host's refresh
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// The window's inner area stands in for the surface's container
fn container_of(window: &Window) -> ContainerBounds {
    let size = window.inner_size();
    ContainerBounds {
        left: 0.0,
        top: 0.0,
        width: size.width as f64,
        height: size.height as f64,
    }
}
