mod app;
mod config;
mod frame_loop;
mod gpu;
mod scene;
mod simulation;
mod surface;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    // Frames are paced by redraw requests, which follow the display refresh
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app)
}
