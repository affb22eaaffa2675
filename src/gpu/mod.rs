mod buffers;
mod context;
mod render;

pub use buffers::ShapeBuffers;
pub use context::GpuContext;
pub use render::RenderPipeline;
