use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::config::INITIAL_SHAPE_CAPACITY;
use crate::scene::Shape;
use crate::surface::SurfaceSize;

pub const KIND_FILL_CIRCLE: u32 = 0;
pub const KIND_STROKE_CIRCLE: u32 = 1;
pub const KIND_LINE: u32 = 2;
pub const KIND_GLOW: u32 = 3;

/// GPU-side shape record read by `shapes.wgsl` (48 bytes).
///
/// - a: center for circles and glows, start point for lines
/// - b: end point for lines, unused otherwise
/// - width: stroke width, or blur distance for glows
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    pub a: [f32; 2],
    pub b: [f32; 2],
    pub color: [f32; 4],
    pub radius: f32,
    pub width: f32,
    pub kind: u32,
    pub _padding: u32,
}

impl From<&Shape> for ShapeInstance {
    fn from(shape: &Shape) -> Self {
        let (a, b, radius, width, kind, color) = match *shape {
            Shape::FillCircle {
                center,
                radius,
                color,
            } => (center, center, radius, 0.0, KIND_FILL_CIRCLE, color),
            Shape::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => (center, center, radius, width, KIND_STROKE_CIRCLE, color),
            Shape::Line {
                from,
                to,
                width,
                color,
            } => (from, to, 0.0, width, KIND_LINE, color),
            Shape::Glow {
                center,
                radius,
                blur,
                color,
            } => (center, center, radius, blur, KIND_GLOW, color),
        };

        Self {
            a,
            b,
            color: color.to_array(),
            radius,
            width,
            kind,
            _padding: 0,
        }
    }
}

/// Viewport parameters passed to the shape shader (16 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Viewport {
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

/// Storage buffer of shape instances plus the viewport uniform
pub struct ShapeBuffers {
    pub shape_buffer: Buffer,
    pub viewport_buffer: Buffer,
    /// Capacity of `shape_buffer` in instances
    capacity: usize,
    /// Instances written by the last upload
    len: u32,
}

impl ShapeBuffers {
    pub fn new(device: &Device) -> Self {
        let viewport_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("viewport-buffer"),
            size: std::mem::size_of::<Viewport>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            shape_buffer: create_shape_buffer(device, INITIAL_SHAPE_CAPACITY),
            viewport_buffer,
            capacity: INITIAL_SHAPE_CAPACITY,
            len: 0,
        }
    }

    /// Upload this frame's shapes, growing the storage buffer when needed
    pub fn upload(&mut self, device: &Device, queue: &Queue, shapes: &[Shape]) {
        let instances: Vec<ShapeInstance> = shapes.iter().map(ShapeInstance::from).collect();

        let required = grown_capacity(self.capacity, instances.len());
        if required != self.capacity {
            log::debug!("Growing shape buffer {} -> {}", self.capacity, required);
            self.shape_buffer = create_shape_buffer(device, required);
            self.capacity = required;
        }

        if !instances.is_empty() {
            queue.write_buffer(&self.shape_buffer, 0, bytemuck::cast_slice(&instances));
        }
        self.len = instances.len() as u32;
    }

    /// Update the viewport to the surface's pixel size
    pub fn update_viewport(&self, queue: &Queue, size: SurfaceSize) {
        let viewport = Viewport {
            size: [size.width.max(1) as f32, size.height.max(1) as f32],
            _padding: [0.0, 0.0],
        };
        queue.write_buffer(&self.viewport_buffer, 0, bytemuck::bytes_of(&viewport));
    }

    pub fn instance_count(&self) -> u32 {
        self.len
    }
}

fn create_shape_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("shape-buffer"),
        size: (capacity * std::mem::size_of::<ShapeInstance>()) as u64,
        usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Smallest power-of-two capacity holding `needed`, never shrinking
fn grown_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two()
    }
}
