/// Pixel dimensions of the drawing surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Bounding box of the element that contains the surface, in display units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to the surface's top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

/// Keeps the drawing surface sized to its container and translates pointer
/// coordinates into surface space
#[derive(Clone, Debug, Default)]
pub struct SurfaceAdapter {
    bounds: ContainerBounds,
    pixel_size: SurfaceSize,
    display_size: (f64, f64),
}

impl SurfaceAdapter {
    pub fn new(bounds: ContainerBounds) -> Self {
        let mut adapter = Self::default();
        adapter.resize(bounds);
        adapter
    }

    /// Match both the pixel size and the displayed size to `bounds`
    pub fn resize(&mut self, bounds: ContainerBounds) -> SurfaceSize {
        self.bounds = bounds;
        self.pixel_size = SurfaceSize {
            width: bounds.width.max(0.0) as u32,
            height: bounds.height.max(0.0) as u32,
        };
        self.display_size = (bounds.width, bounds.height);
        self.pixel_size
    }

    /// Translate client coordinates into surface coordinates
    pub fn pointer_moved(&self, client_x: f64, client_y: f64) -> PointerPosition {
        PointerPosition {
            x: (client_x - self.bounds.left) as f32,
            y: (client_y - self.bounds.top) as f32,
        }
    }

    pub fn pixel_size(&self) -> SurfaceSize {
        self.pixel_size
    }

    pub fn display_size(&self) -> (f64, f64) {
        self.display_size
    }
}
