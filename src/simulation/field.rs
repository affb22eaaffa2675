use rand::Rng;

use crate::config::{PARTICLE_COUNT, WAVE_COUNT};
use crate::scene::{self, Scene};
use crate::simulation::particle::{entangle_consecutive, EntangledPair, Particle};
use crate::simulation::stepper;
use crate::simulation::wave::Wave;
use crate::surface::{PointerPosition, SurfaceSize};

/// Everything the field needs to advance and draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    pub particles: Vec<Particle>,
    pub pairs: Vec<EntangledPair>,
    pub waves: Vec<Wave>,
    /// Monotonic clock reading in milliseconds, set by the last step
    pub time: f64,
    /// Surface bounds used for wrapping and ring placement
    pub width: f32,
    pub height: f32,
    /// Last pointer position over the surface. Recorded only.
    pub pointer: PointerPosition,
}

impl FieldState {
    /// Populate a field with the default particle count
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self::with_particle_count(rng, PARTICLE_COUNT, width, height)
    }

    /// Populate a field with `count` particles, pairing them consecutively
    pub fn with_particle_count<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        width: f32,
        height: f32,
    ) -> Self {
        let mut particles: Vec<Particle> = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        let pairs = entangle_consecutive(rng, &mut particles);
        let waves = (0..WAVE_COUNT)
            .map(|_| Wave::random(rng, width, height))
            .collect();

        Self {
            particles,
            pairs,
            waves,
            time: 0.0,
            width,
            height,
            pointer: PointerPosition::default(),
        }
    }

    /// Track a new surface size. Existing particles are left where they are
    /// and wrap into the new bounds on their next step.
    pub fn resize_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn record_pointer(&mut self, pointer: PointerPosition) {
        self.pointer = pointer;
    }
}

/// A field bound to one drawing surface, with its own random source
pub struct QuantumField<R: Rng> {
    state: FieldState,
    rng: R,
}

impl<R: Rng> QuantumField<R> {
    /// Build a field for `surface`. Without a surface nothing is created.
    pub fn attach(surface: Option<SurfaceSize>, mut rng: R) -> Option<Self> {
        let surface = surface?;
        let state = FieldState::new(&mut rng, surface.width as f32, surface.height as f32);

        log::info!(
            "Quantum field: {} particles, {} pairs, {} waves on {}x{}",
            state.particles.len(),
            state.pairs.len(),
            state.waves.len(),
            surface.width,
            surface.height
        );

        Some(Self { state, rng })
    }

    /// Advance to `time_ms` on the monotonic clock
    pub fn advance(&mut self, time_ms: f64) {
        stepper::step(&mut self.state, time_ms, &mut self.rng);
    }

    /// Draw list for the current state
    pub fn compose(&self) -> Scene {
        scene::compose(&self.state)
    }

    pub fn resize(&mut self, surface: SurfaceSize) {
        self.state
            .resize_bounds(surface.width as f32, surface.height as f32);
    }

    pub fn record_pointer(&mut self, pointer: PointerPosition) {
        self.state.record_pointer(pointer);
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }
}
