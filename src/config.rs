use std::f32::consts::TAU;

/// Window defaults
pub const WINDOW_TITLE: &str = "Quantum Field";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

// ============================================
// Field population
// ============================================

/// Number of particles created at startup (consecutive pairs are entangled)
pub const PARTICLE_COUNT: usize = 12;

/// Number of expanding rings
pub const WAVE_COUNT: usize = 3;

/// Particle velocity per axis is (u - 0.5) * VELOCITY_SPREAD, i.e. [-0.25, 0.25)
pub const VELOCITY_SPREAD: f32 = 0.5;

/// Particle radius range [min, min + span)
pub const PARTICLE_RADIUS_MIN: f32 = 3.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;

/// Pair strength range [0.7, 1.0)
pub const PAIR_STRENGTH_MIN: f32 = 0.7;
pub const PAIR_STRENGTH_SPAN: f32 = 0.3;

/// Wave parameter ranges, each [min, min + span)
pub const WAVE_MAX_RADIUS_MIN: f32 = 150.0;
pub const WAVE_MAX_RADIUS_SPAN: f32 = 100.0;
pub const WAVE_SPEED_MIN: f32 = 0.5;
pub const WAVE_SPEED_SPAN: f32 = 0.5;
pub const WAVE_FREQUENCY_MIN: f32 = 0.02;
pub const WAVE_FREQUENCY_SPAN: f32 = 0.01;
pub const WAVE_AMPLITUDE_MIN: f32 = 20.0;
pub const WAVE_AMPLITUDE_SPAN: f32 = 20.0;

/// Full turn, used for every random phase
pub const PHASE_RANGE: f32 = TAU;

// ============================================
// Motion
// ============================================

/// Drift: sin/cos(time * DRIFT_RATE + phase) * DRIFT_AMPLITUDE
pub const DRIFT_RATE: f64 = 0.001;
pub const DRIFT_AMPLITUDE: f32 = 0.1;

/// Jitter per axis is (u - 0.5) * JITTER_SPREAD, i.e. [-0.1, 0.1)
pub const JITTER_SPREAD: f32 = 0.2;

// ============================================
// Rendering
// ============================================

/// Angular rates applied to the millisecond clock
pub const LINK_ALPHA_RATE: f64 = 0.001;
pub const PULSE_RATE: f64 = 0.002;
pub const SUPERPOSITION_RATE: f64 = 0.003;
pub const SUPERPOSITION_ALPHA_RATE: f64 = 0.002;

/// Link opacity = strength * (LINK_ALPHA_BASE + LINK_ALPHA_SWING * sin(...))
pub const LINK_ALPHA_BASE: f32 = 0.2;
pub const LINK_ALPHA_SWING: f32 = 0.1;

/// Wave opacity = (1 - radius / max_radius) * WAVE_ALPHA
pub const WAVE_ALPHA: f32 = 0.1;

pub const PULSE_RADIUS: f32 = 2.0;
pub const LINE_WIDTH: f32 = 1.0;

/// Superposition ring radius = radius + OFFSET + SWING * sin(...)
pub const SUPERPOSITION_OFFSET: f32 = 3.0;
pub const SUPERPOSITION_SWING: f32 = 2.0;
pub const SUPERPOSITION_ALPHA_BASE: f32 = 0.3;
pub const SUPERPOSITION_ALPHA_SWING: f32 = 0.1;

/// Glow around entangled particles
pub const GLOW_BLUR: f32 = 8.0;
pub const GLOW_ALPHA: f32 = 0.3;

/// Palette (sRGB bytes)
pub const PARTICLE_RGB: [u8; 3] = [255, 255, 255];
pub const ENTANGLEMENT_RGB: [u8; 3] = [139, 21, 56];
pub const GLOW_RGB: [u8; 3] = [255, 255, 255];

/// Clear color behind the field
pub const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

/// Initial capacity (in shapes) of the GPU instance buffer
pub const INITIAL_SHAPE_CAPACITY: usize = 64;
