use rand::Rng;

use crate::config::{
    PHASE_RANGE, WAVE_AMPLITUDE_MIN, WAVE_AMPLITUDE_SPAN, WAVE_FREQUENCY_MIN,
    WAVE_FREQUENCY_SPAN, WAVE_MAX_RADIUS_MIN, WAVE_MAX_RADIUS_SPAN, WAVE_SPEED_MIN,
    WAVE_SPEED_SPAN,
};

/// An expanding ring that restarts from a new center once it outgrows `max_radius`
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub max_radius: f32,
    /// Radius growth per step
    pub speed: f32,
    // Carried with the ring but not drawn
    #[allow(dead_code)]
    pub frequency: f32,
    #[allow(dead_code)]
    pub amplitude: f32,
    #[allow(dead_code)]
    pub phase: f32,
}

impl Wave {
    /// Create a ring of zero radius at a random center
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            center_x: rng.gen::<f32>() * width,
            center_y: rng.gen::<f32>() * height,
            radius: 0.0,
            max_radius: WAVE_MAX_RADIUS_MIN + rng.gen::<f32>() * WAVE_MAX_RADIUS_SPAN,
            speed: WAVE_SPEED_MIN + rng.gen::<f32>() * WAVE_SPEED_SPAN,
            frequency: WAVE_FREQUENCY_MIN + rng.gen::<f32>() * WAVE_FREQUENCY_SPAN,
            amplitude: WAVE_AMPLITUDE_MIN + rng.gen::<f32>() * WAVE_AMPLITUDE_SPAN,
            phase: rng.gen::<f32>() * PHASE_RANGE,
        }
    }

    /// Grow by `speed`; past `max_radius` collapse to 0 and move the center.
    ///
    /// Returns true when the ring restarted.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32, height: f32) -> bool {
        self.radius += self.speed;

        if self.radius > self.max_radius {
            self.radius = 0.0;
            self.center_x = rng.gen::<f32>() * width;
            self.center_y = rng.gen::<f32>() * height;
            return true;
        }

        false
    }

    /// Fraction of the way to `max_radius`, in [0, 1]
    pub fn progress(&self) -> f32 {
        self.radius / self.max_radius
    }
}
