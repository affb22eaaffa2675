//! Per-frame update of a [`FieldState`].
//!
//! Each function mutates one part of the field. [`step`] runs them in frame
//! order: particles, pair correlation, then waves.

use std::f32::consts::PI;

use rand::Rng;

use crate::config::{DRIFT_AMPLITUDE, DRIFT_RATE, JITTER_SPREAD};
use crate::simulation::field::FieldState;
use crate::simulation::particle::Particle;

/// Advance the whole field to `time_ms`
pub fn step<R: Rng + ?Sized>(state: &mut FieldState, time_ms: f64, rng: &mut R) {
    state.time = time_ms;

    drift_particles(state, rng);
    correlate_pairs(state);
    grow_waves(state, rng);
}

/// Move every particle by its velocity plus a periodic drift, wrap it onto the
/// opposite edge, then apply jitter. Clears `measured`.
pub fn drift_particles<R: Rng + ?Sized>(state: &mut FieldState, rng: &mut R) {
    let (width, height) = (state.width, state.height);
    let time = state.time;

    for particle in &mut state.particles {
        let angle = (time * DRIFT_RATE + particle.phase as f64) as f32;
        particle.x += particle.vx + angle.sin() * DRIFT_AMPLITUDE;
        particle.y += particle.vy + angle.cos() * DRIFT_AMPLITUDE;

        particle.x = wrap(particle.x, width);
        particle.y = wrap(particle.y, height);

        particle.x += (rng.gen::<f32>() - 0.5) * JITTER_SPREAD;
        particle.y += (rng.gen::<f32>() - 0.5) * JITTER_SPREAD;

        particle.measured = false;
    }
}

/// Anti-correlate phases: when exactly one side of a pair is measured, the
/// other takes `π - measured.phase`.
///
/// No code path sets `measured` yet, so within [`step`] this never fires.
pub fn correlate_pairs(state: &mut FieldState) {
    let FieldState {
        particles, pairs, ..
    } = state;

    for pair in pairs.iter() {
        let (a, b) = (&particles[pair.a], &particles[pair.b]);

        let update = match (a.measured, b.measured) {
            (true, false) => Some((pair.b, anti_phase(a))),
            (false, true) => Some((pair.a, anti_phase(b))),
            _ => None,
        };

        if let Some((index, phase)) = update {
            particles[index].phase = phase;
        }
    }
}

/// Grow each ring, restarting any that outgrew its maximum radius
pub fn grow_waves<R: Rng + ?Sized>(state: &mut FieldState, rng: &mut R) {
    let (width, height) = (state.width, state.height);

    for wave in &mut state.waves {
        if wave.advance(rng, width, height) {
            log::trace!("Wave restarted at ({:.0}, {:.0})", wave.center_x, wave.center_y);
        }
    }
}

fn anti_phase(measured: &Particle) -> f32 {
    -measured.phase + PI
}

/// Toroidal wrap: leaving one edge re-enters at the opposite one
fn wrap(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
