//! Turns a [`FieldState`] into an ordered list of 2D shapes.
//!
//! Composition is a pure function of the state: the GPU backend only
//! rasterizes what [`compose`] returns, so identical states give identical
//! frames.

use crate::config::{
    ENTANGLEMENT_RGB, GLOW_ALPHA, GLOW_BLUR, GLOW_RGB, LINE_WIDTH, LINK_ALPHA_BASE,
    LINK_ALPHA_RATE, LINK_ALPHA_SWING, PARTICLE_RGB, PULSE_RADIUS, PULSE_RATE,
    SUPERPOSITION_ALPHA_BASE, SUPERPOSITION_ALPHA_RATE, SUPERPOSITION_ALPHA_SWING,
    SUPERPOSITION_OFFSET, SUPERPOSITION_RATE, SUPERPOSITION_SWING, WAVE_ALPHA,
};
use crate::simulation::{EntangledPair, FieldState, Particle, Wave};

/// Straight (non-premultiplied) color with components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn from_rgb8(rgb: [u8; 3], alpha: f32) -> Self {
        Self {
            r: rgb[0] as f32 / 255.0,
            g: rgb[1] as f32 / 255.0,
            b: rgb[2] as f32 / 255.0,
            a: alpha,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One drawing primitive, in surface pixel coordinates (origin top-left)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    FillCircle {
        center: [f32; 2],
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        center: [f32; 2],
        radius: f32,
        width: f32,
        color: Rgba,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        width: f32,
        color: Rgba,
    },
    /// Soft halo that fades out over `blur` pixels beyond `radius`
    Glow {
        center: [f32; 2],
        radius: f32,
        blur: f32,
        color: Rgba,
    },
}

/// A full frame: the surface is cleared, then `shapes` are drawn in order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// Build the frame for `state`: rings, then pair links, then particles
pub fn compose(state: &FieldState) -> Scene {
    let mut shapes = Vec::with_capacity(
        state.waves.len() + state.pairs.len() * 2 + state.particles.len() * 3,
    );

    for wave in &state.waves {
        push_wave(&mut shapes, wave);
    }

    for pair in &state.pairs {
        push_link(&mut shapes, state, pair);
    }

    for particle in &state.particles {
        push_particle(&mut shapes, particle, state.time);
    }

    Scene { shapes }
}

fn push_wave(shapes: &mut Vec<Shape>, wave: &Wave) {
    if wave.radius <= 0.0 {
        return;
    }

    let alpha = (1.0 - wave.progress()) * WAVE_ALPHA;
    shapes.push(Shape::StrokeCircle {
        center: [wave.center_x, wave.center_y],
        radius: wave.radius,
        width: LINE_WIDTH,
        color: Rgba::from_rgb8(ENTANGLEMENT_RGB, alpha),
    });
}

fn push_link(shapes: &mut Vec<Shape>, state: &FieldState, pair: &EntangledPair) {
    let (a, b) = (&state.particles[pair.a], &state.particles[pair.b]);

    let alpha = link_alpha(pair.strength, state.time);
    shapes.push(Shape::Line {
        from: [a.x, a.y],
        to: [b.x, b.y],
        width: LINE_WIDTH,
        color: Rgba::from_rgb8(ENTANGLEMENT_RGB, alpha),
    });

    let t = pulse_position(state.time);
    shapes.push(Shape::FillCircle {
        center: [a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t],
        radius: PULSE_RADIUS,
        color: Rgba::from_rgb8(ENTANGLEMENT_RGB, alpha * 2.0),
    });
}

fn push_particle(shapes: &mut Vec<Shape>, particle: &Particle, time: f64) {
    let center = [particle.x, particle.y];

    if particle.entangled {
        shapes.push(Shape::Glow {
            center,
            radius: particle.radius,
            blur: GLOW_BLUR,
            color: Rgba::from_rgb8(GLOW_RGB, GLOW_ALPHA),
        });
    }

    shapes.push(Shape::FillCircle {
        center,
        radius: particle.radius,
        color: Rgba::from_rgb8(PARTICLE_RGB, 1.0),
    });

    if particle.entangled {
        let swing = ((time * SUPERPOSITION_RATE + particle.phase as f64).sin()) as f32;
        let alpha = SUPERPOSITION_ALPHA_BASE
            + (time * SUPERPOSITION_ALPHA_RATE).sin() as f32 * SUPERPOSITION_ALPHA_SWING;

        shapes.push(Shape::StrokeCircle {
            center,
            radius: particle.radius + SUPERPOSITION_OFFSET + swing * SUPERPOSITION_SWING,
            width: LINE_WIDTH,
            color: Rgba::from_rgb8(ENTANGLEMENT_RGB, alpha),
        });
    }
}

/// Opacity of a pair's connecting line at `time` (ms)
fn link_alpha(strength: f32, time: f64) -> f32 {
    strength * (LINK_ALPHA_BASE + (time * LINK_ALPHA_RATE).sin() as f32 * LINK_ALPHA_SWING)
}

/// Position of the pulse dot along a link, in [0, 1]
fn pulse_position(time: f64) -> f32 {
    (((time * PULSE_RATE).sin() + 1.0) * 0.5) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    fn field() -> FieldState {
        let mut rng = ChaChaRng::seed_from_u64(42);
        FieldState::new(&mut rng, 800.0, 600.0)
    }

    fn kind(shape: &Shape) -> &'static str {
        match shape {
            Shape::FillCircle { .. } => "fill",
            Shape::StrokeCircle { .. } => "stroke",
            Shape::Line { .. } => "line",
            Shape::Glow { .. } => "glow",
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let mut state = field();
        state.time = 12_345.0;
        for wave in &mut state.waves {
            wave.radius = 40.0;
        }
        let copy = state.clone();

        assert_eq!(compose(&state), compose(&copy));
    }

    #[test]
    fn test_fresh_waves_are_not_drawn() {
        let state = field();
        let scene = compose(&state);

        // 6 pairs * (line + pulse) + 12 entangled particles * (glow + fill + ring)
        assert_eq!(scene.len(), 6 * 2 + 12 * 3);
        assert_eq!(kind(&scene.shapes[0]), "line");
    }

    #[test]
    fn test_draw_order_back_to_front() {
        let mut state = field();
        for wave in &mut state.waves {
            wave.radius = 10.0;
        }
        let scene = compose(&state);
        let kinds: Vec<_> = scene.shapes.iter().map(kind).collect();

        assert_eq!(&kinds[..3], &["stroke", "stroke", "stroke"]);
        assert_eq!(&kinds[3..5], &["line", "fill"]);
        assert_eq!(&kinds[15..18], &["glow", "fill", "stroke"]);
        assert_eq!(kinds.len(), 3 + 12 + 36);
    }

    #[test]
    fn test_wave_opacity_fades_with_radius() {
        let mut state = field();
        state.waves.truncate(1);
        state.waves[0].max_radius = 200.0;
        state.waves[0].radius = 50.0;

        let scene = compose(&state);
        match scene.shapes[0] {
            Shape::StrokeCircle { radius, color, .. } => {
                assert_eq!(radius, 50.0);
                assert!((color.a - 0.075).abs() < 1e-6);
                assert_eq!(color, Rgba::from_rgb8(ENTANGLEMENT_RGB, color.a));
            }
            other => panic!("expected ring, got {:?}", other),
        }
    }

    #[test]
    fn test_link_and_pulse_at_time_zero() {
        let state = field();
        let pair = &state.pairs[0];
        let (a, b) = (&state.particles[pair.a], &state.particles[pair.b]);
        let scene = compose(&state);

        match (scene.shapes[0], scene.shapes[1]) {
            (
                Shape::Line { from, to, color, .. },
                Shape::FillCircle {
                    center,
                    radius,
                    color: pulse,
                },
            ) => {
                assert_eq!(from, [a.x, a.y]);
                assert_eq!(to, [b.x, b.y]);
                assert!((color.a - pair.strength * 0.2).abs() < 1e-6);
                assert!((pulse.a - color.a * 2.0).abs() < 1e-6);
                assert_eq!(radius, PULSE_RADIUS);
                assert!((center[0] - (a.x + b.x) / 2.0).abs() < 1e-3);
                assert!((center[1] - (a.y + b.y) / 2.0).abs() < 1e-3);
            }
            other => panic!("unexpected shapes {:?}", other),
        }
    }

    #[test]
    fn test_pulse_position_spans_segment() {
        for i in 0..1000 {
            let t = pulse_position(i as f64 * 7.3);
            assert!((0.0..=1.0).contains(&t));
        }
        // sin(π/2) = 1 at t = 785.398... ms
        assert!((pulse_position(std::f64::consts::FRAC_PI_2 / PULSE_RATE) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unentangled_particle_is_a_plain_dot() {
        let mut rng = ChaChaRng::seed_from_u64(2);
        let state = FieldState::with_particle_count(&mut rng, 1, 100.0, 100.0);
        let scene = compose(&state);

        assert_eq!(scene.len(), 1);
        assert_eq!(
            scene.shapes[0],
            Shape::FillCircle {
                center: [state.particles[0].x, state.particles[0].y],
                radius: state.particles[0].radius,
                color: Rgba::from_rgb8(PARTICLE_RGB, 1.0),
            }
        );
    }

    #[test]
    fn test_only_the_dot_glows() {
        let state = field();
        let scene = compose(&state);

        let glows: Vec<_> = scene
            .shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s, Shape::Glow { .. }))
            .collect();

        let entangled = state.particles.iter().filter(|p| p.entangled).count();
        assert_eq!(glows.len(), entangled);
        for (i, _) in glows {
            assert_eq!(kind(&scene.shapes[i + 1]), "fill");
            assert_eq!(kind(&scene.shapes[i + 2]), "stroke");
        }
    }

    #[test]
    fn test_superposition_ring_oscillates_around_offset() {
        let mut state = field();
        for step in 0..200 {
            state.time = step as f64 * 33.0;
            let scene = compose(&state);
            for (shape, particle) in scene
                .shapes
                .iter()
                .skip(state.pairs.len() * 2)
                .skip(2)
                .step_by(3)
                .zip(&state.particles)
            {
                match shape {
                    Shape::StrokeCircle { radius, color, .. } => {
                        let offset = radius - particle.radius;
                        assert!((1.0 - 1e-4..=5.0 + 1e-4).contains(&offset));
                        assert!((0.2 - 1e-6..=0.4 + 1e-6).contains(&color.a));
                    }
                    other => panic!("expected ring, got {:?}", other),
                }
            }
        }
    }
}
