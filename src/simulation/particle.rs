use rand::Rng;

use crate::config::{
    PAIR_STRENGTH_MIN, PAIR_STRENGTH_SPAN, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN,
    PHASE_RANGE, VELOCITY_SPREAD,
};

/// A drifting point in the field.
///
/// Partners are stored as indices into the owning particle list, so a pair
/// never forms an ownership cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    /// Radians in [0, 2π) at creation; rewritten by anti-correlation
    pub phase: f32,
    pub entangled: bool,
    pub partner: Option<usize>,
    /// Cleared on every step; nothing currently sets it
    pub measured: bool,
}

impl Particle {
    /// Create an unentangled particle at a random position inside `width` x `height`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen::<f32>() * width,
            y: rng.gen::<f32>() * height,
            vx: (rng.gen::<f32>() - 0.5) * VELOCITY_SPREAD,
            vy: (rng.gen::<f32>() - 0.5) * VELOCITY_SPREAD,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            phase: rng.gen::<f32>() * PHASE_RANGE,
            entangled: false,
            partner: None,
            measured: false,
        }
    }
}

/// Two linked particles, addressed by their index in the particle list
#[derive(Clone, Debug, PartialEq)]
pub struct EntangledPair {
    pub a: usize,
    pub b: usize,
    /// Link opacity multiplier in [0.7, 1.0)
    pub strength: f32,
    #[allow(dead_code)]
    pub phase: f32,
}

impl EntangledPair {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            strength: PAIR_STRENGTH_MIN + rng.gen::<f32>() * PAIR_STRENGTH_SPAN,
            phase: rng.gen::<f32>() * PHASE_RANGE,
        }
    }
}

/// Link consecutive particles (0-1, 2-3, ...) and return the resulting pairs.
///
/// Both members are marked entangled and point at each other. With an odd
/// count the last particle stays free.
pub fn entangle_consecutive<R: Rng + ?Sized>(
    rng: &mut R,
    particles: &mut [Particle],
) -> Vec<EntangledPair> {
    let mut pairs = Vec::with_capacity(particles.len() / 2);

    for a in (0..particles.len()).step_by(2) {
        let b = a + 1;
        if b >= particles.len() {
            break;
        }

        particles[a].entangled = true;
        particles[a].partner = Some(b);
        particles[b].entangled = true;
        particles[b].partner = Some(a);

        pairs.push(EntangledPair::random(rng, a, b));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn test_random_particle_ranges() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0);
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!((-0.25..=0.25).contains(&p.vx));
            assert!((-0.25..=0.25).contains(&p.vy));
            assert!((3.0..=5.0).contains(&p.radius));
            assert!((0.0..=PHASE_RANGE).contains(&p.phase));
            assert!(!p.entangled);
            assert!(p.partner.is_none());
            assert!(!p.measured);
        }
    }

    #[test]
    fn test_zero_sized_surface_does_not_panic() {
        let mut rng = ChaChaRng::seed_from_u64(1);
        let p = Particle::random(&mut rng, 0.0, 0.0);
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn test_entangle_links_are_symmetric() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        let mut particles: Vec<_> = (0..12)
            .map(|_| Particle::random(&mut rng, 100.0, 100.0))
            .collect();

        let pairs = entangle_consecutive(&mut rng, &mut particles);

        assert_eq!(pairs.len(), 6);
        for (i, p) in particles.iter().enumerate() {
            let partner = p.partner.expect("every particle is paired");
            assert_eq!(particles[partner].partner, Some(i));
            assert!(p.entangled);
        }
        for pair in &pairs {
            assert_eq!(pair.b, pair.a + 1);
            assert!((0.7..=1.0).contains(&pair.strength));
        }
    }

    #[test]
    fn test_odd_count_leaves_last_free() {
        let mut rng = ChaChaRng::seed_from_u64(3);
        let mut particles: Vec<_> = (0..13)
            .map(|_| Particle::random(&mut rng, 100.0, 100.0))
            .collect();

        let pairs = entangle_consecutive(&mut rng, &mut particles);

        assert_eq!(pairs.len(), 6);
        let last = &particles[12];
        assert!(!last.entangled);
        assert!(last.partner.is_none());
    }
}
