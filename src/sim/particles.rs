//! Collision sparks
//!
//! Purely cosmetic. Bursts are spawned at collision sites and fade out on
//! their own; the live set is bounded only by how often collisions happen.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::consts::PARTICLE_SHRINK;

/// Append `count` sparks at `pos` with randomized size, velocity and decay
pub fn spawn<R: Rng>(particles: &mut Vec<Particle>, pos: Vec2, count: usize, rng: &mut R) {
    particles.reserve(count);
    for _ in 0..count {
        particles.push(Particle {
            pos,
            vel: Vec2::new(rng.random_range(-4.0..=4.0), rng.random_range(-4.0..=4.0)),
            radius: rng.random_range(2.0..=6.0),
            life: 1.0,
            decay: rng.random_range(0.01..=0.03),
        });
    }
}

/// Advance one spark by a tick
#[inline]
pub fn update_particle(particle: &mut Particle) {
    particle.pos += particle.vel;
    particle.life -= particle.decay;
    particle.radius *= PARTICLE_SHRINK;
}

#[inline]
pub fn is_expired(particle: &Particle) -> bool {
    particle.life <= 0.0
}

/// Advance every spark and drop the ones that burned out
pub fn update(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        update_particle(particle);
    }
    particles.retain(|p| !is_expired(p));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        spawn(&mut particles, Vec2::new(100.0, 50.0), 200, &mut rng);

        assert_eq!(particles.len(), 200);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(100.0, 50.0));
            assert_eq!(p.life, 1.0);
            assert!((2.0..=6.0).contains(&p.radius));
            assert!((-4.0..=4.0).contains(&p.vel.x));
            assert!((-4.0..=4.0).contains(&p.vel.y));
            assert!((0.01..=0.03).contains(&p.decay));
        }
    }

    #[test]
    fn test_update_particle() {
        let mut p = Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(2.0, -1.0),
            radius: 5.0,
            life: 1.0,
            decay: 0.25,
        };
        update_particle(&mut p);
        assert_eq!(p.pos, Vec2::new(12.0, 9.0));
        assert_eq!(p.life, 0.75);
        assert!((p.radius - 4.8).abs() < 1e-5);
        assert!(!is_expired(&p));
    }

    #[test]
    fn test_update_retires_dead_particles() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        spawn(&mut particles, Vec2::ZERO, 10, &mut rng);

        // Slowest decay is 0.01/tick, so everything is gone within 100 ticks
        for _ in 0..101 {
            update(&mut particles);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_life_zero_is_expired() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: 1.0,
            life: 0.0,
            decay: 0.01,
        };
        assert!(is_expired(&p));
    }
}
