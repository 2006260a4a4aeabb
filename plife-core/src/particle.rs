use crate::color::{COLOR_COUNT, ParticleColor};
use crate::config::Config;
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub color: ParticleColor,
}

impl Particle {
    pub fn at_rest(pos: DVec2, color: ParticleColor) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            color,
        }
    }
}

#[derive(Debug)]
pub struct ParticleSet {
    pub points: Vec<Particle>,
}

impl ParticleSet {
    pub fn from_particles(points: Vec<Particle>) -> Self {
        Self { points }
    }

    /// Spawns the startup population: `cfg.particles_per_color` particles of
    /// each color, one color block after another in [`ParticleColor::ALL`]
    /// order, positions uniform over the canvas, velocities zero.
    ///
    /// The set never grows or shrinks afterwards; the engine only rewrites
    /// positions and velocities in place.
    pub fn spawn_uniform(cfg: &Config, rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(cfg.particles_per_color * COLOR_COUNT);
        for color in ParticleColor::ALL {
            for _ in 0..cfg.particles_per_color {
                let x = rng.random_range(0.0..cfg.canvas_size);
                let y = rng.random_range(0.0..cfg.canvas_size);
                points.push(Particle::at_rest(DVec2::new(x, y), color));
            }
        }

        Self::from_particles(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spawn_uniform_builds_color_blocks_in_order() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(3);
        let set = ParticleSet::spawn_uniform(&cfg, &mut rng);

        assert_eq!(set.points.len(), cfg.particles_per_color * COLOR_COUNT);

        // Particles come out grouped: all Red first, then Green, then Blue.
        for (i, p) in set.points.iter().enumerate() {
            let expected = ParticleColor::ALL[i / cfg.particles_per_color];
            assert_eq!(p.color, expected, "particle {i} has the wrong color");
        }
    }

    #[test]
    fn spawn_uniform_places_particles_on_the_canvas_at_rest() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(4);
        let set = ParticleSet::spawn_uniform(&cfg, &mut rng);

        for p in &set.points {
            assert!(p.pos.x >= 0.0 && p.pos.x < cfg.canvas_size);
            assert!(p.pos.y >= 0.0 && p.pos.y < cfg.canvas_size);
            assert_eq!(p.vel, DVec2::ZERO);
        }
    }
}
