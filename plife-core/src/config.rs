#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Side length of the square canvas, in world units.
    pub canvas_size: f64,
    /// Particles spawned per color at startup.
    pub particles_per_color: usize,
    /// Pairs farther apart than this (truncated integer distance) exert no force.
    pub interaction_radius: i32,
    /// Per-tick velocity retention factor.
    pub energy_keep: f64,
    /// Velocity retention magnitude on wall hits; the sign flip is applied by the engine.
    pub wall_keep: f64,
    /// Inclusive lower bound for randomized rule coefficients.
    pub rule_min: i32,
    /// Exclusive upper bound for randomized rule coefficients.
    pub rule_max: i32,
    /// Divisor applied to rule coefficients in the pair force formula.
    pub rule_scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_size: 1000.0,
            particles_per_color: 200,
            interaction_radius: 180,
            energy_keep: 0.99999999,
            wall_keep: 0.5,
            rule_min: -5,
            rule_max: 5,
            rule_scale: 1000.0,
        }
    }
}
