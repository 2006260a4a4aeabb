use crate::color::{COLOR_COUNT, ParticleColor};
use rand::Rng;

/// The square table of interaction coefficients driving the simulation.
///
/// `coefficient(source, target)` is the signed force-magnitude contributor
/// that a particle of `target` color exerts on a particle of `source`
/// color. The table is intentionally not symmetric: Red can attract Green
/// strongly while Green repels Red weakly, and that asymmetry is what
/// produces most of the emergent motion.
///
/// Entries are small integers stored as `f64` so the force math stays in
/// floating point. Negative coefficients attract, positive ones repel (the
/// engine multiplies by the displacement pointing away from the other
/// particle).
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMatrix {
    coeffs: [[f64; COLOR_COUNT]; COLOR_COUNT],
}

impl RuleMatrix {
    /// Creates a fully populated all-zero matrix.
    pub fn zeroed() -> Self {
        Self {
            coeffs: [[0.0; COLOR_COUNT]; COLOR_COUNT],
        }
    }

    /// Overwrites every entry with an independent uniform-random integer in
    /// `[min, max)`.
    ///
    /// The whole table is reassigned in one call; partial regeneration never
    /// happens, and the new table is in effect for the very next step.
    /// Entries are visited row by row in [`ParticleColor::ALL`] order, so a
    /// seeded rng reproduces the same matrix.
    ///
    /// ### Parameters
    /// - `min` - Inclusive lower bound of the coefficient range.
    /// - `max` - Exclusive upper bound of the coefficient range.
    /// - `rng` - Source of randomness.
    pub fn randomize(&mut self, min: i32, max: i32, rng: &mut impl Rng) {
        for row in &mut self.coeffs {
            for entry in row {
                *entry = f64::from(rng.random_range(min..max));
            }
        }
    }

    /// Looks up the coefficient applied to `source`-colored particles by
    /// `target`-colored ones. Pure and total over the closed color set.
    pub fn coefficient(&self, source: ParticleColor, target: ParticleColor) -> f64 {
        self.coeffs[source.index()][target.index()]
    }

    /// Sets a single entry. The running simulation only ever regenerates the
    /// table wholesale; this is for assembling explicit scenarios.
    pub fn set(&mut self, source: ParticleColor, target: ParticleColor, value: f64) {
        self.coeffs[source.index()][target.index()] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zeroed_matrix_has_all_zero_coefficients() {
        let rules = RuleMatrix::zeroed();
        for source in ParticleColor::ALL {
            for target in ParticleColor::ALL {
                assert_eq!(rules.coefficient(source, target), 0.0);
            }
        }
    }

    #[test]
    fn randomize_fills_integers_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rules = RuleMatrix::zeroed();
        rules.randomize(-5, 5, &mut rng);

        for source in ParticleColor::ALL {
            for target in ParticleColor::ALL {
                let c = rules.coefficient(source, target);
                assert!((-5.0..5.0).contains(&c), "coefficient out of range: {c}");
                assert_eq!(c, c.trunc(), "coefficient should be an integer: {c}");
            }
        }
    }

    #[test]
    fn randomize_overwrites_the_whole_table() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut rules = RuleMatrix::zeroed();
        rules.randomize(-5, 5, &mut rng);
        let first = rules.clone();

        // One reroll could in principle reproduce all nine entries; a few
        // tries make the flake probability negligible.
        let mut changed = false;
        for _ in 0..8 {
            rules.randomize(-5, 5, &mut rng);
            if rules != first {
                changed = true;
                break;
            }
        }
        assert!(changed, "regeneration never produced a different matrix");
    }

    #[test]
    fn coefficient_lookup_is_directional() {
        let mut rules = RuleMatrix::zeroed();
        rules.set(ParticleColor::Red, ParticleColor::Green, -5.0);

        assert_eq!(
            rules.coefficient(ParticleColor::Red, ParticleColor::Green),
            -5.0
        );
        // The reverse direction stays independent.
        assert_eq!(
            rules.coefficient(ParticleColor::Green, ParticleColor::Red),
            0.0
        );
    }
}
