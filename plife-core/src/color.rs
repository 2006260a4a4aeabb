/// Number of distinct particle colors.
pub const COLOR_COUNT: usize = 3;

/// The color of a particle, fixed at creation.
///
/// This is a closed set: every variant is a valid row/column of the
/// rule matrix, so coefficient lookups are total. The background/clear
/// color of the viewer is deliberately not a variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleColor {
    Red,
    Green,
    Blue,
}

impl ParticleColor {
    /// All colors, in spawn and matrix-index order.
    pub const ALL: [ParticleColor; COLOR_COUNT] = [
        ParticleColor::Red,
        ParticleColor::Green,
        ParticleColor::Blue,
    ];

    /// Index of this color into rule-matrix rows and columns.
    pub fn index(self) -> usize {
        self as usize
    }
}
