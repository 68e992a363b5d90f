//! Pad value type: one step's effect parameters.

/// Effect parameters for a single pad in the grid.
///
/// All three fields are fractions in [0, 1]. A pad with every field at
/// zero carries no effect and is omitted from serialized state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pad {
    /// Effect gate / intensity (0.0 = off)
    pub gate: f32,
    /// Slice size as a fraction of the step duration
    pub size: f32,
    /// Dry/wet mix
    pub mix: f32,
}

impl Pad {
    /// Create a pad from its three parameters.
    pub const fn new(gate: f32, size: f32, mix: f32) -> Self {
        Self { gate, size, mix }
    }

    /// Create an empty pad (no effect).
    pub const fn empty() -> Self {
        Self { gate: 0.0, size: 0.0, mix: 0.0 }
    }

    /// Returns true if the pad carries no effect.
    pub fn is_empty(&self) -> bool {
        *self == Pad::empty()
    }

    /// Copy of this pad with every field clamped into [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            gate: self.gate.clamp(0.0, 1.0),
            size: self.size.clamp(0.0, 1.0),
            mix: self.mix.clamp(0.0, 1.0),
        }
    }
}
