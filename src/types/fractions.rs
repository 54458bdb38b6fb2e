//! Normalized fraction newtypes.
//!
//! These types prevent mixing up the two normalized coordinates that appear
//! throughout the wing definition: spanwise fraction and chordwise fraction.

use std::fmt;

/// Normalized spanwise coordinate: 0 at the root, 1 at the tip.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Eta(f64);

impl Eta {
    /// Create a spanwise fraction.
    ///
    /// Debug builds assert the value is in [0, 1].
    pub fn new(value: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&value),
            "Eta must be in [0, 1], got {}",
            value
        );
        Self(value)
    }

    /// The raw fraction.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "eta={}", self.0)
    }
}

/// Normalized chordwise coordinate: 0 at the leading edge, 1 at the trailing edge.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct ChordFraction(f64);

impl ChordFraction {
    /// Create a chordwise fraction.
    ///
    /// Debug builds assert the value is in [0, 1].
    pub fn new(value: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&value),
            "ChordFraction must be in [0, 1], got {}",
            value
        );
        Self(value)
    }

    /// The raw fraction.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ChordFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x/c={}", self.0)
    }
}
