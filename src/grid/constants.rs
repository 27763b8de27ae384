//! This module defines the angular constants used by grid signatures.
//!
//! Directions between cells are measured in half-turn units (`atan2 / π`), so a full turn is
//! `2.0` and the quarter-turn rotations of the square lattice are exact multiples of `0.5`.

/// One full turn expressed in the half-turn units used by canonical signatures.
pub const FULL_TURN: f64 = 2.0;

/// The three non-trivial rotations of the square lattice, in half-turn units.
pub const ROTATION_DELTAS: [f64; 3] = [0.5, 1.0, 1.5];

/// Absolute tolerance when comparing signature angles.
///
/// Rotated angles are computed by addition and may differ from direct `atan2` values in the
/// last bits.
pub const ANGLE_TOLERANCE: f64 = 1.0e-9;
