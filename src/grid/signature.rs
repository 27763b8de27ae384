//! Rotation/reflection-invariant signatures of grid configurations.
//!
//! A signature groups the directions between every ordered pair of occupied cells by the
//! length of the separation. Because only differences of coordinates enter it, the signature is
//! already invariant under translation; the eight operations of the dihedral group act on it by
//! shifting (rotation) and mirroring (reflection) the direction angles, which leaves the length
//! buckets untouched.
//!
//! Angles are measured in half-turn units: `atan2(dy, dx) / π`, folded into `[0, 2)`.

use super::constants::{ANGLE_TOLERANCE, FULL_TURN, ROTATION_DELTAS};
use super::shape::GridConfiguration;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// All directions between occupied cells that are separated by one particular length.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureBucket {
    squared_length: u64,
    length: f64,
    angles: Vec<f64>,
}

impl SignatureBucket {
    /// The exact squared separation `dx² + dy²`, used as the bucket key.
    pub fn squared_length(&self) -> u64 {
        self.squared_length
    }

    /// The Euclidean separation as produced by `hypot`.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Direction angles in half-turn units, sorted ascending.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }
}

/// The canonical signature of a grid configuration.
///
/// Buckets are ordered by increasing separation.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSignature {
    buckets: Vec<SignatureBucket>,
}

impl CanonicalSignature {
    /// Returns the buckets in order of increasing separation.
    pub fn buckets(&self) -> &[SignatureBucket] {
        &self.buckets
    }

    /// Returns the number of ordered occupied-cell pairs the signature was built from.
    pub fn pair_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.angles.len()).sum()
    }

    /// Returns the bucket for the given squared separation, if present.
    pub fn bucket(&self, squared_length: u64) -> Option<&SignatureBucket> {
        self.buckets
            .binary_search_by_key(&squared_length, |bucket| bucket.squared_length)
            .ok()
            .map(|position| &self.buckets[position])
    }

    /// The separations present in the signature with the number of ordered pairs at each.
    ///
    /// Rotations and reflections only move angles within a bucket, so the profile is the same
    /// for every member of a symmetry class. Signatures with different profiles are never
    /// equivalent.
    pub fn length_profile(&self) -> Vec<(u64, usize)> {
        self.buckets
            .iter()
            .map(|bucket| (bucket.squared_length, bucket.angles.len()))
            .collect()
    }

    /// The signature under each of the eight dihedral operations, in `Transform::ALL` order.
    ///
    /// The first image is the signature itself.
    pub fn images(&self) -> Vec<CanonicalSignature> {
        Transform::ALL
            .into_iter()
            .map(|transform| self.transformed(transform))
            .collect()
    }

    /// Applies a symmetry operation to every bucket, re-sorting each angle list.
    pub fn transformed(&self, transform: Transform) -> CanonicalSignature {
        CanonicalSignature {
            buckets: self
                .buckets
                .iter()
                .map(|bucket| SignatureBucket {
                    squared_length: bucket.squared_length,
                    length: bucket.length,
                    angles: transform.apply(&bucket.angles),
                })
                .collect(),
        }
    }

    /// Compares two signatures bucket by bucket without applying any transform.
    ///
    /// Every length present in one signature must be present in the other with an angle list
    /// of equal length whose sorted values agree within `ANGLE_TOLERANCE`.
    pub fn matches(&self, other: &CanonicalSignature) -> bool {
        if self.buckets.len() != other.buckets.len() {
            return false;
        }
        self.buckets.iter().all(|bucket| {
            let Some(counterpart) = other.bucket(bucket.squared_length) else {
                return false;
            };
            bucket.angles.len() == counterpart.angles.len()
                && bucket
                    .angles
                    .iter()
                    .zip(&counterpart.angles)
                    .all(|(a, b)| (a - b).abs() <= ANGLE_TOLERANCE)
        })
    }
}

/// One operation of the dihedral group of the square lattice.
///
/// The reflection, when present, is applied before the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    reflected: bool,
    quarter_turns: u8,
}

impl Transform {
    /// The operation that leaves every angle unchanged.
    pub const IDENTITY: Transform = Transform {
        reflected: false,
        quarter_turns: 0,
    };

    /// The eight operations in the order they are tried: identity, the three rotations,
    /// the reflection, then the reflection combined with each rotation.
    pub const ALL: [Transform; 8] = [
        Transform::IDENTITY,
        Transform::rotation(1),
        Transform::rotation(2),
        Transform::rotation(3),
        Transform::reflection(0),
        Transform::reflection(1),
        Transform::reflection(2),
        Transform::reflection(3),
    ];

    /// A pure rotation by `quarter_turns` quarter turns (taken modulo four).
    pub const fn rotation(quarter_turns: u8) -> Self {
        Self {
            reflected: false,
            quarter_turns: quarter_turns % 4,
        }
    }

    /// The reflection followed by a rotation of `quarter_turns` quarter turns.
    pub const fn reflection(quarter_turns: u8) -> Self {
        Self {
            reflected: true,
            quarter_turns: quarter_turns % 4,
        }
    }

    /// Returns `true` if the operation includes the reflection.
    pub fn is_reflection(&self) -> bool {
        self.reflected
    }

    /// Returns the number of quarter turns applied after the optional reflection.
    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    /// The rotation angle in half-turn units.
    pub fn delta(&self) -> f64 {
        match self.quarter_turns {
            0 => 0.0,
            k => ROTATION_DELTAS[usize::from(k) - 1],
        }
    }

    /// Transforms a list of angles and returns it sorted ascending.
    pub fn apply(&self, angles: &[f64]) -> Vec<f64> {
        let delta = self.delta();
        let mut transformed: Vec<f64> = angles
            .iter()
            .map(|&angle| {
                let angle = if self.reflected {
                    reflect_angle(angle)
                } else {
                    angle
                };
                if self.quarter_turns == 0 {
                    angle
                } else {
                    rotate_angle(angle, delta)
                }
            })
            .collect();
        transformed.sort_by(f64::total_cmp);
        transformed
    }
}

/// Builds the canonical signature of a grid configuration.
///
/// Every ordered pair of distinct occupied cells contributes the direction from the first to
/// the second cell, where `dx` is the row offset and `dy` the column offset. Configurations
/// with fewer than two occupied cells have an empty signature.
pub fn canonicalize(config: &GridConfiguration) -> CanonicalSignature {
    let coords = config.occupied_coordinates();
    let mut buckets: BTreeMap<u64, SignatureBucket> = BTreeMap::new();

    for (i, &(row_i, col_i)) in coords.iter().enumerate() {
        for (j, &(row_j, col_j)) in coords.iter().enumerate() {
            if i == j {
                continue;
            }
            let dx = row_j as i64 - row_i as i64;
            let dy = col_j as i64 - col_i as i64;
            let squared_length = (dx * dx + dy * dy) as u64;
            let angle = fold_angle(libm::atan2(dy as f64, dx as f64) / PI);

            buckets
                .entry(squared_length)
                .or_insert_with(|| SignatureBucket {
                    squared_length,
                    length: libm::hypot(dx as f64, dy as f64),
                    angles: Vec::new(),
                })
                .angles
                .push(angle);
        }
    }

    let mut buckets: Vec<SignatureBucket> = buckets.into_values().collect();
    for bucket in &mut buckets {
        bucket.angles.sort_by(f64::total_cmp);
    }
    CanonicalSignature { buckets }
}

/// Returns `true` if `second` matches `first` under any of the eight dihedral operations.
pub fn is_equivalent(first: &CanonicalSignature, second: &CanonicalSignature) -> bool {
    equivalence_transform(first, second).is_some()
}

/// Returns the first dihedral operation that maps `second` onto `first`, if any.
pub fn equivalence_transform(
    first: &CanonicalSignature,
    second: &CanonicalSignature,
) -> Option<Transform> {
    if first.buckets.len() != second.buckets.len() || first.pair_count() != second.pair_count() {
        return None;
    }
    Transform::ALL
        .into_iter()
        .find(|&transform| first.matches(&second.transformed(transform)))
}

/// Folds a raw `atan2 / π` value from `(-1, 1]` into `[0, 2)`.
fn fold_angle(angle: f64) -> f64 {
    let folded = if angle < 0.0 { angle + FULL_TURN } else { angle };
    if folded >= FULL_TURN - ANGLE_TOLERANCE {
        0.0
    } else {
        folded
    }
}

fn rotate_angle(angle: f64, delta: f64) -> f64 {
    let rotated = angle + delta;
    if rotated >= FULL_TURN - ANGLE_TOLERANCE {
        (rotated - FULL_TURN).max(0.0)
    } else {
        rotated
    }
}

fn reflect_angle(angle: f64) -> f64 {
    let reflected = FULL_TURN - angle;
    if reflected >= FULL_TURN - ANGLE_TOLERANCE {
        0.0
    } else {
        reflected
    }
}
