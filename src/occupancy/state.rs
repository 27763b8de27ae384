//! Occupancies: one species index per slot of every site.

use crate::types::Configuration;
use std::collections::HashMap;
use std::fmt;

/// One full assignment of species indices to every slot of every site.
///
/// Slot `j` of site `i` holds `0` for an empty slot or `k > 0` for species `k`. Slot order
/// within a site carries no physical meaning, so comparisons between occupancies are made on
/// the per-site multisets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occupancy {
    slots: Vec<Vec<u32>>,
}

impl Occupancy {
    /// Creates an occupancy from per-site slot vectors.
    ///
    /// No layout is attached; use `SiteLayout::check` to validate the occupancy against one.
    pub fn from_slots(slots: Vec<Vec<u32>>) -> Self {
        Self { slots }
    }

    /// The all-empty occupancy for the given per-site capacities.
    pub fn empty(points_per_site: &[usize]) -> Self {
        Self {
            slots: points_per_site.iter().map(|&points| vec![0; points]).collect(),
        }
    }

    /// Returns the slot vectors of all sites in site order.
    pub fn sites(&self) -> &[Vec<u32>] {
        &self.slots
    }

    /// Returns the slot vector of site `index`.
    pub fn site(&self, index: usize) -> &[u32] {
        &self.slots[index]
    }

    pub(crate) fn site_mut(&mut self, index: usize) -> &mut Vec<u32> {
        &mut self.slots[index]
    }

    /// Returns the number of sites.
    pub fn site_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a species.
    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().flatten().filter(|&&value| value != 0).count()
    }

    /// Consumes the occupancy and returns its slot vectors.
    pub fn into_slots(self) -> Vec<Vec<u32>> {
        self.slots
    }

    pub(crate) fn site_distance_sum(&self, other: &Occupancy) -> usize {
        self.slots
            .iter()
            .zip(&other.slots)
            .map(|(a, b)| unmatched_slots(a, b))
            .sum()
    }
}

impl Configuration for Occupancy {
    /// Sums, over all sites, the slots of `self` that find no partner of equal value among the
    /// slots of `other` at the same site.
    fn distance(&self, other: &Self) -> usize {
        self.site_distance_sum(other)
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, site) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", site)?;
        }
        write!(f, "]")
    }
}

/// Counts the values of `a` that cannot be matched against a distinct value of `b`.
///
/// Each value of `b` can absorb at most one equal value of `a`. For slot vectors of equal
/// length this equals half the size of the multiset symmetric difference.
fn unmatched_slots(a: &[u32], b: &[u32]) -> usize {
    let mut available: HashMap<u32, usize> = HashMap::with_capacity(b.len());
    for &value in b {
        *available.entry(value).or_insert(0) += 1;
    }

    a.iter()
        .filter(|&&value| match available.get_mut(&value) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(slots: &[&[u32]]) -> Occupancy {
        Occupancy::from_slots(slots.iter().map(|s| s.to_vec()).collect())
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = occ(&[&[0, 1, 2], &[1]]);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_distance_ignores_slot_order() {
        let a = occ(&[&[0, 1, 2]]);
        let b = occ(&[&[2, 0, 1]]);
        assert_eq!(a.distance(&b), 0);
    }

    #[test]
    fn test_distance_counts_unmatched_values() {
        let a = occ(&[&[0, 0], &[1, 1]]);
        let b = occ(&[&[0, 1], &[0, 0]]);
        assert_eq!(a.distance(&b), 3);
        assert_eq!(b.distance(&a), 3);
    }

    #[test]
    fn test_duplicate_values_match_once() {
        let a = occ(&[&[1, 1, 1]]);
        let b = occ(&[&[1, 0, 0]]);
        assert_eq!(a.distance(&b), 2);
        assert_eq!(b.distance(&a), 2);
    }

    #[test]
    fn test_sites_are_compared_independently() {
        // Same overall multiset, different sites.
        let a = occ(&[&[1], &[0]]);
        let b = occ(&[&[0], &[1]]);
        assert_eq!(a.distance(&b), 2);
    }

    #[test]
    fn test_empty_and_display() {
        let empty = Occupancy::empty(&[2, 0, 1]);
        assert_eq!(empty.sites().to_vec(), vec![vec![0u32, 0], vec![], vec![0]]);
        assert_eq!(empty.occupied_slots(), 0);
        assert_eq!(empty.to_string(), "[[0, 0], [], [0]]");
    }
}
