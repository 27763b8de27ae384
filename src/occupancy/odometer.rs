//! Sequential generation of every occupancy of a site layout.
//!
//! The odometer treats an occupancy as a row of per-site wheels. Advancing turns the wheel of
//! the last site; when that wheel rolls over it is reset to all-empty and the carry moves to the
//! previous site. The sequence ends when the carry passes the first site.
//!
//! Within a site the slots form a counter whose last slot turns fastest. Whenever a slot is
//! incremented, every later slot of the same site is set to the new value. A site therefore only
//! ever holds a non-decreasing slot vector, which visits each multiset of species exactly once
//! instead of every permutation of it.

use super::layout::SiteLayout;
use super::state::Occupancy;

/// A stateless stepping function over the occupancies of a layout.
#[derive(Debug, Clone, Copy)]
pub struct Odometer<'l> {
    layout: &'l SiteLayout,
}

impl<'l> Odometer<'l> {
    /// Creates an odometer over the occupancies of `layout`.
    pub fn new(layout: &'l SiteLayout) -> Self {
        Self { layout }
    }

    /// Returns the layout the odometer steps through.
    pub fn layout(&self) -> &'l SiteLayout {
        self.layout
    }

    /// The first occupancy of the sequence: every slot empty.
    pub fn start(&self) -> Occupancy {
        Occupancy::empty(self.layout.points_per_site())
    }

    /// Returns the occupancy following `state`, or `None` if `state` is the last one.
    ///
    /// `state` is expected to belong to the odometer's layout and to hold non-decreasing slot
    /// vectors, as every occupancy produced by the odometer does.
    pub fn advance(&self, state: &Occupancy) -> Option<Occupancy> {
        let mut next = state.clone();
        for site in (0..self.layout.site_count()).rev() {
            let bound = self.layout.adsorbate_per_site()[site];
            if advance_site(next.site_mut(site), bound) {
                return Some(next);
            }
        }
        None
    }

    /// Returns a fresh iterator over the whole sequence.
    ///
    /// Every call starts again from the all-empty occupancy.
    ///
    /// # Examples
    ///
    /// ```
    /// use adsorb::{Odometer, SiteLayout};
    ///
    /// let layout = SiteLayout::new(vec![1], vec![1]).unwrap();
    /// let odometer = Odometer::new(&layout);
    /// assert_eq!(odometer.iter().count(), 2);
    /// assert_eq!(odometer.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> OccupancyIter<'l> {
        OccupancyIter {
            odometer: *self,
            cursor: Cursor::Start,
            yielded: 0,
        }
    }
}

impl<'l> IntoIterator for Odometer<'l> {
    type Item = Occupancy;
    type IntoIter = OccupancyIter<'l>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Advances one site's slot vector in place.
///
/// Returns `false` on a carry out of the site, in which case the slots have been reset to zero.
fn advance_site(slots: &mut [u32], bound: u32) -> bool {
    for i in (0..slots.len()).rev() {
        if slots[i] < bound {
            let value = slots[i] + 1;
            slots[i..].fill(value);
            return true;
        }
        slots[i] = 0;
    }
    false
}

#[derive(Debug, Clone)]
enum Cursor {
    /// Nothing yielded yet; the next item is the all-empty occupancy.
    Start,
    At(Occupancy),
    Exhausted,
}

/// Iterator over the occupancies of a layout, in odometer order.
#[derive(Debug, Clone)]
pub struct OccupancyIter<'l> {
    odometer: Odometer<'l>,
    cursor: Cursor,
    yielded: usize,
}

impl Iterator for OccupancyIter<'_> {
    type Item = Occupancy;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &self.cursor {
            Cursor::Start => Some(self.odometer.start()),
            Cursor::At(state) => self.odometer.advance(state),
            Cursor::Exhausted => None,
        };

        match next {
            Some(state) => {
                self.cursor = Cursor::At(state.clone());
                self.yielded += 1;
                Some(state)
            }
            None => {
                self.cursor = Cursor::Exhausted;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if matches!(self.cursor, Cursor::Exhausted) {
            return (0, Some(0));
        }
        let total = self.odometer.layout.configuration_count();
        if total == usize::MAX {
            return (0, None);
        }
        let remaining = total.saturating_sub(self.yielded);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(points: Vec<usize>, bounds: Vec<u32>) -> SiteLayout {
        SiteLayout::new(points, bounds).unwrap()
    }

    fn slots(occupancies: &[Occupancy]) -> Vec<Vec<Vec<u32>>> {
        occupancies.iter().map(|o| o.sites().to_vec()).collect()
    }

    #[test]
    fn test_single_slot_single_species() {
        let layout = layout(vec![1], vec![1]);
        let all: Vec<Occupancy> = Odometer::new(&layout).iter().collect();
        assert_eq!(slots(&all), vec![vec![vec![0u32]], vec![vec![1]]]);
    }

    #[test]
    fn test_site_visits_multisets_in_order() {
        let layout = layout(vec![2], vec![2]);
        let all: Vec<Occupancy> = Odometer::new(&layout).iter().collect();
        let expected: Vec<Vec<Vec<u32>>> = vec![
            vec![vec![0, 0]],
            vec![vec![0, 1]],
            vec![vec![0, 2]],
            vec![vec![1, 1]],
            vec![vec![1, 2]],
            vec![vec![2, 2]],
        ];
        assert_eq!(slots(&all), expected);
    }

    #[test]
    fn test_last_site_turns_fastest() {
        let layout = layout(vec![1, 1], vec![1, 1]);
        let all: Vec<Occupancy> = Odometer::new(&layout).iter().collect();
        let expected: Vec<Vec<Vec<u32>>> = vec![
            vec![vec![0], vec![0]],
            vec![vec![0], vec![1]],
            vec![vec![1], vec![0]],
            vec![vec![1], vec![1]],
        ];
        assert_eq!(slots(&all), expected);
    }

    #[test]
    fn test_count_matches_configuration_count() {
        for (points, bounds) in [
            (vec![2, 2], vec![2, 1]),
            (vec![4], vec![2]),
            (vec![2, 2, 1], vec![2, 1, 3]),
            (vec![1, 4, 1], vec![3, 4, 4]),
        ] {
            let layout = layout(points, bounds);
            let iter = Odometer::new(&layout).iter();
            assert_eq!(iter.size_hint().0, layout.configuration_count());
            assert_eq!(iter.count(), layout.configuration_count());
        }
    }

    #[test]
    fn test_every_occupancy_fits_layout_and_is_unique() {
        let layout = layout(vec![2, 3], vec![2, 1]);
        let all: Vec<Occupancy> = Odometer::new(&layout).iter().collect();
        for (i, a) in all.iter().enumerate() {
            assert!(layout.contains(a));
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_zero_capacity_site_is_skipped() {
        let layout = layout(vec![0, 1], vec![1, 1]);
        let all: Vec<Occupancy> = Odometer::new(&layout).iter().collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].site(0), &[] as &[u32]);
    }

    #[test]
    fn test_zero_bound_site_stays_empty() {
        let layout = layout(vec![2], vec![0]);
        let all: Vec<Occupancy> = Odometer::new(&layout).iter().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].occupied_slots(), 0);
    }

    #[test]
    fn test_advance_is_pure() {
        let layout = layout(vec![2], vec![1]);
        let odometer = Odometer::new(&layout);
        let start = odometer.start();
        let first = odometer.advance(&start).unwrap();
        let again = odometer.advance(&start).unwrap();
        assert_eq!(first, again);
        assert_eq!(start.site(0), &[0, 0]);
        assert_eq!(first.site(0), &[0, 1]);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let layout = layout(vec![2, 1], vec![1, 2]);
        let odometer = Odometer::new(&layout);
        let first: Vec<Occupancy> = odometer.iter().collect();
        let second: Vec<Occupancy> = odometer.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhausted_iterator_stays_exhausted() {
        let layout = layout(vec![1], vec![1]);
        let mut iter = Odometer::new(&layout).iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }
}
