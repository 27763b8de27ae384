//! Site layouts: how many slots each site offers and which species indices it accepts.

use super::state::Occupancy;
use crate::error::AdsorbError;

/// Capacity and species bound of a single adsorption site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiteSpec {
    /// The number of adsorbate slots physically available at the site.
    pub points: usize,
    /// The largest species index that may occupy a slot of the site (`0` means the site can
    /// only stay empty).
    pub max_species: u32,
}

/// The per-site capacities and species bounds that define an occupancy space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteLayout {
    points_per_site: Vec<usize>,
    adsorbate_per_site: Vec<u32>,
}

impl SiteLayout {
    /// Creates a layout from parallel capacity and species-bound vectors.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::InvalidSiteSpec` if the vectors differ in length or are empty.
    pub fn new(
        points_per_site: Vec<usize>,
        adsorbate_per_site: Vec<u32>,
    ) -> Result<Self, AdsorbError> {
        if points_per_site.len() != adsorbate_per_site.len() {
            return Err(AdsorbError::InvalidSiteSpec(format!(
                "points_per_site has {} entries but adsorbate_per_site has {}",
                points_per_site.len(),
                adsorbate_per_site.len()
            )));
        }
        if points_per_site.is_empty() {
            return Err(AdsorbError::InvalidSiteSpec(
                "at least one site is required".to_string(),
            ));
        }
        Ok(Self::from_parts_unchecked(
            points_per_site,
            adsorbate_per_site,
        ))
    }

    /// Creates a layout from a list of site specifications.
    pub fn from_specs(specs: &[SiteSpec]) -> Result<Self, AdsorbError> {
        Self::new(
            specs.iter().map(|spec| spec.points).collect(),
            specs.iter().map(|spec| spec.max_species).collect(),
        )
    }

    /// Derives a layout from per-slot site assignments and per-site species flags.
    ///
    /// `site_index` lists, for every slot, the site it belongs to; the capacity of site `i` is
    /// the number of times `i` appears. `adsorbate_index[i]` flags the species allowed at site
    /// `i`, and the species bound of the site is the sum of its flags.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::InvalidSiteSpec` if `site_index` is empty, if `adsorbate_index`
    /// does not have exactly one entry per site, or if the flags of a site sum past `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adsorb::SiteLayout;
    ///
    /// let layout = SiteLayout::from_site_index(&[0, 0, 1], &[vec![1, 1], vec![1, 0]]).unwrap();
    /// assert_eq!(layout.points_per_site(), &[2, 1]);
    /// assert_eq!(layout.adsorbate_per_site(), &[2, 1]);
    /// ```
    pub fn from_site_index(
        site_index: &[usize],
        adsorbate_index: &[Vec<u32>],
    ) -> Result<Self, AdsorbError> {
        let Some(&max_site) = site_index.iter().max() else {
            return Err(AdsorbError::InvalidSiteSpec(
                "site_index is empty".to_string(),
            ));
        };

        if adsorbate_index.len() != max_site.saturating_add(1) {
            return Err(AdsorbError::InvalidSiteSpec(format!(
                "site_index refers to site {} but adsorbate_index has {} entries",
                max_site,
                adsorbate_index.len()
            )));
        }

        let mut points_per_site = vec![0; adsorbate_index.len()];
        for &site in site_index {
            points_per_site[site] += 1;
        }
        let adsorbate_per_site = adsorbate_index
            .iter()
            .enumerate()
            .map(|(site, flags)| {
                flags
                    .iter()
                    .try_fold(0u32, |bound, &flag| bound.checked_add(flag))
                    .ok_or_else(|| {
                        AdsorbError::InvalidSiteSpec(format!(
                            "species flags of site {} sum past {}",
                            site,
                            u32::MAX
                        ))
                    })
            })
            .collect::<Result<Vec<u32>, AdsorbError>>()?;

        Self::new(points_per_site, adsorbate_per_site)
    }

    pub(crate) fn from_parts_unchecked(
        points_per_site: Vec<usize>,
        adsorbate_per_site: Vec<u32>,
    ) -> Self {
        Self {
            points_per_site,
            adsorbate_per_site,
        }
    }

    /// Returns the slot capacity of every site.
    pub fn points_per_site(&self) -> &[usize] {
        &self.points_per_site
    }

    /// Returns the largest species index allowed at every site.
    pub fn adsorbate_per_site(&self) -> &[u32] {
        &self.adsorbate_per_site
    }

    /// Returns the number of sites, zero-capacity sites included.
    pub fn site_count(&self) -> usize {
        self.points_per_site.len()
    }

    /// Returns the capacity and species bound of site `index`.
    pub fn site(&self, index: usize) -> SiteSpec {
        SiteSpec {
            points: self.points_per_site[index],
            max_species: self.adsorbate_per_site[index],
        }
    }

    /// Iterates over the capacity and species bound of every site in site order.
    pub fn sites(&self) -> impl Iterator<Item = SiteSpec> + '_ {
        (0..self.site_count()).map(|index| self.site(index))
    }

    /// Total number of slots over all sites.
    pub fn total_slots(&self) -> usize {
        self.points_per_site.iter().sum()
    }

    /// The largest species index any slot may hold.
    ///
    /// Sites without slots cannot hold anything and do not contribute.
    pub fn max_species_index(&self) -> u32 {
        self.sites()
            .filter(|spec| spec.points > 0)
            .map(|spec| spec.max_species)
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if the occupancy has this layout's shape and every slot value is within
    /// the bound of its site.
    pub fn contains(&self, occupancy: &Occupancy) -> bool {
        occupancy.site_count() == self.site_count()
            && occupancy
                .sites()
                .iter()
                .zip(self.sites())
                .all(|(slots, spec)| {
                    slots.len() == spec.points && slots.iter().all(|&v| v <= spec.max_species)
                })
    }

    /// Ensures the occupancy belongs to this layout.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::InvalidSiteSpec` otherwise.
    pub fn check(&self, occupancy: &Occupancy) -> Result<(), AdsorbError> {
        if self.contains(occupancy) {
            Ok(())
        } else {
            Err(AdsorbError::InvalidSiteSpec(format!(
                "occupancy {} does not fit layout points={:?} bounds={:?}",
                occupancy, self.points_per_site, self.adsorbate_per_site
            )))
        }
    }

    /// Distance between two occupancies of this layout, validating both first.
    pub fn distance(&self, a: &Occupancy, b: &Occupancy) -> Result<usize, AdsorbError> {
        self.check(a)?;
        self.check(b)?;
        Ok(a.site_distance_sum(b))
    }

    /// The exact number of occupancies the odometer visits for this layout.
    ///
    /// Each site contributes the number of multisets of size `points` drawn from the
    /// `max_species + 1` values `0..=max_species`. The product saturates at `usize::MAX`.
    pub fn configuration_count(&self) -> usize {
        self.sites()
            .map(|spec| multiset_count(spec.points, spec.max_species))
            .fold(1usize, usize::saturating_mul)
    }
}

/// `C(points + max_species, points)`, saturating at `usize::MAX`.
fn multiset_count(points: usize, max_species: u32) -> usize {
    let kinds = max_species as u128;
    let mut count: u128 = 1;
    // C(points + kinds, points) built incrementally; each partial product is an integer.
    for i in 1..=points as u128 {
        count = count * (kinds + i) / i;
        if count > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    count as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = SiteLayout::new(vec![1, 2], vec![1]);
        assert!(matches!(result, Err(AdsorbError::InvalidSiteSpec(_))));
    }

    #[test]
    fn test_new_rejects_empty_layout() {
        let result = SiteLayout::new(vec![], vec![]);
        assert!(matches!(result, Err(AdsorbError::InvalidSiteSpec(_))));
    }

    #[test]
    fn test_from_specs() {
        let layout = SiteLayout::from_specs(&[
            SiteSpec {
                points: 2,
                max_species: 2,
            },
            SiteSpec {
                points: 2,
                max_species: 1,
            },
        ])
        .unwrap();
        assert_eq!(layout.points_per_site(), &[2, 2]);
        assert_eq!(layout.adsorbate_per_site(), &[2, 1]);
        assert_eq!(layout.total_slots(), 4);
        assert_eq!(layout.max_species_index(), 2);
    }

    #[test]
    fn test_from_site_index_counts_points_and_sums_flags() {
        let layout = SiteLayout::from_site_index(
            &[0, 0, 1, 1, 2],
            &[vec![1, 1, 0], vec![1, 0, 0], vec![1, 1, 1]],
        )
        .unwrap();
        assert_eq!(layout.points_per_site(), &[2, 2, 1]);
        assert_eq!(layout.adsorbate_per_site(), &[2, 1, 3]);
    }

    #[test]
    fn test_from_site_index_rejects_inconsistent_inputs() {
        assert!(SiteLayout::from_site_index(&[], &[]).is_err());
        assert!(SiteLayout::from_site_index(&[0, 1], &[vec![1]]).is_err());
        assert!(SiteLayout::from_site_index(&[0], &[vec![1], vec![1]]).is_err());
        assert!(SiteLayout::from_site_index(&[0, usize::MAX], &[vec![1]]).is_err());
    }

    #[test]
    fn test_from_site_index_rejects_overflowing_flags() {
        let result = SiteLayout::from_site_index(&[0, 1], &[vec![1], vec![u32::MAX, 1]]);
        assert!(matches!(
            result,
            Err(AdsorbError::InvalidSiteSpec(message)) if message.contains("site 1")
        ));

        let layout = SiteLayout::from_site_index(&[0], &[vec![u32::MAX - 1, 1]]).unwrap();
        assert_eq!(layout.adsorbate_per_site(), &[u32::MAX]);
    }

    #[test]
    fn test_from_site_index_allows_unused_site() {
        let layout = SiteLayout::from_site_index(&[1], &[vec![1], vec![1]]).unwrap();
        assert_eq!(layout.points_per_site(), &[0, 1]);
        assert_eq!(layout.max_species_index(), 1);
    }

    #[test]
    fn test_contains_checks_shape_and_bounds() {
        let layout = SiteLayout::new(vec![2, 1], vec![2, 1]).unwrap();
        assert!(layout.contains(&Occupancy::from_slots(vec![vec![0, 2], vec![1]])));
        assert!(!layout.contains(&Occupancy::from_slots(vec![vec![0, 3], vec![1]])));
        assert!(!layout.contains(&Occupancy::from_slots(vec![vec![0], vec![1]])));
        assert!(!layout.contains(&Occupancy::from_slots(vec![vec![0, 0]])));
    }

    #[test]
    fn test_multiset_count() {
        assert_eq!(multiset_count(1, 1), 2);
        assert_eq!(multiset_count(2, 2), 6);
        assert_eq!(multiset_count(4, 2), 15);
        assert_eq!(multiset_count(0, 5), 1);
        assert_eq!(multiset_count(3, 0), 1);
    }

    #[test]
    fn test_configuration_count_is_product() {
        let layout = SiteLayout::new(vec![2, 2], vec![2, 1]).unwrap();
        assert_eq!(layout.configuration_count(), 6 * 3);
    }

    #[test]
    fn test_configuration_count_saturates() {
        let layout = SiteLayout::new(vec![400; 8], vec![400; 8]).unwrap();
        assert_eq!(layout.configuration_count(), usize::MAX);
    }
}
