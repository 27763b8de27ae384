mod common;

use adsorb::{
    AdsorbError, Configuration, GraphBuilder, GraphOptions, Label, Occupancy, Odometer,
    SiteLayout, SymbolTable, select_site_representatives, select_sites,
};
use common::{adsorbate, brute_force_degrees};
use std::collections::BTreeMap;

fn all_occupancies(layout: &SiteLayout) -> Vec<Occupancy> {
    Odometer::new(layout).iter().collect()
}

#[test]
fn one_site_one_species_selects_half_filled_site() {
    let placements = select_site_representatives(&[0, 0], &["H"], &[vec![1]]).unwrap();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].sites, vec![vec![Label::Empty, adsorbate("H")]]);
}

#[test]
fn two_sites_selection_matches_maximum_degree() {
    let layout = SiteLayout::new(vec![2, 2], vec![2, 1]).unwrap();
    let occupancies = all_occupancies(&layout);
    assert_eq!(occupancies.len(), 18);
    assert_eq!(layout.configuration_count(), 18);

    let degrees = brute_force_degrees(&occupancies);
    let max_degree = *degrees.iter().max().unwrap();
    let expected: Vec<usize> = (0..degrees.len())
        .filter(|&i| degrees[i] == max_degree)
        .collect();

    let table = SymbolTable::new(["H", "O"]);
    let outcome = select_sites(layout, &table, &GraphBuilder::new()).unwrap();
    assert!(!outcome.representatives.is_empty());
    assert_eq!(outcome.max_degree, max_degree);
    let vertices: Vec<usize> = outcome.representatives.iter().map(|r| r.vertex).collect();
    assert_eq!(vertices, expected);
    assert!(
        outcome
            .representatives
            .iter()
            .all(|r| r.degree == max_degree)
    );
}

#[test]
fn four_slot_site_with_two_species() {
    let placements =
        select_site_representatives(&[0, 0, 0, 0], &["H", "O"], &[vec![1, 1]]).unwrap();
    assert_eq!(placements.len(), 3);

    let mut totals: BTreeMap<Label, usize> = BTreeMap::new();
    for placement in &placements {
        for (label, count) in placement.label_counts() {
            *totals.entry(label).or_insert(0) += count;
        }
    }
    assert_eq!(totals.get(&Label::Empty), Some(&4));
    assert_eq!(totals.get(&adsorbate("H")), Some(&4));
    assert_eq!(totals.get(&adsorbate("O")), Some(&4));
}

#[test]
fn two_single_slot_sites_form_a_cycle() {
    let placements = select_site_representatives(&[0, 1], &["H"], &[vec![1], vec![1]]).unwrap();
    assert_eq!(placements.len(), 4);
}

#[test]
fn odometer_visits_each_multiset_once_in_order() {
    let layout = SiteLayout::new(vec![3, 1, 2], vec![2, 1, 1]).unwrap();
    let occupancies = all_occupancies(&layout);
    assert_eq!(occupancies.len(), layout.configuration_count());

    for occupancy in &occupancies {
        assert!(layout.contains(occupancy));
        for site in occupancy.sites() {
            assert!(site.windows(2).all(|w| w[0] <= w[1]));
        }
    }
    for pair in occupancies.windows(2) {
        assert!(pair[0].sites() < pair[1].sites());
    }
}

#[test]
fn odometer_on_two_single_slots() {
    let layout = SiteLayout::new(vec![1], vec![1]).unwrap();
    let occupancies = all_occupancies(&layout);
    assert_eq!(
        occupancies,
        vec![
            Occupancy::from_slots(vec![vec![0]]),
            Occupancy::from_slots(vec![vec![1]]),
        ]
    );
}

#[test]
fn distance_is_a_bounded_symmetric_measure() {
    let layout = SiteLayout::new(vec![2, 2], vec![2, 1]).unwrap();
    let occupancies = all_occupancies(&layout);
    for a in &occupancies {
        assert_eq!(a.distance(a), 0);
        for b in &occupancies {
            let d = layout.distance(a, b).unwrap();
            assert_eq!(d, b.distance(a));
            assert!(d <= layout.total_slots());
        }
    }
}

#[test]
fn slot_order_does_not_change_distance() {
    let a = Occupancy::from_slots(vec![vec![1, 2, 0]]);
    let b = Occupancy::from_slots(vec![vec![0, 1, 2]]);
    let c = Occupancy::from_slots(vec![vec![0, 1, 1]]);
    assert_eq!(a.distance(&b), 0);
    assert_eq!(a.distance(&c), 1);
}

#[test]
fn serial_and_parallel_selection_agree() {
    let layout = SiteLayout::new(vec![3, 2, 2], vec![2, 2, 1]).unwrap();
    let table = SymbolTable::new(["H", "O"]);
    let serial = select_sites(
        layout.clone(),
        &table,
        &GraphBuilder::new().with_options(GraphOptions::serial()),
    )
    .unwrap();
    let parallel = select_sites(
        layout,
        &table,
        &GraphBuilder::new().with_options(GraphOptions {
            parallel_threshold: 0,
        }),
    )
    .unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn short_symbol_table_is_rejected_before_enumeration() {
    let result = select_site_representatives(&[0, 0], &["H"], &[vec![1, 1]]);
    assert!(matches!(
        result,
        Err(AdsorbError::SymbolTableTooShort {
            index: 2,
            available: 1
        })
    ));
}

#[test]
fn mismatched_site_flags_are_rejected() {
    let result = select_site_representatives(&[0, 1], &["H"], &[vec![1]]);
    assert!(matches!(result, Err(AdsorbError::InvalidSiteSpec(_))));

    let empty: [&str; 0] = [];
    let result = select_site_representatives(&[], &empty, &[]);
    assert!(matches!(result, Err(AdsorbError::InvalidSiteSpec(_))));
}
