use std::collections::BTreeMap;

use llrb_tree::{Keyed, LlrbTree};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const TEST_SIZE: usize = 10_000;

// ─── Test element types ──────────────────────────────────────────────────────

/// Single-letter element, keyed by itself.
#[derive(Clone, Debug, PartialEq)]
struct Letter(char);

impl Keyed for Letter {
    type Key = char;

    fn key(&self) -> &char {
        &self.0
    }
}

/// A sensor reading, keyed by the id of the station that produced it.
#[derive(Clone, Debug, PartialEq)]
struct Reading {
    station: i64,
    value: u64,
}

impl Keyed for Reading {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.station
    }
}

fn station_strategy() -> impl Strategy<Value = i64> {
    -500..500_i64
}

#[derive(Clone, Debug)]
enum TreeOp {
    Insert(i64, u64),
    Remove(i64),
    Search(i64),
}

fn op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => (station_strategy(), any::<u64>()).prop_map(|(k, v)| TreeOp::Insert(k, v)),
        3 => station_strategy().prop_map(TreeOp::Remove),
        2 => station_strategy().prop_map(TreeOp::Search),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

#[test]
fn insert_search_remove_scenario() {
    let mut tree = LlrbTree::new();
    for letter in ['A', 'S', 'E', 'R', 'C', 'D', 'I', 'N', 'B', 'X'] {
        tree.insert(Letter(letter));
    }
    assert_eq!(tree.len(), 10);

    let present: String = ('A'..='Z').filter(|c| tree.search(c).is_some()).collect();
    assert_eq!(present, "ABCDEINRSX");

    for letter in ['X', 'S', 'I', 'R', 'B'] {
        assert!(tree.remove(&letter), "{letter} should have been present");
    }
    assert!(!tree.remove(&'Z'));
    assert_eq!(tree.len(), 5);

    let present: String = ('A'..='Z').filter(|c| tree.search(c).is_some()).collect();
    assert_eq!(present, "ACDEN");
}

#[test]
fn reinserting_a_station_updates_its_reading() {
    let mut tree = LlrbTree::new();
    tree.insert(Reading {
        station: 3,
        value: 10,
    });
    tree.insert(Reading {
        station: 3,
        value: 11,
    });

    assert_eq!(tree.len(), 1);
    assert_eq!(
        tree.search(&3),
        Some(&Reading {
            station: 3,
            value: 11
        })
    );
}

#[test]
fn ascending_fill_then_drain() {
    let mut tree = LlrbTree::new();
    for station in 0..1_000 {
        tree.insert(Reading { station, value: 0 });
    }
    assert_eq!(tree.len(), 1_000);

    for station in 0..1_000 {
        assert!(tree.remove(&station), "station {station} missing");
    }
    assert!(tree.is_empty());
}

#[test]
fn clear_then_reuse() {
    let mut tree = LlrbTree::new();
    for station in 0..100 {
        tree.insert(Reading { station, value: 1 });
    }

    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.search(&10), None);

    tree.insert(Reading {
        station: 10,
        value: 2,
    });
    assert_eq!(tree.len(), 1);
}

// ─── Construction and trait impls ────────────────────────────────────────────

#[test]
fn default_is_empty() {
    let tree: LlrbTree<Reading> = LlrbTree::default();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn with_capacity_preallocates() {
    let tree: LlrbTree<Reading> = LlrbTree::with_capacity(64);

    assert!(tree.capacity() >= 64);
    assert!(tree.is_empty());
}

#[test]
fn clone_is_independent() {
    let mut tree = LlrbTree::new();
    for station in 0..100 {
        tree.insert(Reading { station, value: 7 });
    }

    let mut copy = tree.clone();
    assert!(copy.remove(&50));

    assert!(tree.search(&50).is_some());
    assert_eq!(tree.len(), 100);
    assert_eq!(copy.len(), 99);
}

#[test]
fn debug_output_is_in_key_order() {
    let mut tree = LlrbTree::new();
    for letter in ['c', 'a', 'b'] {
        tree.insert(Letter(letter));
    }

    assert_eq!(
        format!("{tree:?}"),
        "{Letter('a'), Letter('b'), Letter('c')}"
    );
}

// ─── Randomized comparison against BTreeMap ──────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn random_operations_match_btreemap(ops in prop::collection::vec(op_strategy(), 0..TEST_SIZE)) {
        let mut tree = LlrbTree::new();
        let mut model: BTreeMap<i64, u64> = BTreeMap::new();

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                TreeOp::Insert(station, value) => {
                    tree.insert(Reading { station, value });
                    model.insert(station, value);
                }
                TreeOp::Remove(station) => {
                    let removed = tree.remove(&station);
                    prop_assert_eq!(
                        removed,
                        model.remove(&station).is_some(),
                        "remove({}) disagreed at step {}",
                        station,
                        step
                    );
                }
                TreeOp::Search(station) => {
                    let found = tree.search(&station).map(|reading| reading.value);
                    prop_assert_eq!(
                        found,
                        model.get(&station).copied(),
                        "search({}) disagreed at step {}",
                        station,
                        step
                    );
                }
            }
            prop_assert_eq!(tree.len(), model.len(), "length diverged at step {}", step);
        }

        for station in -500..500_i64 {
            prop_assert_eq!(
                tree.search(&station).map(|reading| reading.value),
                model.get(&station).copied()
            );
        }
    }
}
