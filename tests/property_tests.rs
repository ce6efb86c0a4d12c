//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations, run them against a
//! forest and against a naive reference queue, and verify after every step
//! that both agree and that every structural invariant holds.

use fibonacci_forest::{Forest, HeapId, NodeHandle};
use proptest::prelude::*;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    DeleteMin,
    /// Index into the live elements (modulo their count) and amount.
    DecreaseKey(usize, i64),
    Delete(usize),
    /// Build a second heap from these keys, extract once, apply the
    /// decrease-keys, then meld it in.
    Meld(Vec<i64>, Vec<(usize, i64)>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-1000i64..1000).prop_map(Op::Insert),
        2 => Just(Op::DeleteMin),
        2 => (any::<usize>(), 0i64..500).prop_map(|(i, d)| Op::DecreaseKey(i, d)),
        1 => any::<usize>().prop_map(Op::Delete),
        1 => (
            prop::collection::vec(-1000i64..1000, 2..40),
            prop::collection::vec((any::<usize>(), 0i64..500), 0..8),
        )
            .prop_map(|(keys, decreases)| Op::Meld(keys, decreases)),
    ]
}

/// Live elements by insertion id: (handle, current key).
type Model = HashMap<u32, (NodeHandle, i64)>;

fn pick(model: &Model, index: usize) -> Option<u32> {
    let mut ids: Vec<u32> = model.keys().copied().collect();
    ids.sort_unstable();
    ids.get(index % ids.len().max(1)).copied()
}

fn check_agrees(forest: &Forest<u32>, heap: HeapId, model: &Model) -> Result<(), TestCaseError> {
    let view = forest.heap(heap).unwrap();
    prop_assert_eq!(view.validate(), Ok(()));
    prop_assert_eq!(view.size(), model.len());
    prop_assert_eq!(view.is_empty(), model.is_empty());
    prop_assert_eq!(view.potential(), view.tree_count() + 2 * view.marked_count());
    let expected_min = model.values().map(|&(_, k)| k).min();
    prop_assert_eq!(view.find_min().map(|m| m.key()), expected_min);
    Ok(())
}

/// Run a mixed operation sequence and compare with the model after each step.
fn run_ops(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut forest: Forest<u32> = Forest::new();
    let heap = forest.create_heap();
    let mut model = Model::new();
    let mut next_id = 0u32;

    for op in ops {
        match op {
            Op::Insert(key) => {
                let h = forest.insert_with(heap, key, next_id).unwrap();
                model.insert(next_id, (h, key));
                next_id += 1;
            }
            Op::DeleteMin => {
                let expected = model.values().map(|&(_, k)| k).min();
                let popped = forest.delete_min(heap).unwrap();
                prop_assert_eq!(popped.map(|(k, _)| k), expected);
                if let Some((_, id)) = popped {
                    prop_assert!(model.remove(&id).is_some());
                }
            }
            Op::DecreaseKey(index, delta) => {
                if let Some(id) = pick(&model, index) {
                    let (h, key) = model[&id];
                    forest.decrease_key(heap, h, delta).unwrap();
                    model.insert(id, (h, key - delta));
                    prop_assert_eq!(forest.node(h).map(|n| n.key()), Some(key - delta));
                }
            }
            Op::Delete(index) => {
                if let Some(id) = pick(&model, index) {
                    let (h, key) = model.remove(&id).unwrap();
                    prop_assert_eq!(forest.delete(heap, h).unwrap(), (key, id));
                    prop_assert!(forest.node(h).is_none());
                }
            }
            Op::Meld(keys, decreases) => {
                let side = forest.create_heap();
                let mut incoming = Model::new();
                for key in keys {
                    let h = forest.insert_with(side, key, next_id).unwrap();
                    incoming.insert(next_id, (h, key));
                    next_id += 1;
                }
                if let Some((_, id)) = forest.delete_min(side).unwrap() {
                    incoming.remove(&id);
                }
                for (index, delta) in decreases {
                    if let Some(id) = pick(&incoming, index) {
                        let (h, key) = incoming[&id];
                        forest.decrease_key(side, h, delta).unwrap();
                        incoming.insert(id, (h, key - delta));
                    }
                }
                let other = forest.heap(side).unwrap();
                prop_assert_eq!(other.validate(), Ok(()));
                let (size, marked, potential) = (other.size(), other.marked_count(), other.potential());
                let view = forest.heap(heap).unwrap();
                let expected = (
                    view.size() + size,
                    view.marked_count() + marked,
                    view.potential() + potential,
                );

                forest.meld(heap, side).unwrap();
                let view = forest.heap(heap).unwrap();
                prop_assert_eq!((view.size(), view.marked_count(), view.potential()), expected);
                model.extend(incoming);
            }
        }
        check_agrees(&forest, heap, &model)?;
    }

    // drain in order
    let mut last = i64::MIN;
    while let Some((key, id)) = forest.delete_min(heap).unwrap() {
        prop_assert!(key >= last, "popped {} after {}", key, last);
        prop_assert!(model.remove(&id).is_some());
        last = key;
    }
    prop_assert!(model.is_empty());
    Ok(())
}

/// findMin agrees with a reference priority queue over insert/delete_min.
fn run_against_binary_heap(ops: Vec<(bool, i64)>) -> Result<(), TestCaseError> {
    let mut forest: Forest = Forest::new();
    let heap = forest.create_heap();
    let mut reference = BinaryHeap::new();

    for (should_pop, key) in ops {
        if should_pop {
            let expected = reference.pop().map(|Reverse(k)| k);
            prop_assert_eq!(forest.delete_min(heap).unwrap().map(|(k, ())| k), expected);
        } else {
            forest.insert(heap, key).unwrap();
            reference.push(Reverse(key));
        }
        let view = forest.heap(heap).unwrap();
        prop_assert_eq!(view.find_min().map(|m| m.key()), reference.peek().map(|r| r.0));
        prop_assert_eq!(view.size(), reference.len());
    }
    Ok(())
}

/// Meld keeps every element and the smaller minimum.
fn run_meld(left: Vec<i64>, right: Vec<i64>, pops_before: usize) -> Result<(), TestCaseError> {
    let mut forest: Forest = Forest::new();
    let a = forest.create_heap();
    let b = forest.create_heap();
    for &k in &left {
        forest.insert(a, k).unwrap();
    }
    for &k in &right {
        forest.insert(b, k).unwrap();
    }

    // give both sides some structure first
    let mut all: Vec<i64> = left.iter().chain(right.iter()).copied().collect();
    all.sort_unstable();
    let mut popped = Vec::new();
    for _ in 0..pops_before {
        if let Some((k, ())) = forest.delete_min(a).unwrap() {
            popped.push(k);
        }
        if let Some((k, ())) = forest.delete_min(b).unwrap() {
            popped.push(k);
        }
    }

    let potential = forest.heap(a).unwrap().potential() + forest.heap(b).unwrap().potential();
    let links = forest.total_links();
    forest.meld(a, b).unwrap();
    prop_assert_eq!(forest.total_links(), links, "meld never links");

    let view = forest.heap(a).unwrap();
    prop_assert_eq!(view.validate(), Ok(()));
    prop_assert_eq!(view.potential(), potential);
    prop_assert_eq!(view.size(), all.len() - popped.len());

    let mut drained = popped;
    while let Some((k, ())) = forest.delete_min(a).unwrap() {
        drained.push(k);
    }
    drained.sort_unstable();
    prop_assert_eq!(drained, all);
    Ok(())
}

proptest! {
    #[test]
    fn test_mixed_operations(ops in prop::collection::vec(op_strategy(), 0..200)) {
        run_ops(ops)?;
    }

    #[test]
    fn test_find_min_matches_reference(ops in prop::collection::vec((prop::bool::weighted(0.3), -100i64..100), 0..300)) {
        run_against_binary_heap(ops)?;
    }

    #[test]
    fn test_meld_invariant(
        left in prop::collection::vec(-100i64..100, 0..60),
        right in prop::collection::vec(-100i64..100, 0..60),
        pops in 0usize..4,
    ) {
        run_meld(left, right, pops)?;
    }

    #[test]
    fn test_k_min_matches_sorted(n in 1usize..200, k in 0usize..64) {
        let mut forest: Forest = Forest::new();
        let heap = forest.create_heap();
        // 2^j + 1 inserts leave one tree of rank j after the first extraction
        let size = n.next_power_of_two();
        let mut keys: Vec<i64> = (0..=size as i64).map(|i| (i * 7919) % 1009).collect();
        for &key in &keys {
            forest.insert(heap, key).unwrap();
        }
        forest.delete_min(heap).unwrap();
        keys.sort_unstable();
        keys.remove(0);

        let before = forest.heap(heap).unwrap().size();
        let got = forest.k_min(heap, k).unwrap();
        let expected: Vec<i64> = keys.iter().take(k).copied().collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(forest.heap(heap).unwrap().size(), before);
    }
}
