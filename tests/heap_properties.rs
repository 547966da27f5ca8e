//! Property-based tests using proptest
//!
//! Random sequences of insert, extract and keyed removal are applied to the indexed heap
//! and checked against a plain map model after every step.

use proptest::prelude::*;
use maze_pathfinder::{HeapError, IndexedMinHeap};

use std::collections::HashMap;

type Heap = IndexedMinHeap<i64, usize, usize>;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Extract,
    Remove(usize), // index into the current heap array, wrapped to its length
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-100i64..100).prop_map(Op::Insert),
        1 => Just(Op::Extract),
        1 => any::<usize>().prop_map(Op::Remove),
    ]
}

/// Every parent is no larger than its children
fn check_heap_property(heap: &Heap) -> Result<(), TestCaseError> {
    let entries = heap.as_slice();
    for position in 1..entries.len() {
        let parent = (position - 1) / 2;
        prop_assert!(
            entries[parent].priority <= entries[position].priority,
            "parent {} at {} is larger than child {} at {}",
            entries[parent].priority, parent, entries[position].priority, position
        );
    }
    Ok(())
}

/// Every key resolves to the array position that holds it
fn check_index_coherence(heap: &Heap, model: &HashMap<usize, i64>) -> Result<(), TestCaseError> {
    prop_assert_eq!(heap.len(), model.len());
    for (position, entry) in heap.as_slice().iter().enumerate() {
        prop_assert_eq!(heap.position_of(&entry.key), Some(position));
        prop_assert_eq!(heap.priority_of(&entry.key), Ok(entry.priority));
    }
    for (key, priority) in model {
        let scanned = heap.as_slice().iter().find(|entry| entry.key == *key).map(|entry| entry.priority);
        prop_assert_eq!(scanned, Some(*priority));
        prop_assert_eq!(heap.priority_of(key), Ok(*priority));
    }
    Ok(())
}

fn run_ops(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = Heap::new();
    let mut model: HashMap<usize, i64> = HashMap::new();
    let mut next_key = 0;

    for op in ops {
        match op {
            Op::Insert(priority) => {
                heap.insert(priority, next_key, next_key).unwrap();
                model.insert(next_key, priority);
                next_key += 1;
            }
            Op::Extract => {
                let expected_min = model.values().min().copied();
                let extracted = heap.extract_min();
                prop_assert_eq!(extracted.as_ref().map(|entry| entry.priority), expected_min);
                if let Some(entry) = extracted {
                    prop_assert_eq!(entry.payload, entry.key);
                    model.remove(&entry.key);
                }
            }
            Op::Remove(index) => {
                if heap.is_empty() {
                    continue;
                }
                let key = heap.as_slice()[index % heap.len()].key;
                let removed = heap.remove_and_extract(&key).unwrap();
                prop_assert_eq!(Some(removed.priority), model.remove(&key));
                prop_assert!(!heap.contains(&key));
                prop_assert_eq!(heap.remove_and_extract(&key), Err(HeapError::KeyNotFound(format!("{:?}", key))));
            }
        }

        check_heap_property(&heap)?;
        check_index_coherence(&heap, &model)?;
    }

    Ok(())
}

fn drain_priorities(mut heap: Heap) -> Vec<i64> {
    std::iter::from_fn(|| heap.extract_min().map(|entry| entry.priority)).collect()
}

proptest! {
    #[test]
    fn test_random_ops_keep_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
        run_ops(ops)?;
    }

    #[test]
    fn test_extraction_is_sorted(values in prop::collection::vec(-1000i64..1000, 0..100)) {
        let mut heap = Heap::new();
        for (key, value) in values.iter().enumerate() {
            heap.insert(*value, key, key).unwrap();
        }

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(drain_priorities(heap), expected);
    }

    #[test]
    fn test_remove_then_reinsert_round_trip(
        values in prop::collection::vec(-100i64..100, 2..64),
        pick in any::<usize>()
    ) {
        let mut heap = Heap::new();
        for (key, value) in values.iter().enumerate() {
            heap.insert(*value, key, key).unwrap();
        }
        let before = drain_priorities(heap.clone());

        // any entry except the root
        let position = 1 + pick % (heap.len() - 1);
        let key = heap.as_slice()[position].key;

        let removed = heap.remove_and_extract(&key).unwrap();
        heap.insert(removed.priority, removed.key, removed.payload).unwrap();

        check_heap_property(&heap)?;
        prop_assert_eq!(drain_priorities(heap), before);
    }

    #[test]
    fn test_duplicate_insert_never_changes_heap(values in prop::collection::vec(-100i64..100, 1..32)) {
        let mut heap = Heap::new();
        for (key, value) in values.iter().enumerate() {
            heap.insert(*value, key, key).unwrap();
        }
        let snapshot = heap.as_slice().to_vec();

        for key in 0..values.len() {
            prop_assert!(matches!(heap.insert(i64::MIN, key, key), Err(HeapError::DuplicateKey(_))));
        }
        prop_assert_eq!(heap.as_slice(), snapshot.as_slice());
    }
}
