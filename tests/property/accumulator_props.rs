//! Model-based tests for the sharded accumulator.

use proptest::prelude::*;
use quaero::{DocId, ShardedAccumulator};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Op {
    Add(DocId, f64),
    Erase(DocId),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..64i32, -4.0..4.0f64).prop_map(|(key, delta)| Op::Add(key, delta)),
        (0..64i32).prop_map(Op::Erase),
    ]
}

proptest! {
    #[test]
    fn prop_accumulator_matches_ordered_map_model(
        ops in prop::collection::vec(op_strategy(), 0..64),
        shards in 1usize..16,
    ) {
        let mut accumulator = ShardedAccumulator::with_shards(shards);
        let mut model: BTreeMap<DocId, f64> = BTreeMap::new();

        for op in &ops {
            match *op {
                Op::Add(key, delta) => {
                    accumulator.add(key, delta);
                    *model.entry(key).or_insert(0.0) += delta;
                }
                Op::Erase(key) => {
                    accumulator.erase(key);
                    model.remove(&key);
                }
            }
        }

        let drained = accumulator.drain_ordered();
        prop_assert_eq!(
            drained.keys().collect::<Vec<_>>(),
            model.keys().collect::<Vec<_>>()
        );
        for (key, value) in &drained {
            prop_assert!((value - model[key]).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_parallel_increments_lose_nothing(
        keys in prop::collection::vec(0..16i32, 1..256),
    ) {
        use rayon::prelude::*;

        let accumulator = ShardedAccumulator::new();
        keys.par_iter().for_each(|&key| accumulator.add(key, 1.0));

        let mut accumulator = accumulator;
        let drained = accumulator.drain_ordered();
        let total: f64 = drained.values().sum();
        prop_assert!((total - keys.len() as f64).abs() < 1e-9);

        for (key, count) in &drained {
            let expected = keys.iter().filter(|k| *k == key).count() as f64;
            prop_assert!((count - expected).abs() < 1e-9);
        }
    }
}
