use std::collections::BTreeMap;

use avl_forest::{AvlTree, BinarySearchTree};
use avl_forest_util::{generate, permutation, Fuzzer, Op, WorkloadOptions};

fn replay_avl(ops: &[Op]) -> (AvlTree<i32, i32>, BTreeMap<i32, i32>) {
    let mut tree = AvlTree::new();
    let mut model = BTreeMap::new();
    for (step, op) in ops.iter().enumerate() {
        match *op {
            Op::Insert(k, v) => assert_eq!(tree.insert(k, v), model.insert(k, v), "step {step}"),
            Op::Remove(k) => assert_eq!(tree.remove(&k), model.remove(&k), "step {step}"),
            Op::Get(k) => assert_eq!(tree.get(&k), model.get(&k), "step {step}"),
        }
        if let Err(e) = tree.assert_valid() {
            panic!("step {step} ({op:?}): {e}\n{}", tree.print());
        }
    }
    (tree, model)
}

#[test]
fn seeded_workload_matrix() {
    for seed in 0..24u64 {
        let mut fuzzer = Fuzzer::from_u64(seed);
        let ops = generate(&mut fuzzer, &WorkloadOptions::default());
        let (tree, model) = replay_avl(&ops);
        assert!(tree.iter().eq(model.iter()), "seed {seed}");
        assert!(tree.is_balanced());
    }
}

#[test]
fn tight_key_space_matrix() {
    let opts = WorkloadOptions {
        len: 2_000,
        key_range: 12,
        remove_probability: 0.5,
        get_probability: 0.2,
    };
    for seed in [7u64, 99, 1234] {
        let mut fuzzer = Fuzzer::from_u64(seed);
        let ops = generate(&mut fuzzer, &opts);
        let (tree, model) = replay_avl(&ops);
        assert_eq!(tree.len(), model.len());
    }
}

#[test]
fn permutation_round_trip_matrix() {
    let mut fuzzer = Fuzzer::from_u64(5);
    let inserts = permutation(&mut fuzzer, 200);
    let removes = permutation(&mut fuzzer, 200);

    let mut avl = AvlTree::new();
    let mut bst = BinarySearchTree::new();
    for &k in &inserts {
        avl.insert(k, ());
        bst.insert(k, ());
    }
    assert_eq!(avl.len(), 401);
    assert!(avl.height() <= bst.height());

    for &k in &removes {
        assert_eq!(avl.remove(&k), Some(()));
        assert_eq!(bst.remove(&k), Some(()));
        avl.assert_valid().unwrap();
        bst.assert_valid().unwrap();
    }
    assert!(avl.is_empty());
    assert!(bst.is_empty());
}
