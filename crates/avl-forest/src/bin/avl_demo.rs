//! Smoke run over both trees. `RUST_LOG=trace` shows every rotation.

use avl_forest::{AvlTree, BinarySearchTree, InvariantError};

const WORKLOAD: [i32; 30] = [
    -17, -142, 137, 21, -48, -59, -10, -98, 20, -128, 48, 138, 24, 94, -113, -135, -144, -110,
    -114, -86, 123, -116, 14, -18, 93, -45, 106, 58, 36, 84,
];

fn main() -> Result<(), InvariantError> {
    env_logger::init();

    let mut bt = BinarySearchTree::new();
    bt.insert('a', 1);
    bt.insert('b', 2);
    println!("Binary Search Tree contents:");
    for (k, v) in &bt {
        println!("{k} {v}");
    }
    report_find(!bt.find(&'b').is_end());
    println!("Erasing b");
    bt.remove(&'b');
    bt.assert_valid()?;

    let mut at = AvlTree::new();
    at.insert('a', 1);
    at.insert('b', 2);
    println!("\nAVLTree contents:");
    for (k, v) in &at {
        println!("{k} {v}");
    }
    report_find(!at.find(&'b').is_end());
    println!("Erasing b");
    at.remove(&'b');
    at.assert_valid()?;

    let ct: AvlTree<i32, i32> = WORKLOAD.iter().map(|&k| (k, k)).collect();
    ct.assert_valid()?;
    log::info!("{} keys, height {}", ct.len(), ct.height());
    println!("\n{}", ct.print());
    Ok(())
}

fn report_find(found: bool) {
    if found {
        println!("Found b");
    } else {
        println!("Did not find b");
    }
}
