//! avl-forest-util - seeded random input for exercising the avl-forest trees.

pub mod fuzzer;
pub mod workload;

pub use fuzzer::Fuzzer;
pub use workload::{generate, permutation, Op, WorkloadOptions};
