use crate::fuzzer::Fuzzer;

/// One step of a map workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(i32, i32),
    Remove(i32),
    Get(i32),
}

/// Shape of a generated workload.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadOptions {
    pub len: usize,
    /// Keys are drawn from `-key_range..=key_range`; a small range forces
    /// overwrites and removals of present keys.
    pub key_range: i32,
    /// Chance that a step removes instead of inserting.
    pub remove_probability: f64,
    pub get_probability: f64,
}

impl Default for WorkloadOptions {
    fn default() -> Self {
        Self {
            len: 500,
            key_range: 150,
            remove_probability: 0.35,
            get_probability: 0.1,
        }
    }
}

/// Random insert/remove/get sequence. Removals and lookups favour keys that
/// were inserted earlier so they mostly hit.
pub fn generate(fuzzer: &mut Fuzzer, opts: &WorkloadOptions) -> Vec<Op> {
    let mut ops = Vec::with_capacity(opts.len);
    let mut seen: Vec<i32> = Vec::new();
    let fresh = |fuzzer: &mut Fuzzer| fuzzer.random_int(-opts.key_range, opts.key_range);

    for _ in 0..opts.len {
        let op = if fuzzer.random_bool(opts.get_probability) {
            Op::Get(recall(fuzzer, &seen).unwrap_or_else(|| fresh(fuzzer)))
        } else if fuzzer.random_bool(opts.remove_probability) {
            Op::Remove(recall(fuzzer, &seen).unwrap_or_else(|| fresh(fuzzer)))
        } else {
            let k = fresh(fuzzer);
            seen.push(k);
            Op::Insert(k, fuzzer.random_int(i32::MIN, i32::MAX))
        };
        ops.push(op);
    }
    ops
}

/// Every key in `-range..=range` exactly once, in random order.
pub fn permutation(fuzzer: &mut Fuzzer, range: i32) -> Vec<i32> {
    let mut keys: Vec<i32> = (-range..=range).collect();
    fuzzer.shuffle(&mut keys);
    keys
}

fn recall(fuzzer: &mut Fuzzer, seen: &[i32]) -> Option<i32> {
    if seen.is_empty() || fuzzer.random_bool(0.1) {
        return None;
    }
    Some(*fuzzer.pick(seen))
}
