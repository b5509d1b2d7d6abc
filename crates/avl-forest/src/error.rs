use thiserror::Error;

/// Failure of keyed access on a tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key is not stored in the tree (out of range).
    #[error("Invalid key")]
    KeyNotFound,
}

/// Structural defect found by a validator.
///
/// These never surface from normal tree operations; they exist so tests and
/// debugging sessions can say exactly what broke and where.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root has a parent")]
    RootHasParent,
    #[error("broken parent link below node {node}")]
    BrokenParentLink { node: u32 },
    #[error("node order violated at node {node}")]
    OrderViolated { node: u32 },
    #[error("balance factor mismatch at node {node}: expected {expected}, got {actual}")]
    BalanceMismatch { node: u32, expected: i64, actual: i8 },
    #[error("AVL balance violated at node {node}: {balance}")]
    Unbalanced { node: u32, balance: i64 },
    #[error("tree reaches {reachable} nodes but owns {owned}")]
    SizeMismatch { reachable: usize, owned: usize },
}
