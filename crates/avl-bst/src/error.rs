/// Lookup failures signalled by the keyed accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("tree is empty")]
    EmptyTree,
    #[error("key not found")]
    NotFound,
}

/// Structural invariant violations reported by `assert_valid`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("root node {0} has a parent")]
    RootHasParent(u32),
    #[error("broken parent link on {side} child {child} of node {node}")]
    BrokenParentLink {
        node: u32,
        child: u32,
        side: &'static str,
    },
    #[error("balance factor mismatch at node {node}: expected {expected}, got {actual}")]
    BalanceMismatch { node: u32, expected: i32, actual: i8 },
    #[error("AVL balance violated at node {node}: {balance}")]
    Unbalanced { node: u32, balance: i8 },
    #[error("node order violated between nodes {prev} and {next}")]
    OrderViolated { prev: u32, next: u32 },
    #[error("tree reaches {reachable} nodes but holds {stored}")]
    SizeMismatch { reachable: usize, stored: usize },
}
