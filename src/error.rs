/// Failures a chain walk can report back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("no head node was supplied")]
    NullInput,

    #[error("chain loops back on itself (detected after {steps} steps)")]
    CyclicChain { steps: usize },
}

/// Arena bookkeeping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("node {id} does not exist in an arena of {len} nodes")]
    UnknownNode { id: usize, len: usize },
}
