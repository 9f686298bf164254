/// A read-only view of one node in a singly linked chain.
///
/// Every node representation in this crate hands out cursors, so a walk is
/// written once against this trait. Cursors never own what they point at;
/// the caller keeps the chain alive (and unmodified) for as long as the walk
/// runs.
pub trait Cursor: Copy {
    /// Payload stored in the node.
    fn data(&self) -> i32;

    /// The successor, or `None` for the terminal node.
    fn next(&self) -> Option<Self>;

    /// True when both cursors view the same node, not merely equal payloads.
    fn same_node(&self, other: &Self) -> bool;
}
