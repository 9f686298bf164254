use crate::cursor::Cursor;
use crate::error::ArenaError;
use crate::layout::{NextFirst, Slot};
use std::fmt;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every node of one or more chains. Links between nodes are indices,
/// with `None` marking the terminal node.
#[derive(Debug, Clone)]
pub struct NodeArena<S = NextFirst> {
    slots: Vec<S>,
}

impl<S: Slot> NodeArena<S> {
    pub fn new() -> Self {
        NodeArena { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Adds an unlinked node.
    pub fn push(&mut self, data: i32) -> NodeId {
        self.slots.push(S::new(data));
        NodeId(self.slots.len() - 1)
    }

    /// Points `from` at `to`. Passing `None` makes `from` terminal.
    pub fn link(&mut self, from: NodeId, to: Option<NodeId>) -> Result<(), ArenaError> {
        if let Some(to) = to {
            self.check(to)?;
        }
        self.check(from)?;
        self.slots[from.0].set_next(to);
        Ok(())
    }

    /// Builds one chain holding `values` in order and returns it with its head.
    pub fn from_values<I>(values: I) -> (Self, Option<NodeId>)
    where
        I: IntoIterator<Item = i32>,
    {
        let values = values.into_iter();
        let mut arena = Self::with_capacity(values.size_hint().0);
        let mut prev: Option<NodeId> = None;
        for data in values {
            let id = arena.push(data);
            if let Some(prev) = prev {
                arena.slots[prev.0].set_next(Some(id));
            }
            prev = Some(id);
        }
        let head = if arena.is_empty() { None } else { Some(NodeId(0)) };
        (arena, head)
    }

    pub fn get(&self, id: NodeId) -> Option<&S> {
        self.slots.get(id.0)
    }

    pub fn cursor(&self, id: NodeId) -> Option<ArenaCursor<'_, S>> {
        self.get(id).map(|_| ArenaCursor { arena: self, id })
    }

    /// Cursor for a possibly absent head, ready to hand to a finder.
    pub fn head_cursor(&self, head: Option<NodeId>) -> Option<ArenaCursor<'_, S>> {
        head.and_then(|id| self.cursor(id))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check(&self, id: NodeId) -> Result<(), ArenaError> {
        if id.0 < self.slots.len() {
            Ok(())
        } else {
            Err(ArenaError::UnknownNode {
                id: id.0,
                len: self.slots.len(),
            })
        }
    }
}

/// Borrowed view of one arena node.
pub struct ArenaCursor<'a, S> {
    arena: &'a NodeArena<S>,
    id: NodeId,
}

impl<'a, S> ArenaCursor<'a, S> {
    pub fn id(&self) -> NodeId {
        self.id
    }
}

// Derived impls would demand `S: Clone`.
impl<'a, S> Clone for ArenaCursor<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for ArenaCursor<'a, S> {}

impl<'a, S: Slot> Cursor for ArenaCursor<'a, S> {
    fn data(&self) -> i32 {
        self.arena.slots[self.id.0].data()
    }

    fn next(&self) -> Option<Self> {
        self.arena.slots[self.id.0].next().map(|id| ArenaCursor {
            arena: self.arena,
            id,
        })
    }

    fn same_node(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}
