use crate::arena::NodeId;
use std::mem;

/// One cell of a [`crate::arena::NodeArena`].
///
/// The two implementations hold the same fields in opposite order. Walks over
/// either give the same answers; only the memory layout differs.
pub trait Slot {
    fn new(data: i32) -> Self;
    fn data(&self) -> i32;
    fn next(&self) -> Option<NodeId>;
    fn set_next(&mut self, next: Option<NodeId>);
}

/// Successor link first, payload second.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextFirst {
    next: Option<NodeId>,
    data: i32,
}

/// Payload first, successor link second.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFirst {
    data: i32,
    next: Option<NodeId>,
}

impl Slot for NextFirst {
    fn new(data: i32) -> Self {
        NextFirst { next: None, data }
    }

    fn data(&self) -> i32 {
        self.data
    }

    fn next(&self) -> Option<NodeId> {
        self.next
    }

    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

impl Slot for DataFirst {
    fn new(data: i32) -> Self {
        DataFirst { data, next: None }
    }

    fn data(&self) -> i32 {
        self.data
    }

    fn next(&self) -> Option<NodeId> {
        self.next
    }

    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

/// Byte offsets of the two fields inside a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffsets {
    pub next: usize,
    pub data: usize,
    pub size: usize,
}

pub fn next_first_offsets() -> FieldOffsets {
    FieldOffsets {
        next: mem::offset_of!(NextFirst, next),
        data: mem::offset_of!(NextFirst, data),
        size: mem::size_of::<NextFirst>(),
    }
}

pub fn data_first_offsets() -> FieldOffsets {
    FieldOffsets {
        next: mem::offset_of!(DataFirst, next),
        data: mem::offset_of!(DataFirst, data),
        size: mem::size_of::<DataFirst>(),
    }
}
