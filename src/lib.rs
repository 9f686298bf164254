pub mod arena;
pub mod cursor;
pub mod error;
pub mod finder;
pub mod layout;
pub mod node;

pub use arena::{ArenaCursor, NodeArena, NodeId};
pub use cursor::Cursor;
pub use error::{ArenaError, ChainError};
pub use finder::{get_last, get_last_checked, get_last_counted};
pub use layout::{DataFirst, NextFirst, Slot};
pub use node::Node;

use crossbeam_utils::thread;
use log::trace;

pub static SOME_ELEMS: i32 = 1_000;
pub static MANY_ELEMS: i32 = 100_000;
pub static NUM_THREADS: i32 = 4;

/// Walks a boxed chain once.
pub fn boxed_walk(head: Option<&Node>) -> Result<i32, ChainError> {
    get_last(head)
}

/// Walks an arena chain from `head` once.
pub fn arena_walk<S: Slot>(arena: &NodeArena<S>, head: Option<NodeId>) -> Result<i32, ChainError> {
    get_last(arena.head_cursor(head))
}

/// Walks the same chain from `readers` threads at once. Fails if any reader
/// panicked.
pub fn parallel_last<C>(
    head: Option<C>,
    readers: i32,
) -> std::thread::Result<Vec<Result<i32, ChainError>>>
where
    C: Cursor + Send,
{
    thread::scope(|s| {
        let handles: Vec<_> = (0..readers)
            .map(|tid| {
                s.spawn(move |_| {
                    let last = get_last(head);
                    trace!("reader {} finished: {:?}", tid, last);
                    last
                })
            })
            .collect();

        let joined: std::thread::Result<Vec<_>> =
            handles.into_iter().map(|h| h.join()).collect();
        joined
    })
    .and_then(|joined| joined)
}


#[cfg(test)]
mod par {
    use super::*;
    use crossbeam_utils::thread;

    #[test]
    fn stress_shared_readers() {
        let head = Node::from_values(0..MANY_ELEMS);
        let (arena, arena_head) = NodeArena::<DataFirst>::from_values(0..MANY_ELEMS);

        thread::scope(|s| {
            for _ in 0..NUM_THREADS {
                let head = head.as_deref();
                let arena = &arena;
                s.spawn(move |_| {
                    assert_eq!(boxed_walk(head), Ok(MANY_ELEMS - 1));
                    assert_eq!(arena_walk(arena, arena_head), Ok(MANY_ELEMS - 1));
                });
            }
        })
        .unwrap();
    }

    #[derive(Clone, Copy)]
    struct Torn;

    impl Cursor for Torn {
        fn data(&self) -> i32 {
            0
        }

        fn next(&self) -> Option<Self> {
            panic!("successor storage was freed mid-walk");
        }

        fn same_node(&self, _other: &Self) -> bool {
            true
        }
    }

    #[test]
    fn parallel_readers_agree() {
        let head = Node::from_values(0..SOME_ELEMS);
        let results = parallel_last(head.as_deref(), NUM_THREADS).unwrap();
        assert_eq!(results.len(), NUM_THREADS as usize);
        assert!(results.iter().all(|r| *r == Ok(SOME_ELEMS - 1)));
    }

    #[test]
    fn parallel_readers_without_head() {
        let results = parallel_last::<&Node>(None, 2).unwrap();
        assert_eq!(results, vec![Err(ChainError::NullInput); 2]);
    }

    #[test]
    fn parallel_reader_panic_is_reported() {
        assert!(parallel_last(Some(Torn), NUM_THREADS).is_err());
    }

    #[test]
    fn readers_from_different_starts() {
        let (arena, _) = NodeArena::<NextFirst>::from_values(0..SOME_ELEMS);

        thread::scope(|s| {
            for i in 0..NUM_THREADS {
                let arena = &arena;
                s.spawn(move |_| {
                    let start = NodeId((i * (SOME_ELEMS / NUM_THREADS)) as usize);
                    let (data, steps) = get_last_counted(arena.cursor(start)).unwrap();
                    assert_eq!(data, SOME_ELEMS - 1);
                    assert_eq!(steps, SOME_ELEMS as usize - 1 - start.index());
                });
            }
        })
        .unwrap();
    }
}
