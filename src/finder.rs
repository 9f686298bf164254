//! Walks a chain to its terminal node.
//!
//! The chain must not be mutated while a walk is in progress. Plain
//! [`get_last`] trusts the chain to be acyclic and never returns on a loop;
//! use [`get_last_checked`] when that cannot be promised.

use crate::cursor::Cursor;
use crate::error::ChainError;
use log::{debug, trace};

/// Payload of the terminal node reachable from `head`.
pub fn get_last<C: Cursor>(head: Option<C>) -> Result<i32, ChainError> {
    get_last_counted(head).map(|(data, _)| data)
}

/// Like [`get_last`], also returning how many times the walk advanced.
/// For a chain of `n` nodes that is `n - 1`.
pub fn get_last_counted<C: Cursor>(head: Option<C>) -> Result<(i32, usize), ChainError> {
    let mut curr = match head {
        Some(head) => head,
        None => {
            debug!("get_last called without a head node");
            return Err(ChainError::NullInput);
        }
    };

    let mut steps: usize = 0;
    let mut nxt = curr.next();
    while let Some(node) = nxt {
        curr = node;
        nxt = curr.next();
        steps += 1;
    }

    trace!("reached terminal node after {} steps", steps);
    Ok((curr.data(), steps))
}

/// Walks the chain with a slow and a fast cursor so a loop is reported as
/// [`ChainError::CyclicChain`] instead of spinning forever.
pub fn get_last_checked<C: Cursor>(head: Option<C>) -> Result<i32, ChainError> {
    let mut slow = match head {
        Some(head) => head,
        None => {
            debug!("get_last_checked called without a head node");
            return Err(ChainError::NullInput);
        }
    };
    let mut fast = slow;
    let mut steps: usize = 0;

    loop {
        // The fast cursor reaches the end first on an acyclic chain.
        let one = match fast.next() {
            Some(node) => node,
            None => break,
        };
        let two = match one.next() {
            Some(node) => node,
            None => {
                fast = one;
                break;
            }
        };
        fast = two;

        // `fast` moved, so `slow` always has a successor here.
        if let Some(node) = slow.next() {
            slow = node;
        }
        steps += 1;

        if slow.same_node(&fast) {
            debug!("cycle detected after {} steps", steps);
            return Err(ChainError::CyclicChain { steps });
        }
    }

    trace!("reached terminal node after {} checked steps", steps);
    Ok(fast.data())
}
