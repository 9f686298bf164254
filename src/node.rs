use crate::cursor::Cursor;

type Link = Option<Box<Node>>;

/// A chain where every node owns its successor.
#[derive(Debug, PartialEq)]
pub struct Node {
    pub data: i32,
    pub next: Link,
}

impl Node {
    pub fn new(data: i32) -> Box<Node> {
        Box::new(Node { data, next: None })
    }

    pub fn with_next(data: i32, next: Box<Node>) -> Box<Node> {
        Box::new(Node {
            data,
            next: Some(next),
        })
    }

    /// Builds a chain holding `values` in order. An empty iterator gives `None`.
    pub fn from_values<I>(values: I) -> Link
    where
        I: IntoIterator<Item = i32>,
        I::IntoIter: DoubleEndedIterator,
    {
        // Built back to front so each new node can take ownership of the rest.
        let mut head: Link = None;
        for data in values.into_iter().rev() {
            head = Some(Box::new(Node { data, next: head }));
        }
        head
    }

    pub fn len(&self) -> usize {
        let mut count = 1;
        let mut curr = self.next.as_deref();
        while let Some(node) = curr {
            count += 1;
            curr = node.next.as_deref();
        }
        count
    }
}

impl Drop for Node {
    // The default recursive drop would use one stack frame per node.
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<'a> Cursor for &'a Node {
    fn data(&self) -> i32 {
        self.data
    }

    fn next(&self) -> Option<Self> {
        self.next.as_deref()
    }

    fn same_node(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}
