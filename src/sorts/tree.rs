//! Tree sort over a module-level binary search tree.
//!
//! Ownership model:
//! - Each node exclusively owns its children through `Option<Box<Node<T>>>`,
//!   so the tree is a strict hierarchy with no sharing or cycles.
//! - Insertion walks a `&mut` cursor down the tree; traversal dismantles the
//!   tree with an explicit stack, moving keys out as they are visited.
//!
//! Neither direction recurses, so the deep spines produced by presorted
//! input cannot overflow the call stack (not even on drop — nodes are taken
//! apart during the walk).

/// Binary-search-tree node with two owned child slots.
struct Node<T> {
    key: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(key: T) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// Tree sort: insert every element into a BST, then read it back in order.
///
/// Equal keys descend to the right, so duplicates come back out in arrival
/// order. Returns a new sequence.
pub fn tree_sort<T: Ord>(data: Vec<T>) -> Vec<T> {
    let capacity = data.len();
    let mut root: Option<Box<Node<T>>> = None;
    for key in data {
        let mut slot = &mut root;
        loop {
            match slot {
                None => {
                    *slot = Some(Node::leaf(key));
                    break;
                }
                Some(node) => {
                    slot = if key < node.key {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                }
            }
        }
    }

    let mut sorted = Vec::with_capacity(capacity);
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    let mut cursor = root;
    while cursor.is_some() || !stack.is_empty() {
        while let Some(mut node) = cursor {
            cursor = node.left.take();
            stack.push(node);
        }
        if let Some(mut node) = stack.pop() {
            cursor = node.right.take();
            sorted.push(node.key);
        }
    }
    sorted
}
