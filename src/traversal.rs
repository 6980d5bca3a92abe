//! Iterators over an [`OrderedTree`][crate::OrderedTree]. Each one walks the tree with an explicit
//! stack (or queue) instead of recursing, so they are safe to use on degenerate trees no matter
//! how tall they get. They are all lazy and one-shot: asking the tree for a new traversal starts
//! over from the root.
//!
//! # Examples
//!
//! ```
//! use linked_bst::OrderedTree;
//!
//! //     5
//! //    / \
//! //   3   8
//! //  / \
//! // 1   4
//! let tree = OrderedTree::from_items([5, 3, 8, 1, 4]);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8]);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [1, 4, 3, 8, 5]);
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [5, 3, 8, 1, 4]);
//! ```

use std::collections::VecDeque;

use crate::linked::Node;
use crate::stack::Stack;

/// Visits a node, then its left subtree, then its right subtree. This is the order
/// [`OrderedTree::iter`][crate::OrderedTree::iter] uses.
pub struct Preorder<'a, T> {
    stack: Stack<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut stack = Stack::new();
        stack.push_some(root);
        Self { stack }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped before it.
        self.stack.push_some(node.right.as_deref());
        self.stack.push_some(node.left.as_deref());
        Some(&node.item)
    }
}

/// Visits the left subtree, then the node, then the right subtree. On a well formed tree this
/// yields items in non-decreasing order.
pub struct InOrder<'a, T> {
    stack: Stack<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut in_order = Self {
            stack: Stack::new(),
        };
        in_order.push_left_spine(root);
        in_order
    }

    /// Stacks `node` and every left descendant below it. The smallest of them ends up on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.item)
    }
}

/// Visits the left subtree, then the right subtree, then the node.
pub struct Postorder<'a, T> {
    /// Each node is paired with whether its children have been stacked already.
    stack: Stack<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut stack = Stack::new();
        stack.push_some(root.map(|n| (n, false)));
        Self { stack }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.item);
            }

            self.stack.push((node, true));
            self.stack.push_some(node.right.as_deref().map(|n| (n, false)));
            self.stack.push_some(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

/// Visits nodes breadth first: the root, then every node at depth 1 from left to right, and so on.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.item)
    }
}

/// Takes the items out of a tree in preorder. Created by `OrderedTree::into_iter`.
pub struct IntoIter<T> {
    stack: Stack<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Option<Box<Node<T>>>) -> Self {
        let mut stack = Stack::new();
        stack.push_some(root);
        Self { stack }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { item, left, right } = *node;
        self.stack.push_some(right);
        self.stack.push_some(left);
        Some(item)
    }
}

impl<T> Drop for IntoIter<T> {
    // Dropping a boxed node drops its children recursively, so drain what's left one node at a
    // time instead.
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
