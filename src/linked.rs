//! A link-based BST. Every `Node` owns its children through `Option<Box<Node>>` so the tree can
//! never share or cycle nodes and dropping a subtree releases everything under it.
//!
//! The tree doesn't balance itself. Items land wherever the insertion path ends, which makes the
//! shape (and the cost of searching it) depend on the order items were added in. Use
//! [`OrderedTree::rebalance`] to rebuild it into a near-minimal height.
//!
//! # Examples
//!
//! ```
//! use linked_bst::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&"ant"), None);
//!
//! // Sorted input gives a chain.
//! for word in ["ant", "bee", "cat", "dog", "eel", "fox", "gnu"] {
//!     tree.add(word);
//! }
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding around medians brings it down to a perfect tree.
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.successor(&"cat"), Some("dog"));
//! assert_eq!(tree.range_find(&"bee", &"dog"), ["bee", "cat", "dog"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::NotFoundError;
use crate::stack::Stack;
use crate::traversal::{InOrder, IntoIter, LevelOrder, Postorder, Preorder};
use crate::util;

/// The slot a `Node` hangs from: the tree's root or one of a node's children.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of items that are their own keys. Items equal to an existing item are
/// kept (there is no deduplication) and always go to the right of it.
pub struct OrderedTree<T> {
    root: Link<T>,
    size: usize,
}

pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Nodes are rebuilt in postorder so both children of a node are already built (and on
        // top of `built`) when the node itself is cloned.
        let mut pending = Stack::new();
        pending.push_some(self.root.as_deref().map(|n| (n, false)));
        let mut built: Stack<Box<Node<T>>> = Stack::new();

        while let Some((node, expanded)) = pending.pop() {
            if !expanded {
                pending.push((node, true));
                pending.push_some(node.right.as_deref().map(|n| (n, false)));
                pending.push_some(node.left.as_deref().map(|n| (n, false)));
                continue;
            }

            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                item: node.item.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

/// Draws the tree rotated 90 degrees counterclockwise: the root sits in the left column, right
/// subtrees above their parent and left subtrees below. Every level of depth adds a `"| "`.
///
/// ```
/// use linked_bst::OrderedTree;
///
/// let tree = OrderedTree::from_items([2, 1, 3]);
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A reversed in-order walk (right, node, left) that remembers each node's depth.
        let mut stack = Stack::new();
        let mut next = self.root.as_deref().map(|n| (n, 0));
        loop {
            while let Some((node, depth)) = next {
                stack.push((node, depth));
                next = node.right.as_deref().map(|n| (n, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.item)?;
            next = node.left.as_deref().map(|n| (n, depth + 1));
        }
    }
}

/// Two trees are equal when they hold the same items in the same shape, i.e. their preorder
/// traversals match.
impl<T> PartialEq for OrderedTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T> Eq for OrderedTree<T> where T: Eq {}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut tree = Self::new();
        tree.extend(items);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.size = 0;
        IntoIter::new(self.root.take())
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of items in the tree, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`OrderedTree::size`].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        let mut stack = Stack::new();
        stack.push_some(self.root.take());
        if !stack.is_empty() {
            log::debug!("OrderedTree::clear dropping {} items", self.size);
        }

        // Pull the children off each node before it's dropped so dropping never recurses.
        while let Some(mut node) = stack.pop() {
            stack.push_some(node.left.take());
            stack.push_some(node.right.take());
        }
        self.size = 0;
    }

    /// The number of links on the longest path from the root down to a leaf. A tree with a
    /// single node has a height of `0` and an empty tree has a height of `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.add(2);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(1);
    /// tree.add(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> i64 {
        let mut height = -1;
        let mut stack = Stack::new();
        stack.push_some(self.root.as_deref().map(|n| (n, 0)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.push_some(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.push_some(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Whether the height is under `2 * log2(size + 1) - 1`.
    ///
    /// This is a rough heuristic for comparing tree shapes, not a structural guarantee like the
    /// AVL rule. Applied literally it reports an empty tree as unbalanced.
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < util::balance_limit(self.size)
    }

    /// Iterates the items in the default order, which is preorder.
    pub fn iter(&self) -> Preorder<'_, T> {
        self.preorder()
    }

    /// Iterates the items visiting each node before its left then right subtrees.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Iterates the items in sorted order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Iterates the items visiting each node after its left then right subtrees.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }

    /// Iterates the items one depth at a time, starting at the root.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Builds a tree by adding the given items one by one. The resulting shape follows the order
    /// of `items` so it isn't necessarily balanced.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    /// Potentially finds the item in this tree that is equal to `item`. If there are several, the
    /// one closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree = OrderedTree::from_items([1, 2]);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match item.cmp(&node.item) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Equal => return Some(&node.item),
                Ordering::Greater => link = node.right.as_deref(),
            }
        }
        None
    }

    /// Whether the tree holds an item equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Adds `item` as a new leaf at the end of its search path. Items equal to one already in the
    /// tree are added to its right.
    pub fn add(&mut self, item: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(item)));
        self.size += 1;
    }

    /// Removes an item equal to `item` from the tree and returns it. Fails with [`NotFoundError`]
    /// (leaving the tree untouched) if there is no such item.
    ///
    /// A node with two children keeps its place in the tree: it takes over the item of the
    /// largest node in its left subtree and that node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{NotFoundError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::from_items([5, 3, 8, 1, 4]);
    ///
    /// assert_eq!(tree.remove(&3), Ok(3));
    /// assert_eq!(tree.remove(&3), Err(NotFoundError));
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 4, 5, 8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, NotFoundError> {
        if !self.contains(item) {
            log::trace!("OrderedTree::remove miss on tree of size {}", self.size);
            return Err(NotFoundError);
        }

        let slot = Self::slot_of(&mut self.root, item);
        let has_two_children = slot
            .as_deref()
            .map_or(false, |n| n.left.is_some() && n.right.is_some());

        let removed = if has_two_children {
            let target = slot.as_deref_mut().ok_or(NotFoundError)?;
            let donor = Self::take_max(&mut target.left).ok_or(NotFoundError)?;
            log::trace!("OrderedTree::remove promoting predecessor into a node with two children");
            mem::replace(&mut target.item, donor)
        } else {
            let mut target = slot.take().ok_or(NotFoundError)?;
            *slot = target.left.take().or_else(|| target.right.take());
            target.item
        };

        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the item equal to `old` with `new` and returns the previous item, or `None` if
    /// there is no such item. The shape of the tree doesn't change.
    ///
    /// `new` is put exactly where `old` was. Keeping the tree ordered is up to the caller: either
    /// `new` sorts the same way `old` did or the tree is [rebalanced][OrderedTree::rebalance]
    /// afterwards.
    pub fn replace(&mut self, old: &T, new: T) -> Option<T> {
        let node = Self::slot_of(&mut self.root, old).as_deref_mut()?;
        Some(mem::replace(&mut node.item, new))
    }

    /// Rebuilds the tree around medians. The items are sorted and added back starting from the
    /// median, then recursively from the medians of the lower and upper halves.
    ///
    /// With distinct items the result is at most `ceil(log2(n + 1))` tall. Equal items always go
    /// right of each other, so runs of duplicates still form chains: `n` copies of one item end up
    /// `n - 1` tall.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_items(1..=7);
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        let mut items = mem::take(self).into_iter().collect::<Vec<_>>();
        items.sort();

        self.add_medians(items);

        log::debug!(
            "OrderedTree::rebalance rebuilt {} items to height {}",
            self.size,
            self.height()
        );
    }

    /// Adds the median of `items`, then the medians of each half, and so on. Each call halves the
    /// range so this recurses `O(lg N)` deep.
    fn add_medians(&mut self, mut items: Vec<T>) {
        if !items.is_empty() {
            let mid = items.len() / 2;
            let upper = items.split_off(mid + 1);
            if let Some(median) = items.pop() {
                self.add(median);
            }
            self.add_medians(items);
            self.add_medians(upper);
        }
    }

    /// Walks down from `slot` the way [`OrderedTree::find`] does and returns the slot holding the
    /// node equal to `item`, or the empty slot where the search ended.
    fn slot_of<'a>(mut slot: &'a mut Link<T>, item: &T) -> &'a mut Link<T> {
        loop {
            let ordering = slot.as_deref().map(|node| item.cmp(&node.item));
            let go_left = match ordering {
                None | Some(Ordering::Equal) => return slot,
                Some(ordering) => ordering == Ordering::Less,
            };
            if let Some(node) = slot {
                slot = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
    }

    /// Unlinks the largest node under `slot`, moving its left child up into its place, and
    /// returns its item. The largest node never has a right child.
    fn take_max(mut slot: &mut Link<T>) -> Option<T> {
        while slot.as_ref().map_or(false, |node| node.right.is_some()) {
            slot = &mut slot.as_mut()?.right;
        }

        let donor = slot.take()?;
        let Node { item, left, .. } = *donor;
        *slot = left;
        Some(item)
    }
}

impl<T> OrderedTree<T>
where
    T: Ord + Clone,
{
    /// Returns every item `x` with `low <= x <= high` in ascending order.
    ///
    /// This filters a full in-order traversal rather than pruning subtrees.
    pub fn range_find(&self, low: &T, high: &T) -> Vec<T> {
        self.in_order()
            .filter(|&item| low <= item && item <= high)
            .cloned()
            .collect()
    }

    /// The smallest item strictly greater than `item`, if there is one.
    pub fn successor(&self, item: &T) -> Option<T> {
        self.sorted_items()
            .into_iter()
            .find(|&candidate| candidate > item)
            .cloned()
    }

    /// The largest item strictly smaller than `item`, if there is one.
    pub fn predecessor(&self, item: &T) -> Option<T> {
        self.sorted_items()
            .into_iter()
            .rev()
            .find(|&candidate| candidate < item)
            .cloned()
    }

    /// A sorted snapshot of the items. It is sorted explicitly so it stays correct after a
    /// [`OrderedTree::replace`] broke the ordering of the tree.
    fn sorted_items(&self) -> Vec<&T> {
        let mut items = self.in_order().collect::<Vec<_>>();
        items.sort();
        items
    }
}
