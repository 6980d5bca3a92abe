/// Returned by [`OrderedTree::remove`][crate::OrderedTree::remove] when the tree holds no item
/// equal to the one being removed. The tree is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("item not found in tree")]
pub struct NotFoundError;
