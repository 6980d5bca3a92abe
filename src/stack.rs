/// A last-in first-out stack. Traversals push the nodes they still have to visit here instead of
/// recursing so that a degenerate tree can't overflow the call stack.
pub(crate) struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pushes the item if there is one. Handy for optional children.
    pub(crate) fn push_some(&mut self, item: Option<T>) {
        if let Some(item) = item {
            self.push(item);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push_some(Some(2));
        stack.push_some(None);
        stack.push(3);

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert!(!stack.is_empty());
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }
}
