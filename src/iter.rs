//! In-order traversal of an [`OrderedTree`][crate::OrderedTree].

use std::iter::FusedIterator;

use crate::node::Node;

/// A lazy in-order walk over the elements of a tree, smallest first.
///
/// The walk keeps an explicit stack of the nodes whose left subtree is still being
/// visited, so it never recurses no matter how lopsided the tree is. Created by
/// [`OrderedTree::iter`][crate::OrderedTree::iter].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::OrderedTree;

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = OrderedTree::<i32>::new();
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn yields_ascending_and_counts_down() {
        let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.copied().collect::<Vec<_>>(), [4, 5, 7, 8, 9]);
    }

    #[test]
    fn restarting_walks_the_whole_tree_again() {
        let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();

        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = tree.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn clone_resumes_from_the_same_place() {
        let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
        let mut iter = tree.iter();
        iter.next();

        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, [&2, &3]);
        assert_eq!(iter.next(), Some(&2));
    }

    #[test]
    fn degenerate_tree_does_not_recurse() {
        let tree: OrderedTree<_> = (0..2_000).rev().collect();

        assert!(tree.iter().copied().eq(0..2_000));
    }
}
