//! The [`OrderedTree`] container.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.find_min(), None);
//!
//! tree.insert("pear");
//! tree.insert("apple");
//! assert!(tree.contains(&"apple"));
//!
//! // Inserting an element that's already present changes nothing.
//! tree.insert("pear");
//! assert_eq!(tree.len(), 2);
//!
//! // Removing an element that isn't there is fine too.
//! tree.remove(&"plum");
//! tree.remove(&"pear");
//! assert_eq!(tree.find_max(), Some(&"apple"));
//! ```

use std::fmt;
use std::io;

use crate::iter::Iter;
use crate::node::{self, Inserted, Link};
use crate::order::{Comparator, Natural};
use crate::sink::{LineWriter, Sink};

/// An unbalanced Binary Search Tree holding distinct elements of type `T` in the order
/// given by `C`.
///
/// `C` defaults to [`Natural`], the element type's own [`Ord`]. Use
/// [`with_comparator`][OrderedTree::with_comparator] to order by something else.
pub struct OrderedTree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Generates a new, empty `OrderedTree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T> Default for OrderedTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> OrderedTree<T, C>
where
    C: Comparator<T>,
{
    /// Generates a new, empty `OrderedTree` ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Inserts `item` into the tree. If an equal element is already present, the tree is left
    /// unchanged and `item` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) {
        let (root, inserted) = node::insert(self.root.take(), item, &self.cmp);
        self.root = root;
        match inserted {
            Inserted::New => {
                self.len += 1;
                tracing::trace!(len = self.len, "inserted element");
            }
            Inserted::Duplicate => tracing::trace!("ignored duplicate element"),
        }
    }

    /// Removes the element equal to `item`, if there is one. Removing an element that isn't
    /// in the tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// tree.remove(&2);
    /// tree.remove(&42);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn remove(&mut self, item: &T) {
        self.take(item);
    }

    /// Removes the element equal to `item` and returns it, or returns `None` if there is no
    /// such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &(u8, &str), b: &(u8, &str)| a.0.cmp(&b.0));
    /// tree.insert((1, "one"));
    ///
    /// assert_eq!(tree.take(&(1, "")), Some((1, "one")));
    /// assert_eq!(tree.take(&(1, "")), None);
    /// ```
    pub fn take(&mut self, item: &T) -> Option<T> {
        let (root, removed) = node::remove(self.root.take(), item, &self.cmp);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
            tracing::trace!(len = self.len, "removed element");
        }
        removed
    }

    /// Returns whether an element equal to `item` is in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.get(item).is_some()
    }

    /// Returns the stored element equal to `item`, if any.
    pub fn get(&self, item: &T) -> Option<&T> {
        node::find(self.root.as_deref(), item, &self.cmp)
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Returns the smallest element, or `None` if the tree is empty.
    pub fn find_min(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.min().element)
    }

    /// Returns the largest element, or `None` if the tree is empty.
    pub fn find_max(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.max().element)
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drops every element, leaving the tree empty.
    pub fn make_empty(&mut self) {
        let released = node::release(self.root.take());
        self.len = 0;
        tracing::debug!(released, "emptied tree");
    }

    /// Same as [`make_empty`][OrderedTree::make_empty].
    pub fn clear(&mut self) {
        self.make_empty();
    }

    /// Calls `visit` on every element in ascending order. An empty tree never calls `visit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    /// let mut sum = 0;
    /// tree.traverse(|x| sum += x);
    ///
    /// assert_eq!(sum, 16);
    /// ```
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for item in self {
            visit(item);
        }
    }

    /// Hands every element to `sink` in ascending order, or signals
    /// [`empty`][Sink::empty] once if there are none.
    pub fn visit_sorted<S>(&self, sink: &mut S)
    where
        S: Sink<T> + ?Sized,
    {
        if self.is_empty() {
            sink.empty();
        } else {
            for item in self {
                sink.visit(item);
            }
        }
    }

    /// Writes the elements to `out` in ascending order, one per line, or a single
    /// `Empty tree` line if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut out = Vec::new();
    /// OrderedTree::<u8>::new().print_tree(&mut out).unwrap();
    /// assert_eq!(out, b"Empty tree\n");
    /// ```
    pub fn print_tree<W>(&self, out: W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        let mut sink = LineWriter::new(out);
        self.visit_sorted(&mut sink);
        sink.finish().map(drop)
    }

    /// Gets an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&node::Node<T>> {
        self.root.as_deref()
    }
}

impl<T, C> Drop for OrderedTree<T, C> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

impl<T, C> Clone for OrderedTree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(&self.root),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> fmt::Debug for OrderedTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> PartialEq for OrderedTree<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for OrderedTree<T, C> where T: Eq {}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Extend<T> for OrderedTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
