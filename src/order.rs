//! The total orders an [`OrderedTree`][crate::OrderedTree] can be built over.
//!
//! By default a tree orders its elements with their own [`Ord`] implementation
//! ([`Natural`]). Any closure comparing two elements can be injected instead:
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! tree.extend([1, 3, 2]);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
//! assert_eq!(tree.find_min(), Some(&3));
//! ```

use std::cmp::Ordering;

/// A three-way comparison over `T`. Implementations must be a total order: every pair
/// of elements is classified exactly one of less, equal, or greater, consistently and
/// transitively. A tree built on an inconsistent comparator keeps its memory safety
/// but may lose or duplicate elements.
pub trait Comparator<T> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
