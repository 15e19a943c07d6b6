//! Owned tree nodes and the routines that rebuild a subtree.
//!
//! Every mutating routine takes ownership of a [`Link`] and hands back the (possibly new)
//! owning link to the resulting subtree. Callers store the result back into the child slot
//! they took it from, e.g. `node.left = insert(node.left.take(), ..)`.

use std::cmp::Ordering;
use std::mem;

use crate::order::Comparator;

/// An owning reference to a possibly empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The node holding the smallest element of this subtree.
    pub(crate) fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node holding the largest element of this subtree.
    pub(crate) fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

/// Whether an insert allocated a node or found the element already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Inserted {
    New,
    Duplicate,
}

/// Inserts `item` into the subtree rooted at `link`, returning the new root of that
/// subtree. Duplicates leave the existing element in place and drop `item`.
pub(crate) fn insert<T, C>(link: Link<T>, item: T, cmp: &C) -> (Link<T>, Inserted)
where
    C: Comparator<T>,
{
    let mut node = match link {
        None => return (Some(Node::new_boxed(item)), Inserted::New),
        Some(node) => node,
    };

    let inserted = match cmp.compare(&item, &node.element) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), item, cmp);
            node.left = left;
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), item, cmp);
            node.right = right;
            inserted
        }
        Ordering::Equal => Inserted::Duplicate,
    };

    (Some(node), inserted)
}

/// Removes the element comparing equal to `item` from the subtree rooted at `link`,
/// returning the new root of that subtree and the removed element, if any.
///
/// A node with two children is not unlinked itself: its element is replaced with its
/// in-order successor (the minimum of its right subtree) and the successor's node is
/// unlinked instead.
pub(crate) fn remove<T, C>(link: Link<T>, item: &T, cmp: &C) -> (Link<T>, Option<T>)
where
    C: Comparator<T>,
{
    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    match cmp.compare(item, &node.element) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), item, cmp);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), item, cmp);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                let removed = mem::replace(&mut node.element, successor);
                node.left = Some(left);
                node.right = right;
                (Some(node), Some(removed))
            }
            (left, right) => (left.or(right), Some(node.element)),
        },
    }
}

/// Unlinks the leftmost node of a non-empty subtree. Returns what remains of the subtree
/// along with the unlinked node's element.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        // The leftmost node has no left child so its right child takes its place.
        None => (node.right.take(), node.element),
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(node), min)
        }
    }
}

/// Releases every node of a subtree without recursing, so a degenerate (list shaped) tree
/// can't overflow the stack on its way out. Returns how many nodes were released.
pub(crate) fn release<T>(link: Link<T>) -> usize {
    let mut released = 0;
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
        released += 1;
    }
    released
}

/// Copies a subtree node for node, keeping its shape. Like [`release`] this walks with an
/// explicit stack: each pending entry pairs a source node with the empty slot its copy goes
/// into.
pub(crate) fn clone_subtree<T>(link: &Link<T>) -> Link<T>
where
    T: Clone,
{
    let mut root = None;
    let mut pending: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
    if let Some(node) = link.as_deref() {
        pending.push((node, &mut root));
    }
    while let Some((source, slot)) = pending.pop() {
        let copy = slot.insert(Node::new_boxed(source.element.clone()));
        let Node { left, right, .. } = &mut **copy;
        if let Some(source_left) = source.left() {
            pending.push((source_left, left));
        }
        if let Some(source_right) = source.right() {
            pending.push((source_right, right));
        }
    }
    root
}

/// Finds the element comparing equal to `item` in the subtree rooted at `node`.
pub(crate) fn find<'a, T, C>(mut node: Option<&'a Node<T>>, item: &T, cmp: &C) -> Option<&'a T>
where
    C: Comparator<T>,
{
    while let Some(n) = node {
        node = match cmp.compare(item, &n.element) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(&n.element),
            Ordering::Greater => n.right(),
        };
    }
    None
}
