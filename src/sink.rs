//! Consumers of a sorted traversal.
//!
//! A [`Sink`] is handed every element of a tree in ascending order, or a single
//! [`empty`][Sink::empty] signal when there is nothing to hand over. Any `FnMut(&T)` closure
//! is a sink that ignores the empty signal; [`LineWriter`] prints elements to an
//! [`io::Write`].

use std::fmt::Display;
use std::io::{self, Write};

/// The notice [`LineWriter`] writes in place of elements for an empty tree.
pub const EMPTY_TREE_NOTICE: &str = "Empty tree";

/// Receives the elements of a tree in ascending order.
pub trait Sink<T> {
    /// Called once per element, smallest first.
    fn visit(&mut self, item: &T);

    /// Called exactly once, and instead of any `visit`, when the tree holds no elements.
    fn empty(&mut self) {}
}

impl<T, F> Sink<T> for F
where
    F: FnMut(&T),
{
    fn visit(&mut self, item: &T) {
        self(item)
    }
}

/// A [`Sink`] writing each element on its own line.
///
/// Sinks can't fail mid-traversal so the first write error is kept, everything after it
/// is skipped, and the error comes back out of [`finish`][LineWriter::finish].
///
/// # Examples
///
/// ```
/// use ordered_tree::{LineWriter, OrderedTree};
///
/// let tree: OrderedTree<_> = [2, 3, 1].into_iter().collect();
/// let mut sink = LineWriter::new(Vec::new());
/// tree.visit_sorted(&mut sink);
///
/// assert_eq!(sink.finish().unwrap(), b"1\n2\n3\n");
/// ```
#[derive(Debug)]
pub struct LineWriter<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W> LineWriter<W>
where
    W: Write,
{
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the writer and returns it, or the first error hit while writing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, line: &dyn Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = writeln!(self.out, "{line}") {
            tracing::debug!(%error, "tree sink write failed, skipping remaining elements");
            self.error = Some(error);
        }
    }
}

impl<T, W> Sink<T> for LineWriter<W>
where
    T: Display,
    W: Write,
{
    fn visit(&mut self, item: &T) {
        self.write_line(item);
    }

    fn empty(&mut self) {
        self.write_line(&EMPTY_TREE_NOTICE);
    }
}
