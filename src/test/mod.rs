
use crate::node::Node;

/// Checks the ordering invariant directly on the nodes: every element sits strictly between
/// the bounds handed down by its ancestors.
pub(crate) fn is_search_tree<T>(root: Option<&Node<T>>) -> bool
where
    T: Ord,
{
    fn within<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
        let Some(node) = node else {
            return true;
        };
        low.is_none_or(|low| low < &node.element)
            && high.is_none_or(|high| &node.element < high)
            && within(node.left(), low, Some(&node.element))
            && within(node.right(), Some(&node.element), high)
    }

    within(root, None, None)
}
