use ordered_tree::OrderedTree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

fn build(xs: &[i8]) -> OrderedTree<i8> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

fn sorted(tree: &OrderedTree<i8>) -> Vec<i8> {
    let mut out = Vec::new();
    tree.traverse(|x| out.push(*x));
    out
}

#[quickcheck]
fn traversal_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    sorted(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn duplicates_do_not_grow_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before = sorted(&tree);
    for x in &xs {
        tree.insert(*x);
    }

    sorted(&tree) == before && tree.len() == before.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        still_present.remove(delete);
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && sorted(&tree).into_iter().eq(still_present)
}

#[quickcheck]
fn min_and_max_bracket_the_traversal(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let elements = sorted(&tree);

    tree.find_min() == elements.first() && tree.find_max() == elements.last()
}

#[quickcheck]
fn emptied_tree_looks_fresh(xs: Vec<i8>, probe: i8) -> bool {
    let mut tree = build(&xs);
    tree.make_empty();

    let mut calls = 0;
    tree.traverse(|_| calls += 1);

    tree.is_empty()
        && tree.find_min().is_none()
        && tree.find_max().is_none()
        && !tree.contains(&probe)
        && calls == 0
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for x in &xs {
        tree.remove(x);
    }

    tree.is_empty() && tree.len() == 0
}
