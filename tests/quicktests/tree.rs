use bstree::OrderedTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

fn in_order<T: Clone>(tree: &OrderedTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    tree.traverse_in_order(|value| values.push(value.clone()));
    values
}

fn pre_order<T: Clone>(tree: &OrderedTree<T>) -> Vec<(T, usize)> {
    let mut values = Vec::new();
    tree.traverse_pre_order_with_depth(|value, depth| values.push((value.clone(), depth)));
    values
}

/// Applies a set of operations to a tree, a copy of it, and a set mirroring each.
/// This way we can ensure that writes to one tree never leak into the other.
fn do_ops<T>(
    ops: &[Op<T>],
    bst: &mut OrderedTree<T>,
    copy: &mut OrderedTree<T>,
    set: &mut BTreeSet<T>,
    copy_set: &mut BTreeSet<T>,
) where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::CloneFrom => {
                copy.clone_from(bst);
                *copy_set = set.clone();
            }
            Op::InsertIntoCopy(v) => {
                copy.insert(v.clone());
                copy_set.insert(v.clone());
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_copies_stay_independent(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut copy = OrderedTree::new();
        let mut set = BTreeSet::new();
        let mut copy_set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut copy, &mut set, &mut copy_set);

        in_order(&tree).iter().eq(set.iter()) && in_order(&copy).iter().eq(copy_set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn in_order_is_strictly_ascending(xs: Vec<String>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();

        in_order(&tree).windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn len_counts_successful_inserts(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        let inserted = xs.into_iter().filter(|x| tree.insert(*x)).count();

        let mut visited = 0;
        tree.traverse_in_order(|_| visited += 1);
        visited == inserted && tree.len() == inserted
    }
}

quickcheck::quickcheck! {
    fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        let before = pre_order(&tree);

        let none_inserted = xs.iter().all(|x| !tree.insert(*x));
        none_inserted && pre_order(&tree) == before
    }
}

quickcheck::quickcheck! {
    fn clone_keeps_shape(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();

        pre_order(&tree.clone()) == pre_order(&tree)
    }
}

quickcheck::quickcheck! {
    fn pre_order_visits_every_value_once(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let mut visited: Vec<i8> = pre_order(&tree).into_iter().map(|(x, _)| x).collect();
        visited.sort_unstable();

        let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        visited == expected
    }
}

quickcheck::quickcheck! {
    fn root_height_is_deepest_depth(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();
        let deepest = pre_order(&tree).into_iter().map(|(_, depth)| depth).max();

        tree.height() == deepest
    }
}
