use ordered_tree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            // `add` reports "already present", `insert` reports "newly added".
            Op::Add(k) => assert_eq!(tree.add(k.clone()), !set.insert(k.clone())),
            Op::Remove(k) => assert_eq!(tree.remove(k), set.remove(k)),
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::empty();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.check_invariants().is_ok()
            && tree.len() == set.len()
            && set.iter().all(|key| tree.search(key).map(|n| n.value()) == Some(key))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::empty();
        for x in &xs {
            tree.add(*x);
        }

        xs.iter().all(|x| tree.search(x).map(|n| n.value()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn duplicates_are_reported(xs: Vec<i8>) -> bool {
        let mut tree = Tree::empty();
        let mut seen = HashSet::new();

        xs.into_iter().all(|x| {
            let len = tree.len();
            let present = tree.add(x);
            present == !seen.insert(x) && tree.len() == len + usize::from(!present)
        })
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for remove in &removes {
            let len = tree.len();
            let removed = tree.remove(remove);
            if tree.len() + usize::from(removed) != len {
                return false;
            }
        }

        let mut still_present = xs;
        for remove in &removes {
            // We may have added the same key multiple times - drop each one.
            while let Some(pos) = still_present.iter().position(|x| x == remove) {
                still_present.swap_remove(pos);
            }
        }

        removes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.check_invariants().is_ok()
    }
}

quickcheck::quickcheck! {
    fn subtree_extremes(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut ok = true;

        tree.breadth_first_visit(|node| {
            let mut subtree = Vec::new();
            let mut pending = vec![node];
            while let Some(n) = pending.pop() {
                subtree.push(*n.value());
                pending.extend(n.left());
                pending.extend(n.right());
            }
            ok &= subtree.iter().min() == Some(node.min().value())
                && subtree.iter().max() == Some(node.max().value());
        });
        ok
    }
}

quickcheck::quickcheck! {
    fn draining_empties(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for x in &xs {
            tree.remove(x);
        }

        tree.is_empty() && tree.root().is_none() && !tree.add(0)
    }
}
