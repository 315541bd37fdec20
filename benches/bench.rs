use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by adding keys in ascending order. Nothing rebalances so this is a single
/// right spine.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by adding keys so that, without any self-balancing, the resultant tree is still
/// balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = Tree::empty();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.add(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets a fresh clone of the tree so
/// mutating benches start from the same shape.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11].iter().copied() {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests.iter() {
            let largest_element_in_tree = tree.max().map_or(0, |n| *n.value());
            let id = BenchmarkId::new(name.to_string(), largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// Test BSTs. All tests are run against balanced and unbalanced trees of various sizes and test
/// successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _node = black_box(tree.search(&i).map(|n| n.id()));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_helper(c, "remove-root", |tree, _| {
        let root = tree.root().map(|n| *n.value());
        if let Some(root) = root {
            tree.remove(&root);
        }
    });

    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _node = black_box(tree.search(&(i + 1)).map(|n| n.id()));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_helper(c, "breadth-first", |tree, _| {
        let mut sum = 0i64;
        tree.breadth_first_visit(|n| sum += i64::from(*n.value()));
        black_box(sum);
    });
    bench_helper(c, "depth-first", |tree, _| {
        let mut sum = 0i64;
        tree.depth_first_visit(|n| sum += i64::from(*n.value()));
        black_box(sum);
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
