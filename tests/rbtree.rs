use pretty_assertions::assert_eq;
use proptest::prelude::*;
use redblack_tree::{Color, Error, NodeId, RBTree};

/// The number of values to insert in each proptest case.
const TEST_SIZE: usize = 512;

/// Generates keys in a range small enough to force duplicates.
fn key_strategy() -> impl Strategy<Value = i64> {
    -(TEST_SIZE as i64 / 2)..(TEST_SIZE as i64 / 2)
}

// ─── Structural helpers over the public accessor surface ─────────────────────

/// Collects the in-order value sequence by walking the node graph.
fn in_order(tree: &RBTree<i64>) -> Vec<i64> {
    let mut values = Vec::with_capacity(tree.len());
    let mut stack: Vec<NodeId> = Vec::new();
    let mut cursor = tree.root();

    while cursor.is_some() || !stack.is_empty() {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = tree.left(node);
        }
        let node = stack.pop().unwrap();
        values.push(*tree.get(node).unwrap());
        cursor = tree.right(node);
    }

    values
}

/// Checks the red-black properties below `node` and returns its black-height.
fn check_subtree(tree: &RBTree<i64>, node: NodeId, count: &mut usize) -> usize {
    *count += 1;
    let color = tree.color(node).unwrap();
    if color == Color::Red {
        // A red node never has a red parent; the root's parent slot is the
        // always-black sentinel, surfaced here as `None`.
        if let Some(parent) = tree.parent(node) {
            assert_eq!(tree.color(parent), Some(Color::Black), "red node with a red parent");
        }
    }
    for child in [tree.left(node), tree.right(node)].into_iter().flatten() {
        assert_eq!(tree.parent(child), Some(node), "child does not link back to its parent");
    }

    let left_height = tree.left(node).map_or(0, |left| check_subtree(tree, left, count));
    let right_height = tree.right(node).map_or(0, |right| check_subtree(tree, right, count));
    assert_eq!(left_height, right_height, "unequal black-heights");

    left_height + usize::from(color == Color::Black)
}

/// Asserts every observable red-black invariant and returns the root's
/// black-height.
fn check_invariants(tree: &RBTree<i64>) -> usize {
    let Some(root) = tree.root() else {
        assert!(tree.is_empty());
        return 0;
    };
    assert_eq!(tree.color(root), Some(Color::Black), "root is not black");
    assert_eq!(tree.parent(root), None);

    let mut count = 0;
    let height = check_subtree(tree, root, &mut count);
    assert_eq!(count, tree.len(), "`len` does not match reachable nodes");
    assert!(in_order(tree).is_sorted(), "in-order traversal out of order");
    height
}

fn tree_of(values: &[i64]) -> RBTree<i64> {
    let mut tree = RBTree::new();
    for &value in values {
        tree.insert(value).unwrap();
    }
    tree
}

// ─── Concrete rebalancing scenarios ──────────────────────────────────────────

#[test]
fn ascending_run_rebalances_to_median_root() {
    let tree = tree_of(&[10, 20, 30]);

    let root = tree.root().unwrap();
    assert_eq!(tree.get(root), Some(&20));
    assert_eq!(tree.color(root), Some(Color::Black));

    let left = tree.left(root).unwrap();
    assert_eq!((tree.get(left), tree.color(left)), (Some(&10), Some(Color::Red)));
    let right = tree.right(root).unwrap();
    assert_eq!((tree.get(right), tree.color(right)), (Some(&30), Some(Color::Red)));

    assert_eq!(in_order(&tree), [10, 20, 30]);
}

#[test]
fn descending_run_rebalances_the_same_way() {
    let tree = tree_of(&[30, 20, 10]);

    let root = tree.root().unwrap();
    assert_eq!(tree.get(root), Some(&20));
    assert_eq!(tree.color(root), Some(Color::Black));
    assert_eq!(in_order(&tree), [10, 20, 30]);
    check_invariants(&tree);
}

#[test]
fn seven_ascending_keys_reach_black_height_two() {
    let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(in_order(&tree), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(check_invariants(&tree), 2);
}

#[test]
fn duplicates_land_right_of_their_equals() {
    let mut tree = tree_of(&[10, 20, 30]);
    let original = tree.root().unwrap();
    assert_eq!(tree.get(original), Some(&20));

    let duplicate = tree.insert(20).unwrap();
    assert_ne!(duplicate, original);

    // The duplicate is the leftmost node of the original's right subtree, so
    // an in-order walk visits it immediately after the original.
    let mut cursor = tree.right(original).unwrap();
    while let Some(left) = tree.left(cursor) {
        cursor = left;
    }
    assert_eq!(cursor, duplicate);
    assert_eq!(in_order(&tree), [10, 20, 20, 30]);
    check_invariants(&tree);
}

#[test]
fn empty_tree_has_no_root() {
    let tree: RBTree<i64> = RBTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root(), None);
}

// ─── Error reporting ─────────────────────────────────────────────────────────

#[test]
fn invalid_rotations_are_reported_not_applied() {
    let mut tree = tree_of(&[2, 1, 3]);
    let root = tree.root().unwrap();
    let leaf = tree.left(root).unwrap();

    let before = in_order(&tree);
    assert!(matches!(tree.rotate_left(leaf), Err(Error::InvalidArgument { .. })));
    assert!(matches!(tree.rotate_right(leaf), Err(Error::InvalidArgument { .. })));

    // Reported errors leave the tree untouched.
    assert_eq!(tree.root(), Some(root));
    assert_eq!(in_order(&tree), before);
    check_invariants(&tree);
}

#[test]
fn cleared_node_ids_go_stale() {
    let mut tree = tree_of(&[1, 2, 3]);
    let root = tree.root().unwrap();
    tree.clear();

    assert_eq!(tree.get(root), None);
    assert!(matches!(tree.rotate_left(root), Err(Error::InvalidArgument { .. })));
    assert!(tree.is_empty());
}

// ─── Comparator-driven ordering ──────────────────────────────────────────────

#[test]
fn reverse_comparator_reverses_the_order() {
    let mut tree = RBTree::with_comparator(|a: &i64, b: &i64| b.cmp(a));
    for value in [1, 4, 2, 8, 5, 7] {
        tree.insert(value).unwrap();
    }

    // Walk in order under the reversed comparator: largest first.
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut cursor = tree.root();
    while cursor.is_some() || !stack.is_empty() {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = tree.left(node);
        }
        let node = stack.pop().unwrap();
        values.push(*tree.get(node).unwrap());
        cursor = tree.right(node);
    }
    assert_eq!(values, [8, 7, 5, 4, 2, 1]);
}

// ─── Property tests ──────────────────────────────────────────────────────────

proptest! {
    /// Any insertion sequence keeps every red-black invariant and yields the
    /// sorted multiset in order.
    #[test]
    fn insertions_keep_invariants_and_order(values in prop::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let tree = tree_of(&values);
        check_invariants(&tree);

        let mut sorted = values;
        sorted.sort_unstable();
        prop_assert_eq!(in_order(&tree), sorted);
    }

    /// Inserting the same multiset in any permutation yields the same in-order
    /// sequence (shape and coloring may differ).
    #[test]
    fn insertion_order_is_immaterial(
        values in prop::collection::vec(key_strategy(), 1..64).prop_flat_map(|values| {
            let shuffled = values.clone();
            (Just(values), Just(shuffled).prop_shuffle())
        }),
    ) {
        let (original, shuffled) = values;
        prop_assert_eq!(in_order(&tree_of(&original)), in_order(&tree_of(&shuffled)));
    }

    /// A left rotation followed by a right rotation at the promoted node is the
    /// identity on the pointer graph.
    #[test]
    fn rotations_are_inverses(values in prop::collection::vec(key_strategy(), 1..64)) {
        let mut tree = tree_of(&values);

        // Snapshot the full pointer graph; NodeIds are stable across rotations.
        let snapshot = |tree: &RBTree<i64>| {
            let mut graph = Vec::new();
            let mut stack: Vec<NodeId> = tree.root().into_iter().collect();
            while let Some(node) = stack.pop() {
                graph.push((node, tree.parent(node), tree.left(node), tree.right(node)));
                stack.extend(tree.left(node));
                stack.extend(tree.right(node));
            }
            graph
        };

        let root = tree.root().unwrap();
        let before = snapshot(&tree);
        if let Some(promoted) = tree.right(root) {
            tree.rotate_left(root).unwrap();
            prop_assert_eq!(tree.root(), Some(promoted));
            prop_assert_eq!(in_order(&tree).is_sorted(), true);

            tree.rotate_right(promoted).unwrap();
            prop_assert_eq!(snapshot(&tree), before);
        }
    }

    /// Insertion reports each new node's id; the value is retrievable and the
    /// count tracks the number of inserts.
    #[test]
    fn node_ids_stay_valid(values in prop::collection::vec(key_strategy(), 1..TEST_SIZE)) {
        let mut tree = RBTree::new();
        let mut ids = Vec::new();
        for &value in &values {
            ids.push(tree.insert(value).unwrap());
        }

        prop_assert_eq!(tree.len(), values.len());
        for (id, value) in ids.iter().zip(&values) {
            prop_assert_eq!(tree.get(*id), Some(value));
        }
    }
}
