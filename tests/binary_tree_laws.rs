//! Property-based tests for BinaryTree.
//!
//! These tests verify that the derived operations agree with their fold
//! specializations and that map preserves tree shape.

use catafold::persistent::BinaryTree;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates trees up to 8 levels deep with up to 64 nodes.
fn binary_tree_strategy() -> impl Strategy<Value = BinaryTree<i32>> {
    let leaf = any::<i32>().prop_map(BinaryTree::leaf);
    leaf.prop_recursive(8, 64, 2, |inner| {
        (inner.clone(), inner).prop_map(|(left, right)| BinaryTree::branch(left, right))
    })
}

proptest! {
    // =========================================================================
    // Fold Generality
    // =========================================================================

    #[test]
    fn prop_size_equals_fold_specialization(tree in binary_tree_strategy()) {
        prop_assert_eq!(tree.size(), tree.fold(|_| 1, |left, right| 1 + left + right));
    }

    #[test]
    fn prop_depth_equals_fold_specialization(tree in binary_tree_strategy()) {
        prop_assert_eq!(tree.depth(), tree.fold(|_| 0, |left, right| 1 + left.max(right)));
    }

    #[test]
    fn prop_fold_sum_equals_leaf_sum(tree in binary_tree_strategy()) {
        let via_fold = tree.fold(|value| i64::from(*value), |left, right| left + right);
        let via_leaves: i64 = tree.leaves().map(|value| i64::from(*value)).sum();
        prop_assert_eq!(via_fold, via_leaves);
    }

    // =========================================================================
    // Structural Properties
    // =========================================================================

    #[test]
    fn prop_size_is_twice_leaves_minus_one(tree in binary_tree_strategy()) {
        let leaf_count = tree.leaves().count();
        prop_assert_eq!(tree.size(), 2 * leaf_count - 1);
    }

    #[test]
    fn prop_depth_is_less_than_size(tree in binary_tree_strategy()) {
        prop_assert!(tree.depth() < tree.size());
    }

    #[test]
    fn prop_branch_grows_size_by_sum_plus_one(
        left in binary_tree_strategy(),
        right in binary_tree_strategy()
    ) {
        let grafted = BinaryTree::branch(left.clone(), right.clone());
        prop_assert_eq!(grafted.size(), left.size() + right.size() + 1);
        prop_assert_eq!(grafted.depth(), 1 + left.depth().max(right.depth()));
    }

    // =========================================================================
    // Map Properties
    // =========================================================================

    #[test]
    fn prop_map_preserves_shape(tree in binary_tree_strategy()) {
        let mapped = tree.map(|value| value.wrapping_add(1));
        prop_assert_eq!(mapped.size(), tree.size());
        prop_assert_eq!(mapped.depth(), tree.depth());
    }

    #[test]
    fn prop_map_transforms_each_leaf_in_place(tree in binary_tree_strategy()) {
        let mapped = tree.map(|value| value.wrapping_mul(3));
        let expected: Vec<i32> = tree.leaves().map(|value| value.wrapping_mul(3)).collect();
        let actual: Vec<i32> = mapped.leaves().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_map_identity(tree in binary_tree_strategy()) {
        prop_assert_eq!(tree.map(|value| *value), tree);
    }

    // =========================================================================
    // Maximum Properties
    // =========================================================================

    #[test]
    fn prop_maximum_is_an_upper_bound(tree in binary_tree_strategy()) {
        let maximum = tree.maximum();
        for value in tree.leaves() {
            prop_assert!(*value <= maximum);
        }
    }

    #[test]
    fn prop_maximum_is_a_leaf_value(tree in binary_tree_strategy()) {
        let maximum = tree.maximum();
        prop_assert!(tree.leaves().any(|value| *value == maximum));
    }

    // =========================================================================
    // Equality and Sharing
    // =========================================================================

    #[test]
    fn prop_clone_is_equal(tree in binary_tree_strategy()) {
        prop_assert_eq!(tree.clone(), tree);
    }

    #[test]
    fn prop_grafting_preserves_subtree_contents(
        left in binary_tree_strategy(),
        right in binary_tree_strategy()
    ) {
        let grafted = BinaryTree::branch(left.clone(), right.clone());
        let expected: Vec<i32> = left.leaves().chain(right.leaves()).copied().collect();
        let actual: Vec<i32> = grafted.leaves().copied().collect();
        prop_assert_eq!(actual, expected);
    }
}
