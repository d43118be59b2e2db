//! Property-based tests for ordering and round-trip guarantees

use dusnap::diff::diff;
use dusnap::tree::node::{FileKind, SnapshotNode};
use proptest::collection::vec;
use proptest::prelude::*;

fn leaf_strategy() -> impl Strategy<Value = SnapshotNode> {
    (
        "[a-z]{1,8}",
        0u64..1_000_000u64,
        prop_oneof![Just(FileKind::Regular), Just(FileKind::Link)],
    )
        .prop_map(|(path, size, kind)| SnapshotNode {
            path,
            size,
            kind,
            children: Vec::new(),
        })
}

fn tree_strategy() -> impl Strategy<Value = SnapshotNode> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        ("[a-z]{1,8}", 0u64..1_000_000u64, vec(inner, 0..4)).prop_map(
            |(path, size, children)| SnapshotNode {
                path,
                size,
                kind: FileKind::Directory,
                children,
            },
        )
    })
}

fn assert_sorted(node: &SnapshotNode) {
    for pair in node.children.windows(2) {
        assert!(
            pair[0].path <= pair[1].path,
            "children of {:?} out of order",
            node.path
        );
    }
    for child in &node.children {
        assert_sorted(child);
    }
}

/// Test that parsing a serialized tree leaves children sorted at every level
#[test]
fn test_roundtrip_sorts_children_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&tree_strategy(), |tree| {
            let document = serde_json::to_string(&tree).unwrap();
            let parsed: SnapshotNode = serde_json::from_str(&document).unwrap();

            assert_sorted(&parsed);
            assert_eq!(parsed.path, tree.path);
            assert_eq!(parsed.size, tree.size);
            assert_eq!(parsed.kind, tree.kind);

            Ok(())
        })
        .unwrap();
}

/// Test that a round trip reproduces an already-sorted tree exactly
#[test]
fn test_roundtrip_identity_on_sorted_trees_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&tree_strategy(), |mut tree| {
            tree.sort_children_recursive();

            let document = serde_json::to_string(&tree).unwrap();
            let parsed: SnapshotNode = serde_json::from_str(&document).unwrap();

            assert_eq!(parsed, tree);

            Ok(())
        })
        .unwrap();
}

/// Test that a tree never reports growth against itself
#[test]
fn test_diff_self_is_empty_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&tree_strategy(), |tree| {
            assert!(diff(&tree, &tree).is_empty());

            Ok(())
        })
        .unwrap();
}

/// Test that comparing the same pair twice emits the same records in
/// the same order
#[test]
fn test_diff_output_is_deterministic_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(tree_strategy(), tree_strategy()),
            |(mut newer, mut older)| {
                newer.sort_children_recursive();
                older.sort_children_recursive();

                assert_eq!(diff(&newer, &older), diff(&newer, &older));

                Ok(())
            },
        )
        .unwrap();
}
