use larch::{LarchMap, NodeView};

fn level_keys(views: &[NodeView<'_, i64, i64>]) -> Vec<Vec<i64>> {
    views
        .iter()
        .map(|node| node.entries().iter().map(|entry| *entry.key()).collect())
        .collect()
}

#[test]
fn empty_tree_is_a_single_empty_leaf() {
    let map: LarchMap<i64, i64> = LarchMap::new(3);
    let reader = map.level_reader();
    assert_eq!(reader.depth(), 0);

    let level = reader.nodes_at_depth(0);
    assert_eq!(level.len(), 1);
    assert!(level[0].is_leaf());
    assert_eq!(level[0].entry_count(), 0);
    assert_eq!(level[0].child_count(), 0);

    assert!(reader.nodes_at_depth(1).is_empty());
}

#[test]
fn levels_of_a_small_tree() {
    let mut map = LarchMap::new(3);
    for key in 0..=6 {
        map.insert(key, key);
    }

    let reader = map.level_reader();
    assert_eq!(reader.depth(), 2);

    assert_eq!(level_keys(&reader.nodes_at_depth(0)), [vec![3]]);
    assert_eq!(level_keys(&reader.nodes_at_depth(1)), [vec![1], vec![5]]);
    assert_eq!(
        level_keys(&reader.nodes_at_depth(2)),
        [vec![0], vec![2], vec![4], vec![6]]
    );

    // Below the leaves there is nothing.
    assert!(reader.nodes_at_depth(3).is_empty());

    let leaves = reader.nodes_at_depth(2);
    assert!(leaves.iter().all(NodeView::is_leaf));
    let internal = reader.nodes_at_depth(1);
    assert!(internal.iter().all(|node| node.child_count() == node.entry_count() + 1));
}

#[test]
fn levels_track_removal() {
    let mut map = LarchMap::new(3);
    for key in 0..=6 {
        map.insert(key, key);
    }
    // Deleting 6 empties its leaf; the merges cascade to the root and the
    // tree sheds a level.
    map.remove(&6);

    let reader = map.level_reader();
    assert_eq!(reader.depth(), 1);
    assert_eq!(level_keys(&reader.nodes_at_depth(0)), [vec![1, 3]]);
    assert_eq!(
        level_keys(&reader.nodes_at_depth(1)),
        [vec![0], vec![2], vec![4, 5]]
    );
}

/// Node counts per level for a large sequential build. With degree 100 and
/// lower-median splits, 1,495,598 sequential inserts settle into exactly
/// these level widths.
#[test]
fn level_widths_of_a_large_sequential_build() {
    const COUNT: i64 = 1_495_598;

    let mut map = LarchMap::new(100);
    for key in 0..COUNT {
        map.insert(key, key);
    }

    let reader = map.level_reader();
    assert_eq!(reader.depth(), 3);
    assert_eq!(reader.nodes_at_depth(0).len(), 1);
    assert_eq!(reader.nodes_at_depth(1).len(), 11);
    assert_eq!(reader.nodes_at_depth(2).len(), 575);
    assert_eq!(reader.nodes_at_depth(3).len(), 29_325);

    let total: usize = (0..=3)
        .map(|depth| {
            reader
                .nodes_at_depth(depth)
                .iter()
                .map(NodeView::entry_count)
                .sum::<usize>()
        })
        .sum();
    assert_eq!(total as i64, COUNT);
}
