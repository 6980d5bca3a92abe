use linked_bst::{NotFoundError, OrderedTree};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn in_order(tree: &OrderedTree<i32>) -> Vec<i32> {
    tree.in_order().copied().collect()
}

/// `[5, 3, 8, 1, 4]` added in that order.
fn scenario_tree() -> OrderedTree<i32> {
    OrderedTree::from_items([5, 3, 8, 1, 4])
}

#[test]
fn insert_then_traverse() {
    init_logger();
    let tree = scenario_tree();

    assert_eq!(in_order(&tree), [1, 3, 4, 5, 8]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.size(), 5);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8]);
}

#[test]
fn remove_present_item() {
    init_logger();
    let mut tree = scenario_tree();

    assert_eq!(tree.remove(&3), Ok(3));
    assert_eq!(in_order(&tree), [1, 4, 5, 8]);
    assert_eq!(tree.size(), 4);
}

#[test]
fn remove_missing_item() {
    init_logger();
    let mut tree = scenario_tree();

    assert_eq!(tree.remove(&99), Err(NotFoundError));
    assert_eq!(tree, scenario_tree());
    assert_eq!(tree.size(), 5);
}

#[test]
fn rebalance_sorted_chain() {
    init_logger();
    let mut tree = OrderedTree::from_items(1..=7);
    assert_eq!(tree.height(), 6);

    tree.rebalance();

    assert_eq!(tree.height(), 2);
    assert_eq!(in_order(&tree), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.size(), 7);
}

#[test]
fn successor_and_predecessor() {
    let tree = scenario_tree();

    assert_eq!(tree.successor(&4), Some(5));
    assert_eq!(tree.predecessor(&4), Some(3));
    assert_eq!(tree.successor(&8), None);
    assert_eq!(tree.predecessor(&1), None);
}

#[test]
fn range_find() {
    let tree = scenario_tree();

    assert_eq!(tree.range_find(&3, &5), [3, 4, 5]);
}

#[test]
fn sizes_track_mutations() {
    init_logger();
    let mut tree = OrderedTree::new();

    for (added, item) in [4, 2, 6, 2, 4].into_iter().enumerate() {
        tree.add(item);
        assert_eq!(tree.size(), added + 1);
    }

    assert_eq!(tree.replace(&6, 7), Some(6));
    assert_eq!(tree.size(), 5);

    assert_eq!(tree.remove(&2), Ok(2));
    assert_eq!(tree.size(), 4);
    assert!(tree.remove(&6).is_err());
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.iter().count(), 4);

    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn duplicates_are_kept_to_the_right() {
    let tree = OrderedTree::from_items(["m", "m", "a"]);

    // The second "m" hangs right of the first, "a" to its left.
    assert_eq!(tree.to_string(), "| m\nm\n| a\n");
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), ["a", "m", "m"]);
}

#[test]
fn words_are_searchable() {
    let words = ["pear", "apple", "quince", "fig", "banana", "cherry", "kiwi"];
    let mut tree = words.iter().map(|w| w.to_string()).collect::<OrderedTree<_>>();

    for word in words {
        assert_eq!(tree.find(&word.to_string()).map(String::as_str), Some(word));
    }
    assert!(!tree.contains(&"grape".to_string()));

    tree.rebalance();
    assert_eq!(tree.height(), 2);
    assert_eq!(
        tree.successor(&"cherry".to_string()).as_deref(),
        Some("fig")
    );
}

#[test]
fn add_with_std_ops_add_imported() {
    use std::ops::Add;

    let mut tree = OrderedTree::new();
    for word in ["b", "a", "c"] {
        tree.add(word);
    }

    assert_eq!(tree.size(), 1usize.add(2));
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
}
