//! Pure queries over a forest of tree items.

use std::collections::BTreeMap;

use crate::domain::item::TreeItem;

/// Find ids that occur more than once anywhere in the forest.
///
/// Every id is collected via a pre-order traversal, regardless of
/// depth: a root id colliding with a deeply nested id counts. The
/// result is sorted ascending and free of repeats. This is a query,
/// not a validator; callers decide whether to reject.
pub fn duplicate_ids(items: &[TreeItem]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    count_ids(items, &mut counts);

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

fn count_ids<'a>(items: &'a [TreeItem], counts: &mut BTreeMap<&'a str, usize>) {
    for item in items {
        *counts.entry(item.id()).or_insert(0) += 1;
        count_ids(item.children(), counts);
    }
}

/// Get the path to a tree item by traversing ancestors.
///
/// Returns the ids from a root ancestor down to and including the
/// target, e.g. `["folder1", "subfolder1", "file1"]`, or `None` when
/// no item carries the id. Search is depth-first pre-order with
/// sibling order preserved; with duplicate ids the first match wins
/// (prevent duplicates upstream via [`duplicate_ids`]).
pub fn tree_path(items: &[TreeItem], id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if search(items, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn search(items: &[TreeItem], target: &str, path: &mut Vec<String>) -> bool {
    for item in items {
        path.push(item.id().to_string());
        if item.id() == target || search(item.children(), target, path) {
            return true;
        }
        path.pop();
    }
    false
}
