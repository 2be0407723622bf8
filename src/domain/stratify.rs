//! Flat-to-tree reconstruction from parent references.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::instrument;

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::item::TreeItem;

/// Convert flat item data with parent references to a nested forest.
///
/// `parent_ids` runs parallel to `items`; `None` marks a root. Each
/// non-root item is attached as a child of the item matching its
/// declared parent id, with child order following the flat input
/// order. Output items are fresh values sharing their scalar fields
/// with the corresponding input item; `items` is never mutated, so
/// callers can keep using their inputs (any children already present
/// on an input item are not carried into the output).
///
/// Validation short-circuits in this order: length mismatch,
/// duplicate ids in the flat list, unknown parent reference, cycle in
/// the parent chains.
///
/// # Examples
///
/// ```
/// use rstreeview::{stratify, TreeItem};
///
/// # fn main() -> Result<(), rstreeview::TreeError> {
/// let items = vec![
///     TreeItem::new("root", "Root")?,
///     TreeItem::new("child1", "Child 1")?,
///     TreeItem::new("grandchild", "Grandchild")?,
/// ];
/// let forest = stratify(&items, &[None, Some("root"), Some("child1")])?;
///
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].children()[0].children()[0].id(), "grandchild");
/// # Ok(())
/// # }
/// ```
#[instrument(level = "debug", skip(items, parent_ids))]
pub fn stratify(items: &[TreeItem], parent_ids: &[Option<&str>]) -> TreeResult<Vec<TreeItem>> {
    if items.len() != parent_ids.len() {
        return Err(TreeError::LengthMismatch {
            items: items.len(),
            parents: parent_ids.len(),
        });
    }

    // Duplicates in the flat list make parent references ambiguous.
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            duplicates.insert(item.id().to_string());
        }
    }
    if !duplicates.is_empty() {
        return Err(TreeError::DuplicateIds(duplicates.into_iter().collect()));
    }

    for (index, parent_id) in parent_ids.iter().enumerate() {
        if let Some(id) = parent_id {
            if !seen.contains(id) {
                return Err(TreeError::UnknownParent {
                    id: id.to_string(),
                    index,
                });
            }
        }
    }

    detect_cycles(items, parent_ids)?;

    // Group child positions under their parent id, preserving input order.
    let mut children_of: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for (index, parent_id) in parent_ids.iter().enumerate() {
        match parent_id {
            Some(id) => children_of.entry(id).or_default().push(index),
            None => roots.push(index),
        }
    }

    Ok(roots
        .into_iter()
        .map(|index| build_subtree(index, items, &children_of))
        .collect())
}

/// Walk every item's parent chain with a per-walk visited set. A chain
/// terminating at a root is acyclic; revisiting an id is not.
fn detect_cycles(items: &[TreeItem], parent_ids: &[Option<&str>]) -> TreeResult<()> {
    let parent_of: HashMap<&str, Option<&str>> = items
        .iter()
        .zip(parent_ids)
        .map(|(item, parent_id)| (item.id(), *parent_id))
        .collect();

    for item in items {
        let mut visited = HashSet::from([item.id()]);
        let mut current = parent_of[item.id()];
        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(TreeError::Cycle(id.to_string()));
            }
            current = parent_of[id];
        }
    }
    Ok(())
}

fn build_subtree(
    index: usize,
    items: &[TreeItem],
    children_of: &HashMap<&str, Vec<usize>>,
) -> TreeItem {
    let item = &items[index];
    let children = children_of
        .get(item.id())
        .map(|indices| {
            indices
                .iter()
                .map(|&child| build_subtree(child, items, children_of))
                .collect()
        })
        .unwrap_or_default();

    item.clone().with_children(children)
}
