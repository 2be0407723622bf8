//! Transport payload handed to the treeview rendering layer.

use itertools::Itertools;
use serde::Serialize;
use tracing::instrument;

use crate::domain::{duplicate_ids, tree_path, TreeError, TreeItem, TreeResult};

/// One or many item ids, accepted wherever selection or expansion
/// state is passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSpec {
    One(String),
    Many(Vec<String>),
}

impl IdSpec {
    /// Normalize to a plain id list: an empty single id collapses to
    /// no ids, a list is used as given (order kept, no dedup).
    fn into_ids(self) -> Vec<String> {
        match self {
            IdSpec::One(id) if id.is_empty() => Vec::new(),
            IdSpec::One(id) => vec![id],
            IdSpec::Many(ids) => ids,
        }
    }
}

impl From<&str> for IdSpec {
    fn from(id: &str) -> Self {
        IdSpec::One(id.to_string())
    }
}

impl From<String> for IdSpec {
    fn from(id: String) -> Self {
        IdSpec::One(id)
    }
}

impl From<Vec<String>> for IdSpec {
    fn from(ids: Vec<String>) -> Self {
        IdSpec::Many(ids)
    }
}

impl From<Vec<&str>> for IdSpec {
    fn from(ids: Vec<&str>) -> Self {
        IdSpec::Many(ids.into_iter().map(str::to_string).collect())
    }
}

/// Serializable state for one treeview mount point: the item forest,
/// the multiplicity flag, and the initial selection/expansion.
///
/// Item serialization drops fields at their defaults, so leaves come
/// out as plain `{"id": ..., "label": ...}` objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreePayload {
    items: Vec<TreeItem>,
    multiple: bool,
    selected: Vec<String>,
    expanded: Vec<String>,
}

impl TreePayload {
    /// Validate the forest and assemble the payload.
    ///
    /// `selected` and `expanded` are normalized to id lists. When
    /// `expanded` is absent, the ancestors of every selected item are
    /// expanded instead so the selection is visible on first render:
    /// paths are collected in `selected` order, minus the selected id
    /// itself, first occurrence wins. Selected ids not present in the
    /// forest contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::DuplicateIds` naming all offending ids when
    /// any id occurs more than once in the forest.
    #[instrument(level = "debug", skip(items))]
    pub fn build(
        items: Vec<TreeItem>,
        multiple: bool,
        selected: Option<IdSpec>,
        expanded: Option<IdSpec>,
    ) -> TreeResult<Self> {
        let duplicates = duplicate_ids(&items);
        if !duplicates.is_empty() {
            return Err(TreeError::DuplicateIds(duplicates));
        }

        let selected = selected.map(IdSpec::into_ids).unwrap_or_default();

        let expanded = match expanded {
            Some(spec) => spec.into_ids(),
            None => selected
                .iter()
                .filter_map(|id| tree_path(&items, id))
                .flat_map(|mut path| {
                    path.pop();
                    path
                })
                .unique()
                .collect(),
        };

        Ok(Self {
            items,
            multiple,
            selected,
            expanded,
        })
    }

    pub fn items(&self) -> &[TreeItem] {
        &self.items
    }

    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn expanded(&self) -> &[String] {
        &self.expanded
    }

    /// Render the payload as the JSON document the rendering layer
    /// reads from its mount point.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
