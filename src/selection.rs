//! Selection state reported back by the rendering layer.

/// Value of a treeview input as application code sees it.
///
/// The rendering layer posts back an ordered list of selected ids.
/// How that list resolves depends on the multiplicity the widget was
/// mounted with: single-select yields at most one id, multi-select
/// yields the full list, and an empty list always collapses to
/// [`SelectionValue::None`] rather than an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionValue {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl SelectionValue {
    /// Resolve the raw id list reported by the widget against the
    /// multiplicity flag the payload was built with.
    pub fn from_reported(ids: Vec<String>, multiple: bool) -> Self {
        let mut ids = ids;
        match (ids.is_empty(), multiple) {
            (true, _) => SelectionValue::None,
            (false, true) => SelectionValue::Multiple(ids),
            (false, false) => SelectionValue::Single(ids.swap_remove(0)),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SelectionValue::None)
    }

    /// Selected ids regardless of multiplicity; empty when nothing is
    /// selected.
    pub fn ids(&self) -> &[String] {
        match self {
            SelectionValue::None => &[],
            SelectionValue::Single(id) => std::slice::from_ref(id),
            SelectionValue::Multiple(ids) => ids,
        }
    }
}
