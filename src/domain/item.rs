//! Tree item: the recursive value type all other operations work on.

use std::fmt;

use serde::Serialize;

use crate::domain::error::{TreeError, TreeResult};

fn is_false(v: &bool) -> bool {
    !v
}

/// A single item in a tree view.
///
/// Items are validated at construction and immutable afterwards. The
/// `id` must be unique across the whole forest, but that is only
/// checked when a forest is stratified or turned into a payload, not
/// here (siblings and cousins are unknown at construction time).
///
/// Children are owned by value, so a directly built tree cannot
/// contain cycles.
///
/// # Examples
///
/// ```
/// use rstreeview::TreeItem;
///
/// # fn main() -> Result<(), rstreeview::TreeError> {
/// let folder = TreeItem::new("documents", "📁 Documents")?.with_children(vec![
///     TreeItem::new("doc1", "📄 Report.pdf")?,
///     TreeItem::new("doc2", "📄 Presentation.pptx")?.with_disabled(true),
/// ]);
/// assert_eq!(folder.children().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeItem {
    id: String,
    label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    caption: String,
    #[serde(skip_serializing_if = "is_false")]
    disabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeItem>,
}

impl TreeItem {
    /// Create a leaf item.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidId` when `id` is empty or contains
    /// whitespace, `TreeError::InvalidLabel` when `label` is blank
    /// after trimming.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> TreeResult<Self> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(TreeError::InvalidId(id));
        }

        let label = label.into();
        if label.trim().is_empty() {
            return Err(TreeError::InvalidLabel { id });
        }

        Ok(Self {
            id,
            label,
            caption: String::new(),
            disabled: false,
            children: Vec::new(),
        })
    }

    /// Set the secondary text shown below the label.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Mark the item non-selectable. This is a hint for the rendering
    /// layer and is carried through untouched.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace the children of this item. Order is significant: it
    /// determines serialization and path search order.
    pub fn with_children(mut self, children: Vec<TreeItem>) -> Self {
        self.children = children;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn children(&self) -> &[TreeItem] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for TreeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
