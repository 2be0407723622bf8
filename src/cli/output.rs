//! Terminal rendering of item forests

use termtree::Tree;

use crate::domain::TreeItem;

pub trait ToDisplayTree {
    fn to_display_tree(&self) -> Tree<String>;
}

impl ToDisplayTree for TreeItem {
    fn to_display_tree(&self) -> Tree<String> {
        let mut text = self.label().to_string();
        if !self.caption().is_empty() {
            text.push_str(&format!(" [{}]", self.caption()));
        }
        if self.disabled() {
            text.push_str(" (disabled)");
        }

        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|child| child.to_display_tree())
            .collect();

        Tree::new(text).with_leaves(leaves)
    }
}
