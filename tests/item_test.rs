//! Tests for TreeItem construction and validation

use rstest::rstest;
use rstreeview::{TreeError, TreeItem};

#[test]
fn given_id_and_label_when_constructing_then_item_is_leaf() {
    let item = TreeItem::new("doc1", "📄 Document.pdf").unwrap();

    assert_eq!(item.id(), "doc1");
    assert_eq!(item.label(), "📄 Document.pdf");
    assert!(item.is_leaf());
    assert!(!item.disabled());
}

#[rstest]
#[case("")]
#[case("has space")]
#[case("has\ttab")]
#[case("has\nnewline")]
#[case(" leading")]
#[case("trailing ")]
fn given_invalid_id_when_constructing_then_errors(#[case] id: &str) {
    let result = TreeItem::new(id, "Label");

    assert_eq!(result.unwrap_err(), TreeError::InvalidId(id.to_string()));
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t\n  ")]
fn given_blank_label_when_constructing_then_errors(#[case] label: &str) {
    let result = TreeItem::new("doc1", label);

    assert_eq!(
        result.unwrap_err(),
        TreeError::InvalidLabel {
            id: "doc1".to_string()
        }
    );
}

#[test]
fn given_label_with_surrounding_whitespace_when_constructing_then_accepted() {
    // Only fully blank labels are rejected, padding is kept verbatim
    let item = TreeItem::new("doc1", "  padded  ").unwrap();

    assert_eq!(item.label(), "  padded  ");
}

#[test]
fn given_builder_methods_when_chaining_then_fields_are_set() {
    let item = TreeItem::new("folder", "Folder")
        .unwrap()
        .with_caption("3 files")
        .with_disabled(true)
        .with_children(vec![TreeItem::new("file", "File").unwrap()]);

    assert_eq!(item.caption(), "3 files");
    assert!(item.disabled());
    assert_eq!(item.children().len(), 1);
    assert!(!item.is_leaf());
}

#[test]
fn given_nested_children_when_constructing_then_order_is_preserved() {
    let folder = TreeItem::new("folder", "Folder").unwrap().with_children(vec![
        TreeItem::new("b", "B").unwrap(),
        TreeItem::new("a", "A").unwrap(),
    ]);

    let ids: Vec<_> = folder.children().iter().map(|c| c.id()).collect();
    assert_eq!(ids, ["b", "a"]);
}
