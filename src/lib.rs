//! Server-side data model for hierarchical treeview inputs.
//!
//! The crate covers the part of a treeview widget that lives on the
//! application side: building and validating item forests, turning
//! flat parent-pointer records into nested trees ([`stratify`]), and
//! assembling the JSON payload a rendering layer consumes
//! ([`TreePayload`]). Selection state posted back by the widget is
//! resolved with [`SelectionValue`].
//!
//! ```
//! use rstreeview::{TreeItem, TreePayload};
//!
//! # fn main() -> Result<(), rstreeview::TreeError> {
//! let items = vec![
//!     TreeItem::new("documents", "📁 Documents")?.with_children(vec![
//!         TreeItem::new("report", "📄 Report.pdf")?,
//!     ]),
//! ];
//!
//! // No explicit expansion: ancestors of the selection are expanded
//! // so it is visible on first render.
//! let payload = TreePayload::build(items, false, Some("report".into()), None)?;
//! assert_eq!(payload.expanded(), ["documents"]);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod payload;
pub mod selection;
pub mod util;

pub use domain::{duplicate_ids, stratify, tree_path, TreeError, TreeItem, TreeResult};
pub use payload::{IdSpec, TreePayload};
pub use selection::SelectionValue;
