//! Display wrappers for documents and fuel summaries.
//!
//! The document tree carries no presentation logic of its own. Instead,
//! newtype wrappers borrow a value and implement [`std::fmt::Display`] for one
//! output context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Document     │    │    Wrappers     │    │    Formatted    │
//! │  (Page, Table)  │───▶│ PlainText / Md  │───▶│     Output      │
//! │                 │    │                 │    │ (Terminal/File) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`text`]: fixed-width plain text, close to the printed form
//! - [`markdown`]: markdown for rich terminal display
//! - [`fuel`]: tabular view of a [`FuelSummary`](crate::fuel::FuelSummary)
//!
//! ```rust
//! use flightbrief_core::{
//!     display::PlainText,
//!     document::{Page, Row, Table, TextStyle},
//! };
//!
//! let page = Page::new("Blank")
//!     .text(TextStyle::Notice, "Intentionally Left Blank")
//!     .table(Table::new().row(Row::new(["A/C:", "VGA"])));
//!
//! let output = PlainText(&page).to_string();
//! assert!(output.contains("Intentionally Left Blank"));
//! assert!(output.contains("A/C:  VGA"));
//! ```

pub mod fuel;
pub mod markdown;
pub mod text;

pub use fuel::FuelTable;
pub use markdown::Markdown;
pub use text::PlainText;
