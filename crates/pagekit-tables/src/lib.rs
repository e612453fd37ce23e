//! # Pagekit Tables
//!
//! Renders tabular data as striped Tailwind tables and formats cell values
//! for people rather than machines.
//!
//! ```
//! use pagekit_components::{Component, Page};
//! use pagekit_tables::{DataFrame, TableExt, Value};
//!
//! let mut frame = DataFrame::new(["region", "sales"]);
//! frame
//!     .push_row([("region", Value::from("North")), ("sales", Value::from(1_340_000_i64))])
//!     .push_row([("region", Value::from("South")), ("sales", Value::from(980_500_i64))]);
//!
//! let mut page = Page::new("Sales");
//! page.add_table(&frame);
//!
//! let html = page.render();
//! assert!(html.contains(">1.3 million</td>"));
//! assert!(html.contains(">980,500</td>"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod format;
pub mod table;
pub mod value;

pub use format::format_value;
pub use table::{DataFrame, TableExt, TableSource, render_table};
pub use value::{ToIso8601, Value};
