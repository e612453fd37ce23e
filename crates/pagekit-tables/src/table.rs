//! Table sources and the table renderer

use crate::format::format_value;
use crate::value::Value;
use pagekit_components::{ContentContainer, Html};
use std::collections::HashMap;

const TABLE_OPEN: &str = r#"<div class="p-8"><div class="relative overflow-x-auto shadow-md sm:rounded-lg"><table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"><thead class="text-xs text-gray-700 uppercase bg-gray-50 dark:bg-gray-700 dark:text-gray-400"><tr>"#;
const HEADER_CELL_OPEN: &str = r#"<th scope="col" class="px-6 py-3">"#;
const HEAD_CLOSE: &str = "</tr></thead><tbody>";
const EVEN_ROW_OPEN: &str = r#"<tr class="bg-white border-b dark:bg-gray-900 dark:border-gray-700">"#;
const ODD_ROW_OPEN: &str = r#"<tr class="bg-gray-50 border-b dark:bg-gray-800 dark:border-gray-700">"#;
const CELL_OPEN: &str = r#"<td class="px-6 py-4">"#;
const TABLE_CLOSE: &str = "</tbody></table></div></div>";

/// Column-oriented data that can be rendered as a table
pub trait TableSource {
	/// Column names in display order
	fn columns(&self) -> &[String];

	/// Name of the row index, rendered as an extra leading header
	fn index_name(&self) -> Option<&str> {
		None
	}

	/// Number of rows
	fn row_count(&self) -> usize;

	/// Value at `row` in `column`, `None` when absent
	fn cell(&self, row: usize, column: &str) -> Option<&Value>;
}

/// In-memory rows keyed by column name
///
/// ```
/// use pagekit_tables::{DataFrame, TableSource, Value};
///
/// let mut frame = DataFrame::new(["city", "population"]);
/// frame.push_row([("city", Value::from("Lyon")), ("population", Value::from(522_250_i64))]);
///
/// assert_eq!(frame.row_count(), 1);
/// assert_eq!(frame.cell(0, "city"), Some(&Value::from("Lyon")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
	columns: Vec<String>,
	index_name: Option<String>,
	rows: Vec<HashMap<String, Value>>,
}

impl DataFrame {
	/// Creates an empty frame with the given columns
	pub fn new<I, S>(columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			columns: columns.into_iter().map(Into::into).collect(),
			index_name: None,
			rows: Vec::new(),
		}
	}

	/// Names the row index
	pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
		self.index_name = Some(name.into());
		self
	}

	/// Appends a row
	///
	/// Columns missing from `cells` read back as absent. Cells for unknown
	/// columns are stored but never rendered.
	pub fn push_row<I, K>(&mut self, cells: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, Value)>,
		K: Into<String>,
	{
		self.rows
			.push(cells.into_iter().map(|(k, v)| (k.into(), v)).collect());
		self
	}
}

impl TableSource for DataFrame {
	fn columns(&self) -> &[String] {
		&self.columns
	}

	fn index_name(&self) -> Option<&str> {
		self.index_name.as_deref()
	}

	fn row_count(&self) -> usize {
		self.rows.len()
	}

	fn cell(&self, row: usize, column: &str) -> Option<&Value> {
		self.rows.get(row).and_then(|cells| cells.get(column))
	}
}

/// Renders `source` as a striped Tailwind table
///
/// Cells go through [`format_value`]; absent cells render as
/// [`Value::Null`]. Header and cell text is inserted verbatim.
pub fn render_table(source: &impl TableSource) -> Html {
	let columns = source.columns();
	let rows = source.row_count();
	tracing::debug!(rows, columns = columns.len(), "rendering table");

	let mut html = String::from(TABLE_OPEN);
	if let Some(index) = source.index_name() {
		push_header_cell(&mut html, index);
	}
	for column in columns {
		push_header_cell(&mut html, column);
	}
	html.push_str(HEAD_CLOSE);

	for row in 0..rows {
		html.push_str(if row % 2 == 0 {
			EVEN_ROW_OPEN
		} else {
			ODD_ROW_OPEN
		});
		for column in columns {
			let value = source.cell(row, column).unwrap_or(&Value::Null);
			html.push_str(CELL_OPEN);
			html.push_str(&format_value(value));
			html.push_str("</td>");
		}
		html.push_str("</tr>");
	}

	html.push_str(TABLE_CLOSE);
	Html::new(html)
}

fn push_header_cell(html: &mut String, text: &str) {
	html.push_str(HEADER_CELL_OPEN);
	html.push_str(text);
	html.push_str("</th>");
}

/// Adds [`add_table`](TableExt::add_table) to pages and cards
pub trait TableExt: ContentContainer {
	/// Appends `source` rendered with [`render_table`]
	fn add_table(&mut self, source: &impl TableSource) -> &mut Self {
		self.add(render_table(source))
	}
}

impl<T: ContentContainer> TableExt for T {}
