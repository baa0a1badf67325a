//! Template rendering for tables
//!
//! Tables are rendered with the Tera template engine. Two templates ship with
//! the crate: the plain data table and the paginated data table, which adds
//! page navigation above and/or below the rows.

use crate::action::Action;
use crate::column::AutoColumn;
use crate::error::{Result, TableError};
use crate::model::Record;
use crate::pagination::{PageData, Paginated, PaginationPosition};
use crate::table::ModelTable;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tera::Tera;

/// Template of non-paginated tables
pub const DATA_TABLE_TEMPLATE: &str = "tables/_data_table.html";
/// Template of the paginated variants
pub const PAGINATED_TABLE_TEMPLATE: &str = "tables/_paginated_data_table.html";
const PAGINATION_TEMPLATE: &str = "tables/_pagination.html";

const DATA_TABLE_SOURCE: &str = include_str!("../templates/tables/_data_table.html");
const PAGINATED_TABLE_SOURCE: &str = include_str!("../templates/tables/_paginated_data_table.html");
const PAGINATION_SOURCE: &str = include_str!("../templates/tables/_pagination.html");

/// Column header context
#[derive(Debug, Clone, Serialize)]
pub struct ColumnContext {
	pub name: String,
	pub header: String,
	pub classes: String,
	pub auto: Option<AutoColumn>,
}

/// One rendered cell
#[derive(Debug, Clone, Serialize)]
pub struct CellContext {
	pub column: String,
	pub classes: String,
	pub auto: Option<AutoColumn>,
	pub value: String,
}

/// One rendered row
#[derive(Debug, Clone, Serialize)]
pub struct RowContext {
	pub id: String,
	pub cells: Vec<CellContext>,
}

/// Action button context
#[derive(Debug, Clone, Serialize)]
pub struct ActionContext {
	pub name: String,
	pub label: String,
}

/// Page navigation context
#[derive(Debug, Clone, Serialize)]
pub struct PaginationContext {
	pub page: Option<usize>,
	pub num_pages: usize,
	pub count: usize,
	pub showing_all: bool,
	pub show_all_url: bool,
	pub has_previous: bool,
	pub has_next: bool,
	pub previous_page: Option<usize>,
	pub next_page: Option<usize>,
	pub has_more_data: bool,
	pub position: PaginationPosition,
}

/// Everything a table template needs
#[derive(Debug, Clone, Serialize)]
pub struct TableContext {
	pub name: String,
	pub verbose_name: String,
	#[serde(skip)]
	pub template: String,
	pub columns: Vec<ColumnContext>,
	pub rows: Vec<RowContext>,
	pub row_actions: Vec<ActionContext>,
	pub table_actions: Vec<ActionContext>,
	pub pagination: Option<PaginationContext>,
}

impl TableContext {
	/// Builds the context of `table` showing `records`
	pub fn for_table(table: &ModelTable, records: &[Record]) -> Self {
		let class = table.class();
		let columns: Vec<ColumnContext> = table
			.columns()
			.values()
			.map(|column| ColumnContext {
				name: column.name().to_string(),
				header: column.header().to_string(),
				classes: column.css_classes(),
				auto: column.auto_kind(),
			})
			.collect();
		let rows = records
			.iter()
			.zip(table.rows(records))
			.map(|(record, values)| RowContext {
				id: record.get("id").map(display).unwrap_or_default(),
				cells: columns
					.iter()
					.zip(values.iter())
					.map(|(column, value)| CellContext {
						column: column.name.clone(),
						classes: column.classes.clone(),
						auto: column.auto,
						value: display(value),
					})
					.collect(),
			})
			.collect();
		let action_context = |action: &Arc<dyn Action>| ActionContext {
			name: action.name().to_string(),
			label: action.verbose_name().to_string(),
		};

		Self {
			name: table.name().to_string(),
			verbose_name: class.verbose_name().to_string(),
			template: table.template().to_string(),
			columns,
			rows,
			row_actions: class.row_actions().into_iter().map(action_context).collect(),
			table_actions: class.table_actions().into_iter().map(action_context).collect(),
			pagination: None,
		}
	}

	/// Serves the current page of `table` and builds its context
	pub fn for_paginated<P>(table: &mut P) -> Result<Self>
	where
		P: Paginated + AsRef<ModelTable>,
	{
		let data = table.get_page_data(None)?;
		let paginator = table.paginator()?;
		let state = table.pagination_state();
		let num_pages = paginator.num_pages();
		// Navigation follows the page actually served, which differs from
		// the token when an out-of-range page was clamped
		let (has_previous, has_next, previous_page, next_page) = match data.number() {
			Some(served) => (
				served > 1,
				served < num_pages,
				Some(served - 1),
				served.checked_add(1),
			),
			None => (
				table.has_previous(),
				table.has_next()?,
				table.previous_page_number(),
				table.next_page_number(),
			),
		};
		let pagination = PaginationContext {
			page: data.number(),
			num_pages,
			count: paginator.count(),
			showing_all: matches!(data, PageData::All(_)),
			show_all_url: state.show_all(),
			has_previous,
			has_next,
			previous_page,
			next_page,
			has_more_data: table.has_more_data(),
			position: state.position(),
		};
		let mut context = Self::for_table(table.as_ref(), data.records());
		context.pagination = Some(pagination);
		Ok(context)
	}
}

fn display(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Renders table contexts with Tera
pub struct TableRenderer {
	tera: Arc<Tera>,
}

impl TableRenderer {
	/// Creates a renderer loaded with the bundled templates
	pub fn new() -> Result<Self> {
		let mut tera = Tera::default();
		tera.add_raw_templates(vec![
			(DATA_TABLE_TEMPLATE, DATA_TABLE_SOURCE),
			(PAGINATION_TEMPLATE, PAGINATION_SOURCE),
			(PAGINATED_TABLE_TEMPLATE, PAGINATED_TABLE_SOURCE),
		])
		.map_err(|e| TableError::Template(format!("Failed to load table templates: {}", e)))?;
		Ok(Self {
			tera: Arc::new(tera),
		})
	}

	/// Uses a caller-configured Tera instance, e.g. with overridden templates
	pub fn with_tera(tera: Tera) -> Self {
		Self {
			tera: Arc::new(tera),
		}
	}

	/// Renders `context` with the template its table selected
	pub fn render(&self, context: &TableContext) -> Result<String> {
		let mut tera_context = tera::Context::new();
		tera_context.insert("table", context);
		self.tera.render(&context.template, &tera_context).map_err(|e| {
			TableError::Template(format!("Failed to render {}: {}", context.template, e))
		})
	}
}
