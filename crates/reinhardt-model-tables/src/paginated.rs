//! Paginated table variants
//!
//! Both variants wrap a [`ModelTable`], render with the paginated template and
//! take their page size from [`TableSettings`]. The initial page token is read
//! from the request's `page` query parameter.
//!
//! - [`PaginatedTable`] pages the class `paginator_data` override when it has
//!   one, and the table data otherwise.
//! - [`PaginatedModelTable`] always pages the model-bound table data.

use crate::class::TableClass;
use crate::contenttypes::ModelRegistry;
use crate::error::Result;
use crate::model::Record;
use crate::pagination::{Paginated, PaginationState};
use crate::render::PAGINATED_TABLE_TEMPLATE;
use crate::settings::TableSettings;
use crate::table::{ModelTable, RequestContext};
use std::ops::Deref;
use std::sync::Arc;

/// Query parameter carrying the page token
pub const PAGE_QUERY_PARAM: &str = "page";

fn paginate(mut table: ModelTable, settings: &TableSettings) -> (ModelTable, PaginationState) {
	table.set_template(PAGINATED_TABLE_TEMPLATE);
	let mut pagination = PaginationState::new(settings);
	if let Some(page) = table.request().query(PAGE_QUERY_PARAM) {
		pagination.set_page(page);
	}
	(table, pagination)
}

/// Paginated table with an optional custom paginator data source
#[derive(Debug)]
pub struct PaginatedTable {
	table: ModelTable,
	pagination: PaginationState,
}

impl PaginatedTable {
	/// Fails with a configuration error when the class has no model and
	/// neither a `paginator_data` nor a `table_data` override.
	pub fn new(
		class: Arc<TableClass>,
		request: RequestContext,
		registry: &ModelRegistry,
		settings: &TableSettings,
	) -> Result<Self> {
		let table = ModelTable::bind(class, request, registry)?;
		let has_override = table.class().paginator_data_override().is_some()
			|| table.class().table_data_override().is_some();
		table.require_data_source(has_override, "paginator_data")?;
		let (table, pagination) = paginate(table, settings);
		Ok(Self { table, pagination })
	}

	pub fn table(&self) -> &ModelTable {
		&self.table
	}
}

impl Paginated for PaginatedTable {
	fn pagination_state(&self) -> &PaginationState {
		&self.pagination
	}

	fn pagination_state_mut(&mut self) -> &mut PaginationState {
		&mut self.pagination
	}

	fn paginator_data(&self) -> Result<Vec<Record>> {
		match self.table.class().paginator_data_override() {
			Some(fetch) => fetch(self.table.request()),
			None => self.table.table_data(),
		}
	}
}

impl Deref for PaginatedTable {
	type Target = ModelTable;

	fn deref(&self) -> &ModelTable {
		&self.table
	}
}

impl AsRef<ModelTable> for PaginatedTable {
	fn as_ref(&self) -> &ModelTable {
		&self.table
	}
}

/// Paginated table over its model's records
#[derive(Debug)]
pub struct PaginatedModelTable {
	table: ModelTable,
	pagination: PaginationState,
}

impl PaginatedModelTable {
	/// Fails with a configuration error when the class has no model and no
	/// `table_data` override.
	pub fn new(
		class: Arc<TableClass>,
		request: RequestContext,
		registry: &ModelRegistry,
		settings: &TableSettings,
	) -> Result<Self> {
		let table = ModelTable::new(class, request, registry)?;
		let (table, pagination) = paginate(table, settings);
		Ok(Self { table, pagination })
	}

	pub fn table(&self) -> &ModelTable {
		&self.table
	}
}

impl Paginated for PaginatedModelTable {
	fn pagination_state(&self) -> &PaginationState {
		&self.pagination
	}

	fn pagination_state_mut(&mut self) -> &mut PaginationState {
		&mut self.pagination
	}

	fn paginator_data(&self) -> Result<Vec<Record>> {
		self.table.table_data()
	}
}

impl Deref for PaginatedModelTable {
	type Target = ModelTable;

	fn deref(&self) -> &ModelTable {
		&self.table
	}
}

impl AsRef<ModelTable> for PaginatedModelTable {
	fn as_ref(&self) -> &ModelTable {
		&self.table
	}
}
