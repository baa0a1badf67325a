//! Model-bound table instances
//!
//! A [`ModelTable`] is created per request from a shared [`TableClass`]. It
//! copies the class columns and extends them with one column per model
//! field, so a table bound to a model needs no column declarations at all.

use crate::class::TableClass;
use crate::column::{ACTIONS_COLUMN, Column, MULTI_SELECT_COLUMN, NORMAL_COLUMN_CLASS, filter_m2m};
use crate::contenttypes::ModelRegistry;
use crate::error::{Result, TableError};
use crate::model::{ModelDescriptor, Record, fields_for_model, order_records};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// The parts of an inbound request a table reads
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
	path: String,
	query: HashMap<String, String>,
}

impl RequestContext {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			query: HashMap::new(),
		}
	}

	/// Adds a query parameter
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(key.into(), value.into());
		self
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn query(&self, key: &str) -> Option<&str> {
		self.query.get(key).map(String::as_str)
	}
}

// Multi-select first, then allow-list order, then the actions column.
fn allow_list_rank(allowed: &[String], key: &str) -> (u8, usize) {
	match key {
		MULTI_SELECT_COLUMN => (0, 0),
		ACTIONS_COLUMN => (2, 0),
		_ => (
			1,
			allowed
				.iter()
				.position(|name| name == key)
				.unwrap_or(usize::MAX),
		),
	}
}

/// A table instance bound to a model
#[derive(Debug)]
pub struct ModelTable {
	class: Arc<TableClass>,
	request: RequestContext,
	model: Option<Arc<dyn ModelDescriptor>>,
	columns: IndexMap<String, Column>,
	template: String,
}

impl ModelTable {
	/// Builds the per-request table
	///
	/// Resolves the bound model through `registry` (a lookup failure is
	/// returned as-is) and adds a column for each of its editable fields,
	/// keeping the actions column last. Fails with
	/// [`TableError::MissingDataSource`] when the class has neither a model
	/// nor a `table_data` override.
	pub fn new(
		class: Arc<TableClass>,
		request: RequestContext,
		registry: &ModelRegistry,
	) -> Result<Self> {
		let table = Self::bind(class, request, registry)?;
		table.require_data_source(table.class.table_data_override().is_some(), "table_data")?;
		Ok(table)
	}

	/// Fails unless the table has a model or `has_override` is set
	pub(crate) fn require_data_source(&self, has_override: bool, hook: &'static str) -> Result<()> {
		if self.model.is_none() && !has_override {
			return Err(TableError::MissingDataSource {
				table: self.class.name().to_string(),
				hook,
			});
		}
		Ok(())
	}

	/// Resolves the model and derives columns without checking data sources
	pub(crate) fn bind(
		class: Arc<TableClass>,
		request: RequestContext,
		registry: &ModelRegistry,
	) -> Result<Self> {
		let model = match class.options().get_model() {
			Some(model_ref) => Some(model_ref.resolve(registry)?),
			None => None,
		};

		let mut columns = class.columns().clone();
		if let Some(model) = &model {
			let meta = model.meta();
			let many = meta.many_to_many();
			let mut derived: IndexMap<String, Column> = IndexMap::new();
			for (name, field) in fields_for_model(meta, class.options().get_columns()) {
				let label = field.label.clone().unwrap_or_else(|| name.clone());
				let mut column = Column::new(name.as_str())
					.verbose_name(label)
					.class(NORMAL_COLUMN_CLASS)
					.form_field(field);
				if many.contains(&name.as_str()) {
					column = column.filter(filter_m2m);
				}
				derived.insert(name, column);
			}
			if let Some(actions) = columns.shift_remove(ACTIONS_COLUMN) {
				derived.insert(ACTIONS_COLUMN.to_string(), actions);
			}
			tracing::debug!(
				table = %class.name(),
				model = %meta.content_type_key(),
				columns = ?derived.keys().collect::<Vec<_>>(),
				"derived model columns"
			);
			columns.extend(derived);
			if let Some(allowed) = class.options().get_columns() {
				columns.sort_by(|a, _, b, _| {
					allow_list_rank(allowed, a).cmp(&allow_list_rank(allowed, b))
				});
			}
		}

		let template = class.options().get_template().to_string();
		Ok(Self {
			class,
			request,
			model,
			columns,
			template,
		})
	}

	pub fn class(&self) -> &Arc<TableClass> {
		&self.class
	}

	pub fn name(&self) -> &str {
		self.class.table_name()
	}

	pub fn request(&self) -> &RequestContext {
		&self.request
	}

	/// The resolved model, if the class binds one
	pub fn model(&self) -> Option<&Arc<dyn ModelDescriptor>> {
		self.model.as_ref()
	}

	pub fn columns(&self) -> &IndexMap<String, Column> {
		&self.columns
	}

	pub fn column(&self, name: &str) -> Result<&Column> {
		self.columns
			.get(name)
			.ok_or_else(|| TableError::UnknownColumn {
				table: self.class.name().to_string(),
				column: name.to_string(),
			})
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	pub(crate) fn set_template(&mut self, template: &str) {
		self.template = template.to_string();
	}

	/// Fetches the table's records
	///
	/// Uses the class `table_data` override when present, otherwise every
	/// record of the model ordered by the configured ordering key.
	pub fn table_data(&self) -> Result<Vec<Record>> {
		if let Some(fetch) = self.class.table_data_override() {
			return fetch(&self.request);
		}
		let model = self.model.as_ref().ok_or_else(|| TableError::MissingDataSource {
			table: self.class.name().to_string(),
			hook: "table_data",
		})?;
		let mut records = model.all()?;
		order_records(&mut records, self.class.options().get_order_by());
		Ok(records)
	}

	/// Table data narrowed by the class filter action, if it declares one
	pub fn filtered_data(&self, query: &str) -> Result<Vec<Record>> {
		let records = self.table_data()?;
		Ok(match self.class.filter_action() {
			Some(action) => action.filter(records, query),
			None => records,
		})
	}

	/// Cell values of `records`, one vector per record in column order
	pub fn rows(&self, records: &[Record]) -> Vec<Vec<Value>> {
		records
			.iter()
			.map(|record| self.columns.values().map(|c| c.get_data(record)).collect())
			.collect()
	}
}
