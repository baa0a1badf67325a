//! Table class definition
//!
//! A [`TableClass`] is the immutable, shareable description of a table: its
//! options, the columns declared on it (merged with those of its bases), the
//! auto-generated selection and actions columns, and the single instances of
//! its actions. It is built once with [`TableClassBuilder`] and then shared
//! by every table instance, typically behind an `Arc` in a `static`.
//!
//! ```rust
//! use reinhardt_model_tables::{Column, TableClass, TableOptions};
//!
//! let class = TableClass::builder("ArticleTable")
//!     .options(TableOptions::new().actions_column(true))
//!     .column("title", Column::new("title").verbose_name("Title"))
//!     .column("author", Column::new("author_name"))
//!     .build()
//!     .unwrap();
//!
//! let names: Vec<_> = class.columns().keys().map(String::as_str).collect();
//! assert_eq!(names, vec!["title", "author", "actions"]);
//! ```

use crate::action::{Action, ActionKind};
use crate::column::{
	ACTIONS_COLUMN, ACTIONS_COLUMN_CLASS, AutoColumn, Column, MULTI_SELECT_COLUMN,
	MULTI_SELECT_COLUMN_CLASS, NORMAL_COLUMN_CLASS,
};
use crate::error::{Result, TableError};
use crate::model::Record;
use crate::options::{BrowserContext, TableOptions};
use crate::table::RequestContext;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Data-fetch override: produces a table's records for a request
pub type DataFn = Arc<dyn Fn(&RequestContext) -> Result<Vec<Record>> + Send + Sync>;

/// Immutable column and action registry of a table
pub struct TableClass {
	name: String,
	options: TableOptions,
	base_columns: IndexMap<String, Column>,
	columns: IndexMap<String, Column>,
	base_actions: IndexMap<String, Arc<dyn Action>>,
	filter_action: Option<Arc<dyn Action>>,
	table_data: Option<DataFn>,
	paginator_data: Option<DataFn>,
}

impl TableClass {
	/// Starts defining a table class named `name`
	pub fn builder(name: impl Into<String>) -> TableClassBuilder {
		TableClassBuilder::new(name)
	}

	/// Class name, used in error messages
	pub fn name(&self) -> &str {
		&self.name
	}

	/// HTML name of the table
	pub fn table_name(&self) -> &str {
		self.options.name.as_deref().unwrap_or(&self.name)
	}

	pub fn verbose_name(&self) -> &str {
		self.options.verbose_name.as_deref().unwrap_or(&self.name)
	}

	pub fn options(&self) -> &TableOptions {
		&self.options
	}

	/// Declared columns, inherited ones first, before allow-list filtering
	pub fn base_columns(&self) -> &IndexMap<String, Column> {
		&self.base_columns
	}

	/// Final class-level columns, including auto-generated ones
	pub fn columns(&self) -> &IndexMap<String, Column> {
		&self.columns
	}

	/// Action instances keyed by name, sorted by name
	pub fn base_actions(&self) -> &IndexMap<String, Arc<dyn Action>> {
		&self.base_actions
	}

	pub fn filter_action(&self) -> Option<&Arc<dyn Action>> {
		self.filter_action.as_ref()
	}

	/// Actions offered on each row
	pub fn row_actions(&self) -> Vec<&Arc<dyn Action>> {
		self.actions_of(|kind| kind == ActionKind::Row)
	}

	/// Actions offered for the whole table, filter included
	pub fn table_actions(&self) -> Vec<&Arc<dyn Action>> {
		self.actions_of(|kind| kind != ActionKind::Row)
	}

	fn actions_of(&self, pred: impl Fn(ActionKind) -> bool) -> Vec<&Arc<dyn Action>> {
		self.base_actions
			.values()
			.filter(|action| pred(action.kind()))
			.collect()
	}

	pub(crate) fn table_data_override(&self) -> Option<&DataFn> {
		self.table_data.as_ref()
	}

	pub(crate) fn paginator_data_override(&self) -> Option<&DataFn> {
		self.paginator_data.as_ref()
	}
}

impl fmt::Debug for TableClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableClass")
			.field("name", &self.name)
			.field("options", &self.options)
			.field("columns", &self.columns.keys().collect::<Vec<_>>())
			.field("base_actions", &self.base_actions.keys().collect::<Vec<_>>())
			.field("table_data", &self.table_data.is_some())
			.field("paginator_data", &self.paginator_data.is_some())
			.finish()
	}
}

/// Collects declarations and produces a [`TableClass`]
pub struct TableClassBuilder {
	name: String,
	options: TableOptions,
	declared: Vec<(String, Column)>,
	bases: Vec<Arc<TableClass>>,
	table_data: Option<DataFn>,
	paginator_data: Option<DataFn>,
}

impl TableClassBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			options: TableOptions::default(),
			declared: Vec::new(),
			bases: Vec::new(),
			table_data: None,
			paginator_data: None,
		}
	}

	pub fn options(mut self, options: TableOptions) -> Self {
		self.options = options;
		self
	}

	/// Declares a column under `key`; the column is renamed after the key
	pub fn column(mut self, key: impl Into<String>, column: Column) -> Self {
		self.declared.push((key.into(), column));
		self
	}

	/// Inherits the declared columns and data hooks of `base`
	///
	/// Base columns come before the columns declared here. With several
	/// bases, earlier bases come first.
	pub fn extends(mut self, base: &Arc<TableClass>) -> Self {
		self.bases.push(Arc::clone(base));
		self
	}

	/// Overrides the default model data fetch
	pub fn table_data<F>(mut self, fetch: F) -> Self
	where
		F: Fn(&RequestContext) -> Result<Vec<Record>> + Send + Sync + 'static,
	{
		self.table_data = Some(Arc::new(fetch));
		self
	}

	/// Overrides the data handed to the paginator of paginated tables
	pub fn paginator_data<F>(mut self, fetch: F) -> Self
	where
		F: Fn(&RequestContext) -> Result<Vec<Record>> + Send + Sync + 'static,
	{
		self.paginator_data = Some(Arc::new(fetch));
		self
	}

	/// Collects columns and actions and checks the layout constraints
	pub fn build(self) -> Result<Arc<TableClass>> {
		let Self {
			name,
			options,
			declared,
			bases,
			table_data,
			paginator_data,
		} = self;

		let mut seen = HashSet::new();
		let mut columns: Vec<(String, Column)> = Vec::with_capacity(declared.len());
		for (key, mut column) in declared {
			if !seen.insert(key.clone()) {
				return Err(TableError::DuplicateColumn {
					table: name,
					column: key,
				});
			}
			column.set_name(&key);
			column.push_class(NORMAL_COLUMN_CLASS);
			columns.push((key, column));
		}
		columns.sort_by_key(|(_, column)| column.creation_counter());

		for base in bases.iter().rev() {
			let mut merged: Vec<(String, Column)> = base
				.base_columns
				.iter()
				.map(|(key, column)| (key.clone(), column.clone()))
				.collect();
			merged.extend(columns);
			columns = merged;
		}
		let base_columns: IndexMap<String, Column> = columns.into_iter().collect();

		if let Some(context) = options.browser_table {
			let max = context.max_columns();
			if base_columns.len() > max {
				return Err(TableError::TooManyColumns {
					table: name,
					context,
					max,
					found: base_columns.len(),
				});
			}
		}

		let mut columns: Vec<(String, Column)> = base_columns
			.iter()
			.map(|(key, column)| (key.clone(), column.clone()))
			.collect();
		if let Some(allowed) = &options.columns {
			columns.retain(|(key, _)| allowed.contains(key));
			columns.sort_by_key(|(key, _)| allowed.iter().position(|name| name == key));
		}

		if options.is_multi_select() && options.browser_table != Some(BrowserContext::Navigation) {
			let multi_select = Column::auto(
				MULTI_SELECT_COLUMN,
				"",
				AutoColumn::MultiSelect,
				MULTI_SELECT_COLUMN_CLASS,
			);
			columns.insert(0, (MULTI_SELECT_COLUMN.to_string(), multi_select));
		}
		if options.has_actions_column() {
			let actions = Column::auto(
				ACTIONS_COLUMN,
				"Actions",
				AutoColumn::Actions,
				ACTIONS_COLUMN_CLASS,
			);
			columns.push((ACTIONS_COLUMN.to_string(), actions));
		}
		let columns: IndexMap<String, Column> = columns.into_iter().collect();

		let mut declared_actions: Vec<_> = options
			.row_actions
			.iter()
			.chain(options.table_actions.iter())
			.collect();
		declared_actions.sort_by(|a, b| a.name().cmp(b.name()));
		declared_actions.dedup_by(|a, b| a.name() == b.name());
		let base_actions: IndexMap<String, Arc<dyn Action>> = declared_actions
			.into_iter()
			.map(|class| (class.name().to_string(), class.instantiate()))
			.collect();

		let filter_action = options
			.declared_filter_action()
			.and_then(|declared| base_actions.get(declared.name()))
			.cloned();

		let table_data = table_data.or_else(|| bases.iter().find_map(|b| b.table_data.clone()));
		let paginator_data =
			paginator_data.or_else(|| bases.iter().find_map(|b| b.paginator_data.clone()));

		tracing::debug!(
			table = %name,
			columns = ?columns.keys().collect::<Vec<_>>(),
			actions = ?base_actions.keys().collect::<Vec<_>>(),
			"built table class"
		);

		Ok(Arc::new(TableClass {
			name,
			options,
			base_columns,
			columns,
			base_actions,
			filter_action,
			table_data,
			paginator_data,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::action::ActionClass;

	#[test]
	fn test_declared_columns_are_tagged() {
		let class = TableClass::builder("T")
			.column("title", Column::new("headline"))
			.build()
			.unwrap();
		let column = &class.columns()["title"];
		assert_eq!(column.name(), "title");
		assert_eq!(column.transform(), "headline");
		assert_eq!(column.classes(), &["normal_column".to_string()]);
	}

	#[test]
	fn test_duplicate_declaration_rejected() {
		let err = TableClass::builder("T")
			.column("a", Column::new("a"))
			.column("a", Column::new("b"))
			.build()
			.unwrap_err();
		assert!(matches!(err, TableError::DuplicateColumn { ref column, .. } if column == "a"));
		assert!(err.is_configuration());
	}

	#[test]
	fn test_filter_action_is_shared_instance() {
		let class = TableClass::builder("T")
			.options(TableOptions::new().table_action(ActionClass::filter("filter")))
			.build()
			.unwrap();
		let registered = &class.base_actions()["filter"];
		let filter = class.filter_action().unwrap();
		assert!(Arc::ptr_eq(registered, filter));
		assert_eq!(class.table_actions().len(), 1);
		assert!(class.row_actions().is_empty());
	}
}
