//! Per-table configuration

use crate::action::{ActionClass, ActionKind};
use crate::contenttypes::ModelRef;
use crate::render::DATA_TABLE_TEMPLATE;
use std::fmt;

/// Default ordering key: descending primary key
pub const DEFAULT_ORDER_BY: &str = "-id";

/// Layout constraint for tables embedded in a resource browser panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserContext {
	/// Navigation pane, at most three columns
	Navigation,
	/// Content pane, at most two columns
	Content,
}

impl BrowserContext {
	/// Largest number of declared columns the pane can show
	pub fn max_columns(&self) -> usize {
		match self {
			Self::Navigation => 3,
			Self::Content => 2,
		}
	}
}

impl fmt::Display for BrowserContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Navigation => f.write_str("navigation"),
			Self::Content => f.write_str("content"),
		}
	}
}

/// Options of a table class
#[derive(Debug, Clone)]
pub struct TableOptions {
	pub(crate) name: Option<String>,
	pub(crate) verbose_name: Option<String>,
	pub(crate) model: Option<ModelRef>,
	pub(crate) order_by: String,
	pub(crate) columns: Option<Vec<String>>,
	pub(crate) multi_select: Option<bool>,
	pub(crate) actions_column: Option<bool>,
	pub(crate) browser_table: Option<BrowserContext>,
	pub(crate) row_actions: Vec<ActionClass>,
	pub(crate) table_actions: Vec<ActionClass>,
	pub(crate) template: String,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			name: None,
			verbose_name: None,
			model: None,
			order_by: DEFAULT_ORDER_BY.to_string(),
			columns: None,
			multi_select: None,
			actions_column: None,
			browser_table: None,
			row_actions: Vec::new(),
			table_actions: Vec::new(),
			template: DATA_TABLE_TEMPLATE.to_string(),
		}
	}
}

impl TableOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the table's HTML name; defaults to the class name
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = Some(verbose_name.into());
		self
	}

	/// Binds a model, directly or by content type key
	pub fn model(mut self, model: impl Into<ModelRef>) -> Self {
		self.model = Some(model.into());
		self
	}

	/// Sets the ordering key used by the default data fetch (`-field` is descending)
	pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
		self.order_by = order_by.into();
		self
	}

	/// Restricts and orders the columns explicitly
	pub fn columns<I, S>(mut self, columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.columns = Some(columns.into_iter().map(Into::into).collect());
		self
	}

	pub fn multi_select(mut self, enabled: bool) -> Self {
		self.multi_select = Some(enabled);
		self
	}

	pub fn actions_column(mut self, enabled: bool) -> Self {
		self.actions_column = Some(enabled);
		self
	}

	pub fn browser_table(mut self, context: BrowserContext) -> Self {
		self.browser_table = Some(context);
		self
	}

	pub fn row_action(mut self, action: ActionClass) -> Self {
		self.row_actions.push(action);
		self
	}

	pub fn table_action(mut self, action: ActionClass) -> Self {
		self.table_actions.push(action);
		self
	}

	pub fn template(mut self, template: impl Into<String>) -> Self {
		self.template = template.into();
		self
	}

	pub fn get_model(&self) -> Option<&ModelRef> {
		self.model.as_ref()
	}

	pub fn get_order_by(&self) -> &str {
		&self.order_by
	}

	pub fn get_columns(&self) -> Option<&[String]> {
		self.columns.as_deref()
	}

	pub fn get_browser_table(&self) -> Option<BrowserContext> {
		self.browser_table
	}

	pub fn get_template(&self) -> &str {
		&self.template
	}

	/// Multi-select is on by default when there are table actions
	pub fn is_multi_select(&self) -> bool {
		self.multi_select.unwrap_or(!self.table_actions.is_empty())
	}

	/// The actions column is on by default when there are row actions
	pub fn has_actions_column(&self) -> bool {
		self.actions_column.unwrap_or(!self.row_actions.is_empty())
	}

	/// The first declared table action of filter kind
	pub(crate) fn declared_filter_action(&self) -> Option<&ActionClass> {
		self.table_actions
			.iter()
			.find(|action| action.kind() == ActionKind::Filter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let options = TableOptions::new();
		assert_eq!(options.get_order_by(), "-id");
		assert!(!options.is_multi_select());
		assert!(!options.has_actions_column());
		assert!(options.get_columns().is_none());
		assert_eq!(options.get_template(), DATA_TABLE_TEMPLATE);
	}

	#[test]
	fn test_action_driven_defaults() {
		let options = TableOptions::new()
			.table_action(ActionClass::filter("filter"))
			.row_action(ActionClass::filter("other"));
		assert!(options.is_multi_select());
		assert!(options.has_actions_column());
		assert_eq!(options.declared_filter_action().unwrap().name(), "filter");

		let explicit = options.multi_select(false);
		assert!(!explicit.is_multi_select());
	}

	#[test]
	fn test_browser_limits() {
		assert_eq!(BrowserContext::Navigation.max_columns(), 3);
		assert_eq!(BrowserContext::Content.max_columns(), 2);
		assert_eq!(BrowserContext::Content.to_string(), "content");
	}
}
