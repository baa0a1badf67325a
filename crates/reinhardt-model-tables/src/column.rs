//! Table columns
//!
//! A [`Column`] describes one display unit of a table: where its data comes
//! from, how it is labelled, and which filters transform the raw value before
//! display. Columns record a process-wide creation sequence so that declared
//! columns keep their declaration order when collected into a table class.

use crate::model::{FormField, Record};
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// CSS marker added to declared and model-derived columns
pub const NORMAL_COLUMN_CLASS: &str = "normal_column";
/// CSS marker added to the auto-generated multi-select column
pub const MULTI_SELECT_COLUMN_CLASS: &str = "multi_select_column";
/// CSS marker added to the auto-generated actions column
pub const ACTIONS_COLUMN_CLASS: &str = "actions_column";

/// Name of the auto-generated multi-select column
pub const MULTI_SELECT_COLUMN: &str = "multi_select";
/// Name of the auto-generated actions column
pub const ACTIONS_COLUMN: &str = "actions";

static CREATION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Transforms a raw cell value for display
pub type ColumnFilter = fn(&Value) -> Value;

/// Kind of auto-generated column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoColumn {
	/// Row selection checkboxes
	MultiSelect,
	/// Per-row action buttons
	Actions,
}

/// A table column
#[derive(Debug, Clone)]
pub struct Column {
	name: String,
	transform: String,
	verbose_name: String,
	form_field: Option<FormField>,
	classes: Vec<String>,
	filters: Vec<ColumnFilter>,
	auto: Option<AutoColumn>,
	creation_counter: u64,
}

impl Column {
	/// Creates a column reading the record key `transform`
	///
	/// The column is named after `transform` until a table class renames it
	/// after its declaration key.
	pub fn new(transform: impl Into<String>) -> Self {
		let transform = transform.into();
		Self {
			name: transform.clone(),
			verbose_name: transform.clone(),
			transform,
			form_field: None,
			classes: Vec::new(),
			filters: Vec::new(),
			auto: None,
			creation_counter: CREATION_COUNTER.fetch_add(1, Ordering::Relaxed),
		}
	}

	/// Creates an auto-generated column
	pub(crate) fn auto(name: &str, verbose_name: &str, auto: AutoColumn, class: &str) -> Self {
		Self::new(name)
			.verbose_name(verbose_name)
			.class(class)
			.with_auto(auto)
	}

	/// Sets the header label
	pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = verbose_name.into();
		self
	}

	/// Binds a form-field descriptor
	pub fn form_field(mut self, form_field: FormField) -> Self {
		self.form_field = Some(form_field);
		self
	}

	/// Adds a CSS class
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}

	/// Appends a display filter
	pub fn filter(mut self, filter: ColumnFilter) -> Self {
		self.filters.push(filter);
		self
	}

	fn with_auto(mut self, auto: AutoColumn) -> Self {
		self.auto = Some(auto);
		self
	}

	pub(crate) fn set_name(&mut self, name: &str) {
		self.name = name.to_string();
	}

	pub(crate) fn push_class(&mut self, class: &str) {
		self.classes.push(class.to_string());
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn transform(&self) -> &str {
		&self.transform
	}

	pub fn header(&self) -> &str {
		&self.verbose_name
	}

	pub fn bound_form_field(&self) -> Option<&FormField> {
		self.form_field.as_ref()
	}

	pub fn classes(&self) -> &[String] {
		&self.classes
	}

	/// CSS classes joined for an HTML `class` attribute
	pub fn css_classes(&self) -> String {
		self.classes.join(" ")
	}

	pub fn filters(&self) -> &[ColumnFilter] {
		&self.filters
	}

	pub fn auto_kind(&self) -> Option<AutoColumn> {
		self.auto
	}

	pub fn creation_counter(&self) -> u64 {
		self.creation_counter
	}

	/// Reads this column's value from a record and applies the filters in order
	///
	/// Auto-generated columns carry no data and yield null.
	pub fn get_data(&self, record: &Record) -> Value {
		if self.auto.is_some() {
			return Value::Null;
		}
		let raw = record.get(&self.transform).cloned().unwrap_or(Value::Null);
		self.filters.iter().fold(raw, |value, filter| filter(&value))
	}
}

/// Renders a many-valued relation as a comma-separated list of labels
///
/// Related objects are labelled by their `name`, then `label`, then `id`
/// key. Scalars are rendered as-is and null entries are skipped.
///
/// ```
/// use reinhardt_model_tables::column::filter_m2m;
/// use serde_json::json;
///
/// let tags = json!([{"id": 1, "name": "rust"}, {"id": 2, "name": "web"}]);
/// assert_eq!(filter_m2m(&tags), json!("rust, web"));
/// ```
pub fn filter_m2m(value: &Value) -> Value {
	let Value::Array(items) = value else {
		return value.clone();
	};
	let labels: Vec<String> = items
		.iter()
		.filter_map(|item| match item {
			Value::Null => None,
			Value::String(s) => Some(s.clone()),
			Value::Object(obj) => ["name", "label", "id"]
				.iter()
				.find_map(|key| obj.get(*key))
				.map(display_value),
			other => Some(display_value(other)),
		})
		.collect();
	Value::String(labels.join(", "))
}

fn display_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
