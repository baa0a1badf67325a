//! Table actions
//!
//! Actions are declared on a table class as [`ActionClass`] factories and
//! instantiated once, when the class is built. Every table instance shares
//! the same action objects.

use crate::model::Record;
use serde_json::Value;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Where an action is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
	/// Offered on each row
	Row,
	/// Offered for the whole table (bulk actions)
	Table,
	/// Filters the table's data
	Filter,
}

/// An operation invocable on a row or on the whole table
pub trait Action: Send + Sync + Debug {
	/// Unique name within a table
	fn name(&self) -> &str;

	/// Button label; defaults to the name
	fn verbose_name(&self) -> &str {
		self.name()
	}

	fn kind(&self) -> ActionKind;

	/// Narrows `records` to those matching `query`
	///
	/// Only meaningful for filter actions; the default keeps every record.
	fn filter(&self, records: Vec<Record>, _query: &str) -> Vec<Record> {
		records
	}
}

type ActionFactory = Arc<dyn Fn() -> Arc<dyn Action> + Send + Sync>;

/// A declared action: a name and a constructor for its single instance
#[derive(Clone)]
pub struct ActionClass {
	name: String,
	kind: ActionKind,
	factory: ActionFactory,
}

impl ActionClass {
	/// Declares an action built by `factory`
	pub fn new<F>(name: impl Into<String>, kind: ActionKind, factory: F) -> Self
	where
		F: Fn() -> Arc<dyn Action> + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			kind,
			factory: Arc::new(factory),
		}
	}

	/// Declares the stock [`FilterAction`]
	pub fn filter(name: impl Into<String>) -> Self {
		let name = name.into();
		let action_name = name.clone();
		Self::new(name, ActionKind::Filter, move || -> Arc<dyn Action> {
			Arc::new(FilterAction::new(action_name.clone()))
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> ActionKind {
		self.kind
	}

	pub(crate) fn instantiate(&self) -> Arc<dyn Action> {
		(self.factory)()
	}
}

impl Debug for ActionClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActionClass")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.finish_non_exhaustive()
	}
}

/// Case-insensitive substring filter over a record's string and number cells
#[derive(Debug, Clone)]
pub struct FilterAction {
	name: String,
	verbose_name: String,
}

impl FilterAction {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			verbose_name: "Filter".to_string(),
		}
	}

	pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = verbose_name.into();
		self
	}

	fn matches(record: &Record, needle: &str) -> bool {
		record.values().any(|value| match value {
			Value::String(s) => s.to_lowercase().contains(needle),
			Value::Number(n) => n.to_string().contains(needle),
			_ => false,
		})
	}
}

impl Action for FilterAction {
	fn name(&self) -> &str {
		&self.name
	}

	fn verbose_name(&self) -> &str {
		&self.verbose_name
	}

	fn kind(&self) -> ActionKind {
		ActionKind::Filter
	}

	fn filter(&self, records: Vec<Record>, query: &str) -> Vec<Record> {
		let needle = query.trim().to_lowercase();
		if needle.is_empty() {
			return records;
		}
		records
			.into_iter()
			.filter(|record| Self::matches(record, &needle))
			.collect()
	}
}
