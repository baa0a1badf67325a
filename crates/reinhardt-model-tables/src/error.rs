use crate::options::BrowserContext;
use reinhardt_paginator::PageError;
use thiserror::Error;

/// Errors that can occur while defining, building or paging a table
#[derive(Debug, Error)]
pub enum TableError {
	/// A browser-embedded table declares more columns than its panel fits
	#[error("You can only assign {max} column(s) to {table} ({context} browser table, found {found})")]
	TooManyColumns {
		table: String,
		context: BrowserContext,
		max: usize,
		found: usize,
	},

	/// The table has neither a bound model nor a data-fetch override
	#[error("You must define either a model or a \"{hook}\" override on {table}")]
	MissingDataSource { table: String, hook: &'static str },

	/// Two declared columns share a name
	#[error("Column '{column}' is declared more than once on {table}")]
	DuplicateColumn { table: String, column: String },

	/// A column lookup named a column that is not registered
	#[error("Column '{column}' does not exist on {table}")]
	UnknownColumn { table: String, column: String },

	/// A lazy model reference could not be resolved
	#[error("Model not found in content type registry: {0}")]
	ModelNotFound(String),

	/// A data-fetch hook or model source failed
	#[error("Data fetch error: {0}")]
	DataFetch(String),

	/// The pager could not be built
	#[error("Paginator error: {0}")]
	Paginator(#[from] PageError),

	/// Template rendering failed
	#[error("Template error: {0}")]
	Template(String),

	/// Settings could not be parsed
	#[error("Settings error: {0}")]
	Settings(String),
}

impl TableError {
	/// Returns true for structural errors raised while defining or constructing a table
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			Self::TooManyColumns { .. } | Self::MissingDataSource { .. } | Self::DuplicateColumn { .. }
		)
	}
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
