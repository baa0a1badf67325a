//! Process-wide table settings
//!
//! Settings are loaded once (from defaults, a TOML document, or the
//! environment) and passed explicitly to the tables that need them.
//!
//! ```rust
//! use reinhardt_model_tables::TableSettings;
//!
//! let settings = TableSettings::from_toml_str("pagination_count = 50").unwrap();
//! assert_eq!(settings.pagination_count, 50);
//! assert!(settings.show_all);
//! ```

use crate::error::{Result, TableError};
use crate::pagination::PaginationPosition;
use reinhardt_paginator::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`TableSettings::pagination_count`]
pub const PAGINATION_COUNT_ENV: &str = "PAGINATION_COUNT";
/// Environment variable overriding [`TableSettings::show_all`]
pub const PAGINATION_SHOW_ALL_ENV: &str = "PAGINATION_SHOW_ALL";

/// Settings shared by every paginated table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Records per page
	pub pagination_count: usize,
	/// Whether the "all" page token may serve the unpaged data
	pub show_all: bool,
	/// Where pagination controls are rendered
	pub pagination_position: PaginationPosition,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			pagination_count: DEFAULT_PER_PAGE,
			show_all: true,
			pagination_position: PaginationPosition::default(),
		}
	}
}

impl TableSettings {
	/// Parses settings from a TOML document; missing keys keep their defaults
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source).map_err(|e| TableError::Settings(e.to_string()))?;
		settings.validate()
	}

	/// Reads overrides from the process environment on top of the defaults
	pub fn from_env() -> Result<Self> {
		Self::default().with_env_overrides(|key| std::env::var(key).ok())
	}

	/// Applies overrides looked up through `lookup`
	pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(value) = lookup(PAGINATION_COUNT_ENV) {
			self.pagination_count = value.trim().parse().map_err(|_| {
				TableError::Settings(format!("{PAGINATION_COUNT_ENV} must be an integer, got {value:?}"))
			})?;
		}
		if let Some(value) = lookup(PAGINATION_SHOW_ALL_ENV) {
			self.show_all = match value.trim().to_lowercase().as_str() {
				"true" | "1" | "yes" | "on" => true,
				"false" | "0" | "no" | "off" => false,
				_ => {
					return Err(TableError::Settings(format!(
						"{PAGINATION_SHOW_ALL_ENV} must be a boolean, got {value:?}"
					)));
				}
			};
		}
		self.validate()
	}

	fn validate(self) -> Result<Self> {
		if self.pagination_count == 0 {
			return Err(TableError::Settings(
				"pagination_count must be greater than zero".to_string(),
			));
		}
		Ok(self)
	}
}
