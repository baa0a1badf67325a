use thiserror::Error;

/// Errors raised when a page cannot be served
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
	/// The page token is not an integer
	#[error("That page number is not an integer: {0:?}")]
	NotAnInteger(String),

	/// The page number is below 1
	#[error("That page number is less than 1: {0}")]
	LessThanOne(i64),

	/// The page number is past the last page
	#[error("That page contains no results: page {number} of {num_pages}")]
	EmptyPage { number: usize, num_pages: usize },

	/// The paginator was configured with a zero page size
	#[error("Page size must be greater than zero")]
	InvalidPerPage,
}

impl PageError {
	/// Returns true for the out-of-range variants (`EmptyPage`, `LessThanOne`)
	pub fn is_empty_page(&self) -> bool {
		matches!(self, Self::EmptyPage { .. } | Self::LessThanOne(_))
	}
}

/// Result type for paginator operations
pub type Result<T> = std::result::Result<T, PageError>;
