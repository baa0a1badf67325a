//! Pagination for table instances
//!
//! [`Paginated`] adds page navigation to any table that can hand over its
//! full, unpaged data. The pager is built lazily on first use and then cached
//! for the lifetime of the table instance, even if the underlying data
//! changes in the meantime.

use crate::error::Result;
use crate::model::Record;
use crate::settings::TableSettings;
use once_cell::unsync::OnceCell;
use reinhardt_paginator::{Page, PageError, Paginator};
use serde::{Deserialize, Serialize};

/// Page token selecting the complete, unpaged data
pub const SHOW_ALL_TOKEN: &str = "all";

/// Where pagination controls are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationPosition {
	Top,
	#[default]
	Bottom,
	Both,
}

/// Parses a page token into a page number
///
/// Returns `None` for the show-all marker, for anything that is not a
/// positive integer, and for zero.
///
/// ```
/// use reinhardt_model_tables::pagination::parse_page_token;
///
/// assert_eq!(parse_page_token("2"), Some(2));
/// assert_eq!(parse_page_token("all"), None);
/// assert_eq!(parse_page_token("0"), None);
/// ```
pub fn parse_page_token(token: &str) -> Option<usize> {
	token.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// Records served for a page request
#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
	/// The complete dataset, for the show-all token
	All(Vec<Record>),
	/// One page of the dataset
	Page(Page<Record>),
}

impl PageData {
	pub fn records(&self) -> &[Record] {
		match self {
			Self::All(records) => records,
			Self::Page(page) => &page.object_list,
		}
	}

	pub fn len(&self) -> usize {
		self.records().len()
	}

	pub fn is_empty(&self) -> bool {
		self.records().is_empty()
	}

	/// Page number actually served, `None` when showing all
	pub fn number(&self) -> Option<usize> {
		match self {
			Self::All(_) => None,
			Self::Page(page) => Some(page.number),
		}
	}
}

/// Per-instance pager state
#[derive(Debug)]
pub struct PaginationState {
	page: String,
	page_size: usize,
	position: PaginationPosition,
	show_all: bool,
	paginator: OnceCell<Paginator<Record>>,
}

impl PaginationState {
	/// Creates state on page "1" with the configured page size
	pub fn new(settings: &TableSettings) -> Self {
		Self {
			page: "1".to_string(),
			page_size: settings.pagination_count,
			position: settings.pagination_position,
			show_all: settings.show_all,
			paginator: OnceCell::new(),
		}
	}

	pub fn page_token(&self) -> &str {
		&self.page
	}

	pub fn set_page(&mut self, token: impl Into<String>) {
		self.page = token.into();
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn position(&self) -> PaginationPosition {
		self.position
	}

	pub fn set_position(&mut self, position: PaginationPosition) {
		self.position = position;
	}

	pub fn show_all(&self) -> bool {
		self.show_all
	}

	pub fn set_show_all(&mut self, show_all: bool) {
		self.show_all = show_all;
	}

	/// Returns true once the pager has been built
	pub fn is_resolved(&self) -> bool {
		self.paginator.get().is_some()
	}
}

/// Page navigation over a table's data
pub trait Paginated {
	fn pagination_state(&self) -> &PaginationState;

	fn pagination_state_mut(&mut self) -> &mut PaginationState;

	/// The full, unpaged data the pager slices
	fn paginator_data(&self) -> Result<Vec<Record>>;

	/// The pager, built from [`Paginated::paginator_data`] on first access
	fn paginator(&self) -> Result<&Paginator<Record>> {
		let state = self.pagination_state();
		state.paginator.get_or_try_init(|| -> Result<Paginator<Record>> {
			let data = self.paginator_data()?;
			tracing::debug!(
				count = data.len(),
				page_size = state.page_size,
				"building paginator"
			);
			Ok(Paginator::new(data, state.page_size)?)
		})
	}

	/// The current page number, `None` when the token names no page
	fn current_page(&self) -> Option<usize> {
		parse_page_token(&self.pagination_state().page)
	}

	/// Serves the records for `page`, or for the current token when `None`
	///
	/// The show-all token yields the whole dataset when show-all is enabled.
	/// Any other token that names no page serves page 1, and a page past the
	/// end serves the last page.
	fn get_page_data(&mut self, page: Option<&str>) -> Result<PageData> {
		if let Some(page) = page {
			self.pagination_state_mut().set_page(page);
		}
		let state = self.pagination_state();
		let show_all = state.page == SHOW_ALL_TOKEN && state.show_all;
		let number = parse_page_token(&state.page).unwrap_or(1);

		let paginator = self.paginator()?;
		if show_all {
			return Ok(PageData::All(paginator.object_list().to_vec()));
		}
		// Tokens beyond i64 are past any last page
		let number = i64::try_from(number).unwrap_or(i64::MAX);
		match paginator.page(number) {
			Ok(page) => Ok(PageData::Page(page)),
			Err(PageError::EmptyPage { number, num_pages }) => {
				tracing::debug!(number, num_pages, "page out of range, serving last page");
				Ok(PageData::Page(paginator.page(num_pages.max(1) as i64)?))
			}
			Err(err) => Err(err.into()),
		}
	}

	/// Current page minus one, `None` when the token names no page
	fn previous_page_number(&self) -> Option<usize> {
		self.current_page().map(|page| page - 1)
	}

	/// Current page plus one, `None` when the token names no page
	fn next_page_number(&self) -> Option<usize> {
		self.current_page().and_then(|page| page.checked_add(1))
	}

	fn has_previous(&self) -> bool {
		matches!(self.current_page(), Some(page) if page > 1)
	}

	/// Whether a page follows the current one; builds the pager if needed
	fn has_next(&self) -> Result<bool> {
		match self.current_page() {
			Some(page) => Ok(page < self.paginator()?.num_pages()),
			None => Ok(false),
		}
	}

	/// Hook for cursor-style variants that cannot count their pages
	fn has_more_data(&self) -> bool {
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::cell::Cell;

	struct Numbers {
		state: PaginationState,
		count: usize,
		fetches: Cell<usize>,
	}

	impl Numbers {
		fn new(count: usize, page_size: usize) -> Self {
			let settings = TableSettings {
				pagination_count: page_size,
				..TableSettings::default()
			};
			Self {
				state: PaginationState::new(&settings),
				count,
				fetches: Cell::new(0),
			}
		}
	}

	impl Paginated for Numbers {
		fn pagination_state(&self) -> &PaginationState {
			&self.state
		}

		fn pagination_state_mut(&mut self) -> &mut PaginationState {
			&mut self.state
		}

		fn paginator_data(&self) -> Result<Vec<Record>> {
			self.fetches.set(self.fetches.get() + 1);
			Ok((1..=self.count)
				.filter_map(|id| json!({ "id": id }).as_object().cloned())
				.collect())
		}
	}

	#[test]
	fn test_parse_page_token() {
		assert_eq!(parse_page_token(" 3 "), Some(3));
		assert_eq!(parse_page_token("-1"), None);
		assert_eq!(parse_page_token("1.5"), None);
		assert_eq!(parse_page_token(""), None);
	}

	#[test]
	fn test_paginator_is_built_once() {
		let mut table = Numbers::new(30, 25);
		assert!(!table.pagination_state().is_resolved());

		table.get_page_data(Some("1")).unwrap();
		table.get_page_data(Some("2")).unwrap();
		table.has_next().unwrap();

		assert!(table.pagination_state().is_resolved());
		assert_eq!(table.fetches.get(), 1);
	}

	#[test]
	fn test_unresolved_token_navigation() {
		let mut table = Numbers::new(30, 25);
		table.pagination_state_mut().set_page("all");
		assert_eq!(table.current_page(), None);
		assert_eq!(table.previous_page_number(), None);
		assert_eq!(table.next_page_number(), None);
		assert!(!table.has_previous());
		assert!(!table.has_next().unwrap());
	}

	#[test]
	fn test_show_all_disabled_serves_first_page() {
		let mut table = Numbers::new(30, 25);
		table.pagination_state_mut().set_show_all(false);
		let data = table.get_page_data(Some("all")).unwrap();
		assert_eq!(data.number(), Some(1));
		assert_eq!(data.len(), 25);
	}

	#[test]
	fn test_huge_token_does_not_overflow() {
		let mut table = Numbers::new(30, 25);
		table.pagination_state_mut().set_page(usize::MAX.to_string());
		assert_eq!(table.current_page(), Some(usize::MAX));
		assert_eq!(table.next_page_number(), None);
		assert_eq!(table.previous_page_number(), Some(usize::MAX - 1));
		assert!(!table.has_next().unwrap());

		let data = table.get_page_data(None).unwrap();
		assert_eq!(data.number(), Some(2));
	}

	#[test]
	fn test_empty_data_serves_blank_first_page() {
		let mut table = Numbers::new(0, 25);
		let data = table.get_page_data(Some("5")).unwrap();
		assert_eq!(data.number(), Some(1));
		assert!(data.is_empty());
		assert!(!table.has_more_data());
	}
}
