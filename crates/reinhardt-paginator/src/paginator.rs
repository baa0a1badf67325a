//! Sequence paginator

use crate::error::{PageError, Result};
use crate::page::Page;

/// Default page size used by [`Paginator::with_default_size`]
pub const DEFAULT_PER_PAGE: usize = 25;

/// Slices an ordered sequence into fixed-size pages
///
/// The paginator owns the full sequence. Page numbers are 1-based, and the
/// last page absorbs up to `orphans` trailing items instead of leaving them
/// on a page of their own.
///
/// # Examples
///
/// ```
/// use reinhardt_paginator::Paginator;
///
/// let paginator = Paginator::new((1..=30).collect::<Vec<_>>(), 25).unwrap();
/// assert_eq!(paginator.num_pages(), 2);
///
/// let page = paginator.page(2).unwrap();
/// assert_eq!(page.object_list, vec![26, 27, 28, 29, 30]);
/// assert!(page.has_previous());
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<T> {
	object_list: Vec<T>,
	per_page: usize,
	orphans: usize,
	allow_empty_first_page: bool,
}

impl<T: Clone> Paginator<T> {
	/// Creates a paginator over `object_list` with `per_page` items per page
	pub fn new(object_list: Vec<T>, per_page: usize) -> Result<Self> {
		if per_page == 0 {
			return Err(PageError::InvalidPerPage);
		}
		Ok(Self {
			object_list,
			per_page,
			orphans: 0,
			allow_empty_first_page: true,
		})
	}

	/// Creates a paginator with [`DEFAULT_PER_PAGE`] items per page
	pub fn with_default_size(object_list: Vec<T>) -> Self {
		Self {
			object_list,
			per_page: DEFAULT_PER_PAGE,
			orphans: 0,
			allow_empty_first_page: true,
		}
	}

	/// Sets how many trailing items may be merged into the last page
	pub fn orphans(mut self, orphans: usize) -> Self {
		self.orphans = orphans;
		self
	}

	/// Sets whether an empty sequence still yields a (blank) first page
	pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
		self.allow_empty_first_page = allow;
		self
	}

	/// Items per page
	pub fn per_page(&self) -> usize {
		self.per_page
	}

	/// Total number of items
	pub fn count(&self) -> usize {
		self.object_list.len()
	}

	/// The full, unpaged sequence
	pub fn object_list(&self) -> &[T] {
		&self.object_list
	}

	/// Total number of pages
	pub fn num_pages(&self) -> usize {
		let count = self.count();
		if count == 0 && !self.allow_empty_first_page {
			return 0;
		}
		let hits = count.saturating_sub(self.orphans).max(1);
		hits.div_ceil(self.per_page)
	}

	/// Iterates over the valid page numbers
	pub fn page_range(&self) -> std::ops::RangeInclusive<usize> {
		1..=self.num_pages()
	}

	/// Parses a textual page token into a page number
	///
	/// ```
	/// use reinhardt_paginator::{Paginator, PageError};
	///
	/// assert_eq!(Paginator::<i32>::parse_number(" 3 "), Ok(3));
	/// assert!(matches!(
	///     Paginator::<i32>::parse_number("all"),
	///     Err(PageError::NotAnInteger(_))
	/// ));
	/// ```
	pub fn parse_number(token: &str) -> Result<i64> {
		token
			.trim()
			.parse::<i64>()
			.map_err(|_| PageError::NotAnInteger(token.to_string()))
	}

	/// Checks that `number` names an existing page
	pub fn validate_number(&self, number: i64) -> Result<usize> {
		if number < 1 {
			return Err(PageError::LessThanOne(number));
		}
		let number = number as usize;
		let num_pages = self.num_pages();
		if number > num_pages && !(number == 1 && self.allow_empty_first_page) {
			return Err(PageError::EmptyPage { number, num_pages });
		}
		Ok(number)
	}

	/// Returns the page with the given 1-based number
	pub fn page(&self, number: i64) -> Result<Page<T>> {
		let number = self.validate_number(number)?;
		Ok(self.slice(number))
	}

	/// Returns the page named by `token`, falling back instead of failing
	///
	/// A token that is not an integer yields the first page; a number outside
	/// the valid range yields the last page.
	pub fn get_page(&self, token: &str) -> Page<T> {
		let number = match Self::parse_number(token) {
			Ok(number) => number,
			Err(_) => 1,
		};
		match self.validate_number(number) {
			Ok(number) => self.slice(number),
			Err(err) => {
				tracing::debug!(%err, "page out of range, serving last page");
				self.slice(self.num_pages().max(1))
			}
		}
	}

	fn slice(&self, number: usize) -> Page<T> {
		let count = self.count();
		let bottom = ((number - 1) * self.per_page).min(count);
		let mut top = bottom + self.per_page;
		if top + self.orphans >= count {
			top = count;
		}
		Page::new(
			self.object_list[bottom..top].to_vec(),
			number,
			self.num_pages(),
			count,
			self.per_page,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero_per_page_rejected() {
		assert_eq!(
			Paginator::new(vec![1, 2, 3], 0).unwrap_err(),
			PageError::InvalidPerPage
		);
	}

	#[test]
	fn test_orphans_merge_into_last_page() {
		let paginator = Paginator::new((1..=11).collect::<Vec<_>>(), 5)
			.unwrap()
			.orphans(1);
		assert_eq!(paginator.num_pages(), 2);
		assert_eq!(paginator.page(2).unwrap().len(), 6);
	}

	#[test]
	fn test_empty_sequence() {
		let paginator: Paginator<i32> = Paginator::new(vec![], 10).unwrap();
		assert_eq!(paginator.num_pages(), 1);
		assert!(paginator.page(1).unwrap().is_empty());

		let strict = paginator.allow_empty_first_page(false);
		assert_eq!(strict.num_pages(), 0);
		assert!(strict.page(1).is_err());
	}
}
