//! A single page of results

use serde::Serialize;

/// Represents a single page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
	/// Items in this page
	pub object_list: Vec<T>,
	/// Current page number (1-indexed)
	pub number: usize,
	/// Total number of pages
	pub num_pages: usize,
	/// Total number of items across all pages
	pub count: usize,
	/// Items per page
	pub per_page: usize,
}

impl<T> Page<T> {
	/// Creates a new page
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_paginator::Page;
	///
	/// let page = Page::new(vec!["a", "b", "c"], 1, 10, 30, 3);
	/// assert_eq!(page.number, 1);
	/// assert_eq!(page.len(), 3);
	/// ```
	pub fn new(
		object_list: Vec<T>,
		number: usize,
		num_pages: usize,
		count: usize,
		per_page: usize,
	) -> Self {
		Self {
			object_list,
			number,
			num_pages,
			count,
			per_page,
		}
	}

	/// Returns true if there is a page after this one
	pub fn has_next(&self) -> bool {
		self.number < self.num_pages
	}

	/// Returns true if there is a page before this one
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// Returns true if either neighbour exists
	pub fn has_other_pages(&self) -> bool {
		self.has_next() || self.has_previous()
	}

	/// Number of the next page, if any
	pub fn next_page_number(&self) -> Option<usize> {
		self.has_next().then_some(self.number + 1)
	}

	/// Number of the previous page, if any
	pub fn previous_page_number(&self) -> Option<usize> {
		self.has_previous().then(|| self.number - 1)
	}

	/// Returns the 1-based index of the first item on this page
	///
	/// Zero when the whole sequence is empty.
	///
	/// ```
	/// use reinhardt_paginator::Page;
	///
	/// let page = Page::new(vec!["a", "b", "c"], 2, 5, 15, 3);
	/// assert_eq!(page.start_index(), 4);
	/// ```
	pub fn start_index(&self) -> usize {
		if self.count == 0 {
			0
		} else {
			self.per_page * (self.number - 1) + 1
		}
	}

	/// Returns the 1-based index of the last item on this page
	///
	/// ```
	/// use reinhardt_paginator::Page;
	///
	/// let page = Page::new(vec!["a", "b", "c"], 2, 5, 15, 3);
	/// assert_eq!(page.end_index(), 6);
	/// ```
	pub fn end_index(&self) -> usize {
		if self.number == self.num_pages {
			self.count
		} else {
			self.number * self.per_page
		}
	}

	/// Number of items on this page
	pub fn len(&self) -> usize {
		self.object_list.len()
	}

	/// Returns true if this page holds no items
	pub fn is_empty(&self) -> bool {
		self.object_list.is_empty()
	}

	/// Iterates over the items on this page
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.object_list.iter()
	}

	/// Consumes the page, returning its items
	pub fn into_inner(self) -> Vec<T> {
		self.object_list
	}
}

impl<T> IntoIterator for Page<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.object_list.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Page<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.object_list.iter()
	}
}
