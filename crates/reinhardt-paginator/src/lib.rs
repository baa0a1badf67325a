//! # Reinhardt Paginator
//!
//! Slices an ordered sequence into fixed-size, bounds-checked pages, in the
//! manner of Django's `Paginator`.
//!
//! ## Example
//!
//! ```
//! use reinhardt_paginator::Paginator;
//!
//! let items: Vec<u32> = (1..=30).collect();
//! let paginator = Paginator::new(items, 25).unwrap();
//!
//! let first = paginator.page(1).unwrap();
//! assert_eq!(first.len(), 25);
//! assert!(first.has_next());
//!
//! // Out of range requests can fall back to the last page
//! let clamped = paginator.get_page("99");
//! assert_eq!(clamped.number, 2);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod page;
pub mod paginator;

pub use error::{PageError, Result};
pub use page::Page;
pub use paginator::{DEFAULT_PER_PAGE, Paginator};
