//! Paginator module.
//!
//! Django-style slicing of ordered sequences into numbered pages.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt::paginator::Paginator;
//!
//! let paginator = Paginator::new((1..=7).collect::<Vec<_>>(), 3).unwrap();
//! assert_eq!(paginator.num_pages(), 3);
//! assert_eq!(paginator.page(3).unwrap().object_list, vec![7]);
//! ```

pub use reinhardt_paginator::*;
