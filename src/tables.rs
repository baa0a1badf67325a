//! Tables module.
//!
//! Model-bound data tables, their paginated variants and rendering.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt::tables::{Column, TableClass, TableOptions};
//!
//! let class = TableClass::builder("LogTable")
//!     .options(TableOptions::new().columns(["message", "level"]))
//!     .column("level", Column::new("level"))
//!     .column("message", Column::new("message"))
//!     .build()
//!     .unwrap();
//! # let names: Vec<_> = class.columns().keys().map(String::as_str).collect();
//! # assert_eq!(names, vec!["message", "level"]);
//! ```

pub use reinhardt_model_tables::*;
