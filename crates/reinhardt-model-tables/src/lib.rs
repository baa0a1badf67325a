//! Model-bound data tables for Reinhardt dashboards
//!
//! Declares tables once as shareable [`TableClass`]es and instantiates them
//! per request. A table bound to a model derives one column per editable
//! model field, and the paginated variants slice the table data into pages
//! using [`reinhardt_paginator`].
//!
//! # Features
//!
//! - **Declarative columns**: declaration order, inheritance via
//!   [`TableClassBuilder::extends`], and an allow-list that reorders them
//! - **Browser tables**: column limits for navigation and content panels
//! - **Actions**: row, table and filter actions instantiated once per class
//! - **Model binding**: columns derived from model fields, with many-to-many
//!   values flattened by [`column::filter_m2m`]
//! - **Pagination**: [`PaginatedTable`] and [`PaginatedModelTable`] with a
//!   show-all token and lenient page handling
//! - **Rendering**: Tera templates for plain and paginated tables
//!
//! # Example
//!
//! ```rust
//! use reinhardt_model_tables::{
//!     Column, ModelRegistry, ModelTable, RequestContext, TableClass, TableOptions,
//! };
//! use reinhardt_model_tables::model::{FieldType, InMemoryModel, ModelField, ModelMeta};
//! use std::sync::Arc;
//!
//! let meta = ModelMeta::new("blog", "Article")
//!     .field(ModelField::new("id", FieldType::Auto))
//!     .field(ModelField::new("title", FieldType::Char).verbose_name("title"));
//! let registry = ModelRegistry::new();
//! registry.register(Arc::new(InMemoryModel::new(meta)));
//!
//! let class = TableClass::builder("ArticleTable")
//!     .options(TableOptions::new().model("blog.article").multi_select(false))
//!     .column("author", Column::new("author_name"))
//!     .build()
//!     .unwrap();
//!
//! let table = ModelTable::new(class, RequestContext::new("/articles/"), &registry).unwrap();
//! let names: Vec<_> = table.columns().keys().map(String::as_str).collect();
//! assert_eq!(names, vec!["author", "title"]);
//! ```

#![warn(rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod class;
pub mod column;
pub mod contenttypes;
pub mod error;
pub mod model;
pub mod options;
pub mod paginated;
pub mod pagination;
pub mod render;
pub mod settings;
pub mod table;

pub use action::{Action, ActionClass, ActionKind, FilterAction};
pub use class::{DataFn, TableClass, TableClassBuilder};
pub use column::{AutoColumn, Column};
pub use contenttypes::{ModelRef, ModelRegistry};
pub use error::{Result, TableError};
pub use model::{ModelDescriptor, Record};
pub use options::{BrowserContext, TableOptions};
pub use paginated::{PaginatedModelTable, PaginatedTable};
pub use pagination::{PageData, Paginated, PaginationPosition};
pub use render::{TableContext, TableRenderer};
pub use settings::TableSettings;
pub use table::{ModelTable, RequestContext};
