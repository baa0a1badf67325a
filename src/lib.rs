//! # Reinhardt Dashboard
//!
//! Auto-generated model tables with pagination for Reinhardt dashboards,
//! inspired by Django's admin change lists.
//!
//! A table is declared once as a shareable class and instantiated per
//! request. Bound to a model, it derives a column for every editable model
//! field; the paginated variants serve one page of the table data at a time.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `tables` - Model tables, actions, pagination mixin and rendering
//! - `paginator` - The standalone sequence paginator
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt::tables::model::{FieldType, InMemoryModel, ModelField, ModelMeta};
//! use reinhardt::tables::{
//!     ModelRegistry, Paginated, PaginatedModelTable, RequestContext, TableClass, TableOptions,
//!     TableSettings,
//! };
//! use std::sync::Arc;
//!
//! let meta = ModelMeta::new("shop", "Product")
//!     .field(ModelField::new("id", FieldType::Auto))
//!     .field(ModelField::new("name", FieldType::Char));
//! let records = (1..=30)
//!     .map(|id| serde_json::json!({"id": id, "name": format!("Product {id}")}))
//!     .filter_map(|value| value.as_object().cloned())
//!     .collect();
//!
//! let registry = ModelRegistry::new();
//! registry.register(Arc::new(InMemoryModel::new(meta).with_records(records)));
//!
//! let class = TableClass::builder("ProductTable")
//!     .options(TableOptions::new().model("shop.product"))
//!     .build()
//!     .unwrap();
//! let request = RequestContext::new("/products/").with_query("page", "2");
//! let mut table =
//!     PaginatedModelTable::new(class, request, &registry, &TableSettings::default()).unwrap();
//!
//! let page = table.get_page_data(None).unwrap();
//! assert_eq!(page.len(), 5);
//! assert!(table.has_previous());
//! ```

#[cfg(feature = "paginator")]
pub mod paginator;
#[cfg(feature = "tables")]
pub mod tables;
