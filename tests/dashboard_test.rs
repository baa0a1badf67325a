//! Facade-level checks that the dashboard crates work together

use reinhardt::paginator::Paginator;
use reinhardt::tables::model::{FieldType, InMemoryModel, ModelField, ModelMeta};
use reinhardt::tables::{
	Column, ModelRegistry, Paginated, PaginatedTable, RequestContext, TableClass, TableContext,
	TableOptions, TableRenderer, TableSettings,
};
use rstest::*;
use serde_json::json;
use std::sync::Arc;

#[fixture]
fn registry() -> ModelRegistry {
	let meta = ModelMeta::new("library", "Book")
		.field(ModelField::new("id", FieldType::Auto))
		.field(ModelField::new("title", FieldType::Char).verbose_name("title"))
		.field(ModelField::new("authors", FieldType::ManyToMany("library.author".to_string())));
	let records = (1..=8)
		.filter_map(|id| {
			json!({
				"id": id,
				"title": format!("Volume {id}"),
				"authors": [{"id": id, "name": format!("Author {id}")}],
			})
			.as_object()
			.cloned()
		})
		.collect();
	let registry = ModelRegistry::new();
	registry.register(Arc::new(InMemoryModel::new(meta).with_records(records)));
	registry
}

#[rstest]
fn test_paginated_book_table_renders(registry: ModelRegistry) {
	let class = TableClass::builder("BookTable")
		.options(
			TableOptions::new()
				.model("library.book")
				.order_by("id")
				.columns(["title", "authors", "shelf"]),
		)
		.column("shelf", Column::new("shelf"))
		.build()
		.unwrap();
	let settings = TableSettings::from_toml_str("pagination_count = 3").unwrap();
	let mut table = PaginatedTable::new(
		class,
		RequestContext::new("/books/").with_query("page", "3"),
		&registry,
		&settings,
	)
	.unwrap();

	let context = TableContext::for_paginated(&mut table).unwrap();
	let headers: Vec<_> = context.columns.iter().map(|c| c.header.as_str()).collect();
	assert_eq!(headers, vec!["Title", "authors", "shelf"]);
	assert_eq!(context.rows.len(), 2);
	assert_eq!(context.rows[0].cells[1].value, "Author 7");
	assert!(!table.has_next().unwrap());

	let html = TableRenderer::new().unwrap().render(&context).unwrap();
	assert!(html.contains("Volume 8"));
	assert!(html.contains("3 / 3"));
}

#[rstest]
fn test_standalone_paginator() {
	let paginator = Paginator::new(vec!["a", "b", "c"], 2).unwrap();
	let page = paginator.get_page("last");

	assert_eq!(page.number, 1);
	assert_eq!(paginator.page_range().count(), 2);
}
