//! Model introspection
//!
//! A model is described by a [`ModelMeta`] (its fields, in declaration order)
//! and a [`ModelDescriptor`] that can also list its records. Records are plain
//! JSON objects so that tables can handle any model behind a trait object.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt::Debug;

/// One row of model data
pub type Record = serde_json::Map<String, Value>;

/// Storage type of a model field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
	/// Auto-incrementing primary key
	Auto,
	Char,
	Text,
	Integer,
	Float,
	Boolean,
	Date,
	DateTime,
	/// Single-valued relation to the model with the given content type key
	ForeignKey(String),
	/// Many-valued relation to the model with the given content type key
	ManyToMany(String),
}

impl FieldType {
	/// Returns true for many-valued relations
	pub fn is_many_to_many(&self) -> bool {
		matches!(self, Self::ManyToMany(_))
	}

	/// Returns true for single or many-valued relations
	pub fn is_relation(&self) -> bool {
		matches!(self, Self::ForeignKey(_) | Self::ManyToMany(_))
	}
}

/// A field declared on a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelField {
	pub name: String,
	pub verbose_name: Option<String>,
	pub field_type: FieldType,
	pub editable: bool,
	pub blank: bool,
	pub help_text: String,
}

impl ModelField {
	/// Creates a field; auto primary keys are not editable
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		let editable = field_type != FieldType::Auto;
		Self {
			name: name.into(),
			verbose_name: None,
			field_type,
			editable,
			blank: false,
			help_text: String::new(),
		}
	}

	pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = Some(verbose_name.into());
		self
	}

	pub fn editable(mut self, editable: bool) -> Self {
		self.editable = editable;
		self
	}

	pub fn blank(mut self, blank: bool) -> Self {
		self.blank = blank;
		self
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = help_text.into();
		self
	}

	/// Builds the form field a model form would use for this field
	pub fn formfield(&self) -> FormField {
		FormField {
			name: self.name.clone(),
			label: self.verbose_name.as_deref().map(capfirst),
			widget: Widget::for_field_type(&self.field_type),
			required: !self.blank,
			help_text: self.help_text.clone(),
			multiple: self.field_type.is_many_to_many(),
		}
	}
}

/// HTML input widget of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	Textarea,
	NumberInput,
	CheckboxInput,
	DateInput,
	DateTimeInput,
	Select,
	SelectMultiple,
	HiddenInput,
}

impl Widget {
	fn for_field_type(field_type: &FieldType) -> Self {
		match field_type {
			FieldType::Auto => Self::HiddenInput,
			FieldType::Char => Self::TextInput,
			FieldType::Text => Self::Textarea,
			FieldType::Integer | FieldType::Float => Self::NumberInput,
			FieldType::Boolean => Self::CheckboxInput,
			FieldType::Date => Self::DateInput,
			FieldType::DateTime => Self::DateTimeInput,
			FieldType::ForeignKey(_) => Self::Select,
			FieldType::ManyToMany(_) => Self::SelectMultiple,
		}
	}
}

/// Form-field descriptor bound to a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
	pub name: String,
	pub label: Option<String>,
	pub widget: Widget,
	pub required: bool,
	pub help_text: String,
	pub multiple: bool,
}

/// Field list and naming of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMeta {
	pub app_label: String,
	pub model_name: String,
	pub fields: Vec<ModelField>,
}

impl ModelMeta {
	pub fn new(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
		Self {
			app_label: app_label.into(),
			model_name: model_name.into(),
			fields: Vec::new(),
		}
	}

	/// Appends a field
	pub fn field(mut self, field: ModelField) -> Self {
		self.fields.push(field);
		self
	}

	/// Looks a field up by name
	pub fn get_field(&self, name: &str) -> Option<&ModelField> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Names of the many-valued relation fields
	pub fn many_to_many(&self) -> Vec<&str> {
		self.fields
			.iter()
			.filter(|f| f.field_type.is_many_to_many())
			.map(|f| f.name.as_str())
			.collect()
	}

	/// Registry key of this model, `app_label.model_name` in lower case
	pub fn content_type_key(&self) -> String {
		format!("{}.{}", self.app_label, self.model_name).to_lowercase()
	}
}

/// A model that tables can introspect and read records from
pub trait ModelDescriptor: Send + Sync + Debug {
	/// Field list and naming of the model
	fn meta(&self) -> &ModelMeta;

	/// All records of the model, in storage order
	fn all(&self) -> Result<Vec<Record>>;
}

/// A model whose records are held in memory
#[derive(Debug, Clone)]
pub struct InMemoryModel {
	meta: ModelMeta,
	records: Vec<Record>,
}

impl InMemoryModel {
	pub fn new(meta: ModelMeta) -> Self {
		Self {
			meta,
			records: Vec::new(),
		}
	}

	/// Sets the records, replacing any existing ones
	pub fn with_records(mut self, records: Vec<Record>) -> Self {
		self.records = records;
		self
	}

	/// Appends a record
	pub fn push(&mut self, record: Record) {
		self.records.push(record);
	}

	/// Serializes typed rows into records
	pub fn from_rows<T: Serialize>(meta: ModelMeta, rows: &[T]) -> Result<Self> {
		let records = rows
			.iter()
			.map(|row| match serde_json::to_value(row) {
				Ok(Value::Object(map)) => Ok(map),
				Ok(other) => Err(crate::TableError::DataFetch(format!(
					"row of {} did not serialize to an object: {other}",
					meta.model_name
				))),
				Err(e) => Err(crate::TableError::DataFetch(e.to_string())),
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(Self { meta, records })
	}
}

impl ModelDescriptor for InMemoryModel {
	fn meta(&self) -> &ModelMeta {
		&self.meta
	}

	fn all(&self) -> Result<Vec<Record>> {
		Ok(self.records.clone())
	}
}

/// Collects the form fields of a model's editable fields
///
/// With an allow-list, only the listed fields are returned, in list order.
/// Names in the list that are not editable model fields are skipped.
pub fn fields_for_model(meta: &ModelMeta, fields: Option<&[String]>) -> Vec<(String, FormField)> {
	let editable = meta.fields.iter().filter(|f| f.editable);
	match fields {
		None => editable.map(|f| (f.name.clone(), f.formfield())).collect(),
		Some(names) => names
			.iter()
			.filter_map(|name| {
				meta.fields
					.iter()
					.find(|f| f.editable && &f.name == name)
					.map(|f| (f.name.clone(), f.formfield()))
			})
			.collect(),
	}
}

/// Sorts records by a field, `-field` meaning descending
///
/// The sort is stable. Missing values sort as null.
pub fn order_records(records: &mut [Record], key: &str) {
	let (descending, field) = match key.strip_prefix('-') {
		Some(field) => (true, field),
		None => (false, key),
	};
	if field.is_empty() {
		return;
	}
	records.sort_by(|a, b| {
		let ordering = compare_values(
			a.get(field).unwrap_or(&Value::Null),
			b.get(field).unwrap_or(&Value::Null),
		);
		if descending { ordering.reverse() } else { ordering }
	});
}

/// Total order over JSON values: null < bool < number < string < array < object
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
	fn rank(v: &Value) -> u8 {
		match v {
			Value::Null => 0,
			Value::Bool(_) => 1,
			Value::Number(_) => 2,
			Value::String(_) => 3,
			Value::Array(_) => 4,
			Value::Object(_) => 5,
		}
	}

	match (a, b) {
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		(Value::Number(x), Value::Number(y)) => {
			match (x.as_i64(), y.as_i64()) {
				(Some(x), Some(y)) => x.cmp(&y),
				_ => {
					let x = x.as_f64().unwrap_or(f64::NAN);
					let y = y.as_f64().unwrap_or(f64::NAN);
					x.total_cmp(&y)
				}
			}
		}
		(Value::String(x), Value::String(y)) => x.cmp(y),
		(Value::Array(x), Value::Array(y)) => x
			.iter()
			.zip(y.iter())
			.map(|(x, y)| compare_values(x, y))
			.find(|o| o.is_ne())
			.unwrap_or_else(|| x.len().cmp(&y.len())),
		_ => rank(a).cmp(&rank(b)),
	}
}

fn capfirst(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn record(value: Value) -> Record {
		match value {
			Value::Object(map) => map,
			_ => unreachable!(),
		}
	}

	fn article_meta() -> ModelMeta {
		ModelMeta::new("blog", "Article")
			.field(ModelField::new("id", FieldType::Auto))
			.field(ModelField::new("title", FieldType::Char).verbose_name("headline"))
			.field(ModelField::new("body", FieldType::Text))
			.field(ModelField::new("tags", FieldType::ManyToMany("blog.tag".into())))
	}

	#[test]
	fn test_fields_for_model_skips_auto_pk() {
		let fields = fields_for_model(&article_meta(), None);
		let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(names, vec!["title", "body", "tags"]);
	}

	#[test]
	fn test_fields_for_model_follows_allow_list() {
		let allow = vec!["tags".to_string(), "missing".to_string(), "title".to_string()];
		let fields = fields_for_model(&article_meta(), Some(allow.as_slice()));
		let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(names, vec!["tags", "title"]);
	}

	#[test]
	fn test_formfield_label_and_widget() {
		let meta = article_meta();
		let title = meta.get_field("title").unwrap().formfield();
		assert_eq!(title.label.as_deref(), Some("Headline"));
		assert_eq!(title.widget, Widget::TextInput);

		let tags = meta.get_field("tags").unwrap().formfield();
		assert_eq!(tags.label, None);
		assert!(tags.multiple);
		assert_eq!(meta.many_to_many(), vec!["tags"]);
	}

	#[test]
	fn test_order_records_descending() {
		let mut records = vec![
			record(json!({"id": 2})),
			record(json!({"id": 10})),
			record(json!({"id": 1})),
		];
		order_records(&mut records, "-id");
		let ids: Vec<_> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
		assert_eq!(ids, vec![10, 2, 1]);

		order_records(&mut records, "id");
		let ids: Vec<_> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
		assert_eq!(ids, vec![1, 2, 10]);
	}

	#[test]
	fn test_compare_values_mixed_types() {
		assert_eq!(compare_values(&Value::Null, &json!(false)), Ordering::Less);
		assert_eq!(compare_values(&json!(1.5), &json!(2)), Ordering::Less);
		assert_eq!(compare_values(&json!("b"), &json!(3)), Ordering::Greater);
	}

	#[test]
	fn test_content_type_key() {
		assert_eq!(article_meta().content_type_key(), "blog.article");
	}
}
