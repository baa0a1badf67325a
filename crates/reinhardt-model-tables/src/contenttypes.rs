//! Content type registry
//!
//! Maps `app_label.model` keys to model descriptors so that tables can bind a
//! model lazily by name. The registry is injected into table construction
//! rather than looked up globally.
//!
//! ```rust
//! use reinhardt_model_tables::contenttypes::{ModelRef, ModelRegistry};
//! use reinhardt_model_tables::model::{FieldType, InMemoryModel, ModelField, ModelMeta};
//! use std::sync::Arc;
//!
//! let registry = ModelRegistry::new();
//! registry.register(Arc::new(InMemoryModel::new(
//!     ModelMeta::new("blog", "Article").field(ModelField::new("title", FieldType::Char)),
//! )));
//!
//! let model = ModelRef::lazy("blog.Article").resolve(&registry).unwrap();
//! assert_eq!(model.meta().model_name, "Article");
//! ```

use crate::error::{Result, TableError};
use crate::model::ModelDescriptor;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Registry of models keyed by content type
#[derive(Debug, Default)]
pub struct ModelRegistry {
	models: RwLock<IndexMap<String, Arc<dyn ModelDescriptor>>>,
}

impl ModelRegistry {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a model under its content type key, replacing any previous entry
	pub fn register(&self, model: Arc<dyn ModelDescriptor>) -> String {
		let key = model.meta().content_type_key();
		tracing::debug!(content_type = %key, "registering model");
		self.models.write().insert(key.clone(), model);
		key
	}

	/// Looks a model up by key (case-insensitive)
	pub fn get(&self, key: &str) -> Option<Arc<dyn ModelDescriptor>> {
		self.models.read().get(&key.to_lowercase()).cloned()
	}

	/// Looks a model up by key, failing with [`TableError::ModelNotFound`]
	pub fn resolve(&self, key: &str) -> Result<Arc<dyn ModelDescriptor>> {
		self.get(key)
			.ok_or_else(|| TableError::ModelNotFound(key.to_string()))
	}

	pub fn contains(&self, key: &str) -> bool {
		self.models.read().contains_key(&key.to_lowercase())
	}

	/// Registered keys, in registration order
	pub fn keys(&self) -> Vec<String> {
		self.models.read().keys().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.models.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.models.read().is_empty()
	}
}

/// Reference from a table to its bound model
#[derive(Clone)]
pub enum ModelRef {
	/// Direct reference to a model descriptor
	Direct(Arc<dyn ModelDescriptor>),
	/// Content type key resolved through a [`ModelRegistry`]
	Lazy(String),
}

impl ModelRef {
	pub fn direct(model: Arc<dyn ModelDescriptor>) -> Self {
		Self::Direct(model)
	}

	pub fn lazy(key: impl Into<String>) -> Self {
		Self::Lazy(key.into())
	}

	/// Resolves to a descriptor; lookup failures are returned unchanged
	pub fn resolve(&self, registry: &ModelRegistry) -> Result<Arc<dyn ModelDescriptor>> {
		match self {
			Self::Direct(model) => Ok(Arc::clone(model)),
			Self::Lazy(key) => {
				tracing::debug!(content_type = %key, "resolving lazy model reference");
				registry.resolve(key)
			}
		}
	}
}

impl fmt::Debug for ModelRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Direct(model) => f
				.debug_tuple("Direct")
				.field(&model.meta().content_type_key())
				.finish(),
			Self::Lazy(key) => f.debug_tuple("Lazy").field(key).finish(),
		}
	}
}

impl From<Arc<dyn ModelDescriptor>> for ModelRef {
	fn from(model: Arc<dyn ModelDescriptor>) -> Self {
		Self::Direct(model)
	}
}

impl From<&str> for ModelRef {
	fn from(key: &str) -> Self {
		Self::Lazy(key.to_string())
	}
}

impl From<String> for ModelRef {
	fn from(key: String) -> Self {
		Self::Lazy(key)
	}
}
