use formflow_base::{KeyError, OrderedMap};

/// Per-field metadata for a step's form.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldOptions {
  /// Display label for the field
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  /// Value the base controller resolves when the session holds nothing
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default: Option<serde_json::Value>,
}

impl FieldOptions {
  pub fn labelled(label: impl Into<String>) -> Self {
    FieldOptions {
      label: Some(label.into()),
      default: None,
    }
  }

  pub fn with_default(value: impl Into<serde_json::Value>) -> Self {
    FieldOptions {
      label: None,
      default: Some(value.into()),
    }
  }
}

/// The set of fields collected on a step, keyed by field name.
///
/// Starts from the step's static configuration and may be extended at
/// request time when fields only become known while handling the request.
/// Error filtering reads the request-scoped copy, so dynamically added
/// fields take part in it.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct FieldConfig {
  fields: OrderedMap<FieldOptions>,
}

impl FieldConfig {
  /// Create an empty field configuration
  pub fn new() -> Self {
    FieldConfig {
      fields: OrderedMap::new(),
    }
  }

  /// Add a field at the end of the configured order. Fails if the field
  /// is already configured.
  pub fn insert(&mut self, name: impl Into<String>, options: FieldOptions) -> Result<(), KeyError> {
    self.fields.insert(name, options)
  }

  /// Add or replace a field. This is the request-time extension point for
  /// fields not known at startup.
  pub fn add(&mut self, name: impl Into<String>, options: FieldOptions) {
    self.fields.set(name, options);
  }

  pub fn contains(&self, name: &str) -> bool {
    self.fields.contains_key(name)
  }

  /// Get a field's options by name
  pub fn get(&self, name: &str) -> Option<&FieldOptions> {
    self.fields.get(name)
  }

  // Iterator over field names in configured order
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.fields.keys()
  }

  // Iterator over fields in configured order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldOptions)> {
    self.fields.iter()
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }
}
