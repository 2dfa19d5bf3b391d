use std::collections::HashMap;
use serde_json::Value;
use super::ErrorDescriptor;

/// Reserved key holding the recorded validation errors
pub const KEY_ERRORS: &str = "errors";

/// Reserved key holding the values submitted alongside validation errors
pub const KEY_ERROR_VALUES: &str = "errorValues";

/// Reserved key holding the ordered completed-step history
pub const KEY_STEPS: &str = "steps";

const RESERVED_KEYS: [&str; 3] = [KEY_ERRORS, KEY_ERROR_VALUES, KEY_STEPS];

/// Validation errors keyed by field name
pub type ErrorMap = HashMap<String, ErrorDescriptor>;

/// Field values keyed by field name
pub type ValueMap = HashMap<String, Value>;

/// Per-user key-value state persisted across wizard requests.
///
/// The model is the in-request handle only; the storage backend that keeps
/// it alive between requests is external. Arbitrary field values live next
/// to three reserved bookkeeping keys, exposed through typed accessors:
/// [`errors`](SessionModel::errors), [`error_values`](SessionModel::error_values)
/// and [`completed_steps`](SessionModel::completed_steps).
///
/// The typed accessors are total: a missing or malformed reserved key reads
/// as its empty default rather than failing.
///
/// # Examples
/// ```
/// # use formflow_session::SessionModel;
/// let mut session = SessionModel::new();
/// session.set("first_name", "Ada");
/// session.push_completed_step("/name");
///
/// assert_eq!(session.get("first_name"), Some(&"Ada".into()));
/// assert_eq!(session.completed_steps(), vec!["/name".to_owned()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionModel {
  data: HashMap<String, Value>,
}

impl SessionModel {
  /// Create a new empty session
  pub fn new() -> Self {
    SessionModel {
      data: HashMap::new(),
    }
  }

  /// Get a raw value by key
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.data.get(key)
  }

  /// Set a raw value by key
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    self.data.insert(key.into(), value.into());
  }

  /// Remove a value, returning it if it was present
  pub fn unset(&mut self, key: &str) -> Option<Value> {
    self.data.remove(key)
  }

  /// Set several values at once
  pub fn assign(&mut self, values: ValueMap) {
    for (key, value) in values {
      self.data.insert(key, value);
    }
  }

  /// Whether the key is one of the reserved bookkeeping keys
  pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
  }

  /// All plain field values, excluding the reserved bookkeeping keys
  pub fn values(&self) -> ValueMap {
    self
      .data
      .iter()
      .filter(|(key, _)| !Self::is_reserved(&key[..]))
      .map(|(key, value)| (key.clone(), value.clone()))
      .collect()
  }

  /// The recorded validation errors
  pub fn errors(&self) -> ErrorMap {
    match self.get(KEY_ERRORS) {
      Some(value) => serde_json::from_value(value.clone()).unwrap_or_default(),
      None => ErrorMap::new(),
    }
  }

  pub fn set_errors(&mut self, errors: ErrorMap) {
    let map: serde_json::Map<String, Value> = errors
      .into_iter()
      .map(|(field, descriptor)| (field, descriptor.into()))
      .collect();
    self.set(KEY_ERRORS, Value::Object(map));
  }

  /// The values that were submitted alongside validation errors
  pub fn error_values(&self) -> ValueMap {
    match self.get(KEY_ERROR_VALUES) {
      Some(Value::Object(map)) => map
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect(),
      _ => ValueMap::new(),
    }
  }

  pub fn set_error_values(&mut self, values: ValueMap) {
    self.set(KEY_ERROR_VALUES, Value::Object(values.into_iter().collect()));
  }

  /// The completed-step history, oldest first
  pub fn completed_steps(&self) -> Vec<String> {
    match self.get(KEY_STEPS) {
      Some(value) => serde_json::from_value(value.clone()).unwrap_or_default(),
      None => Vec::new(),
    }
  }

  pub fn set_completed_steps(&mut self, steps: Vec<String>) {
    self.set(
      KEY_STEPS,
      Value::Array(steps.into_iter().map(Value::String).collect()),
    );
  }

  /// Record a step as completed. Recording the same step twice keeps the
  /// original position in the history.
  pub fn push_completed_step(&mut self, step: impl Into<String>) {
    let step = step.into();
    let mut steps = self.completed_steps();
    if !steps.contains(&step) {
      steps.push(step);
      self.set_completed_steps(steps);
    }
  }
}
