//! Test fixtures shared by the FormFlow crates.

use formflow_session::{ErrorDescriptor, ErrorMap, SessionModel, ValueMap};
use formflow_step::{FieldConfig, FieldOptions, StepConfig, StepEntry};

/// A four-step linear wizard whose last step has no `next`.
pub fn test_step_config() -> StepConfig {
  let mut steps = StepConfig::new();
  steps.insert("/one", StepEntry::leads_to("/two")).unwrap();
  steps.insert("/two", StepEntry::leads_to("/three")).unwrap();
  steps.insert("/three", StepEntry::leads_to("/four")).unwrap();
  steps.insert("/four", StepEntry::terminal()).unwrap();
  steps
}

/// Field configuration holding the given names with default options
pub fn test_field_config(names: &[&str]) -> FieldConfig {
  let mut fields = FieldConfig::new();
  for name in names {
    fields.insert(*name, FieldOptions::default()).unwrap();
  }
  fields
}

/// An empty session model
pub fn test_session() -> SessionModel {
  SessionModel::new()
}

/// An error map of plain markers keyed by field name
pub fn test_errors(entries: &[(&str, &str)]) -> ErrorMap {
  entries
    .iter()
    .map(|(field, text)| ((*field).to_owned(), ErrorDescriptor::marker(*text)))
    .collect()
}

/// A value map built from JSON-convertible pairs
pub fn test_values(entries: &[(&str, &str)]) -> ValueMap {
  entries
    .iter()
    .map(|(key, value)| ((*key).to_owned(), serde_json::Value::from(*value)))
    .collect()
}
