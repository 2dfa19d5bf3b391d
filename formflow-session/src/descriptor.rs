use serde_json::Value;

/// A validation error recorded against a single field.
///
/// Two JSON shapes round-trip through the session store: a bare marker
/// string, or a detail object with optional `message` and `redirect`
/// entries plus whatever other metadata the validation pipeline attached.
/// A descriptor carrying a `redirect` target is handled by redirecting the
/// user elsewhere and must never show up in in-page error display.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ErrorDescriptor {
  Marker(String),
  Detail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    redirect: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, Value>,
  },
  // catch-all so one odd entry doesn't invalidate the whole error map
  Other(Value),
}

impl ErrorDescriptor {
  /// Create a plain marker error
  pub fn marker(text: impl Into<String>) -> Self {
    ErrorDescriptor::Marker(text.into())
  }

  /// Create a detail error with a display message
  pub fn with_message(message: impl Into<String>) -> Self {
    ErrorDescriptor::Detail {
      message: Some(message.into()),
      redirect: None,
      extra: serde_json::Map::new(),
    }
  }

  /// Create a detail error handled via redirect
  pub fn with_redirect(redirect: impl Into<String>) -> Self {
    ErrorDescriptor::Detail {
      message: None,
      redirect: Some(redirect.into()),
      extra: serde_json::Map::new(),
    }
  }

  pub fn message(&self) -> Option<&str> {
    match self {
      ErrorDescriptor::Detail { message, .. } => message.as_deref(),
      _ => None,
    }
  }

  pub fn redirect(&self) -> Option<&str> {
    match self {
      ErrorDescriptor::Detail { redirect, .. } => redirect.as_deref(),
      _ => None,
    }
  }

  pub fn has_redirect(&self) -> bool {
    self.redirect().is_some()
  }
}

impl From<ErrorDescriptor> for Value {
  fn from(descriptor: ErrorDescriptor) -> Self {
    match descriptor {
      ErrorDescriptor::Marker(text) => Value::String(text),
      ErrorDescriptor::Detail { message, redirect, extra } => {
        let mut map = extra;
        if let Some(message) = message {
          map.insert("message".to_owned(), Value::String(message));
        }
        if let Some(redirect) = redirect {
          map.insert("redirect".to_owned(), Value::String(redirect));
        }
        Value::Object(map)
      }
      ErrorDescriptor::Other(value) => value,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::{json, Value};
  use super::ErrorDescriptor;

  #[test]
  fn marker() {
    let descriptor = ErrorDescriptor::marker("required");
    assert_eq!(descriptor.message(), None);
    assert!(!descriptor.has_redirect());
    assert_eq!(Value::from(descriptor), json!("required"));
  }

  #[test]
  fn detail() {
    let descriptor = ErrorDescriptor::with_message("Enter your name");
    assert_eq!(descriptor.message(), Some("Enter your name"));
    assert!(!descriptor.has_redirect());

    let descriptor = ErrorDescriptor::with_redirect("/exit-page");
    assert_eq!(descriptor.redirect(), Some("/exit-page"));
    assert!(descriptor.has_redirect());
  }

  #[test]
  fn decode_shapes() {
    // a bare string decodes to a marker
    let marker: ErrorDescriptor = serde_json::from_value(json!("required")).unwrap();
    assert_eq!(marker, ErrorDescriptor::marker("required"));

    // an object decodes to a detail, keeping unknown metadata
    let detail: ErrorDescriptor =
      serde_json::from_value(json!({ "message": "message", "type": "required" })).unwrap();
    assert_eq!(detail.message(), Some("message"));
    assert!(!detail.has_redirect());

    let redirecting: ErrorDescriptor =
      serde_json::from_value(json!({ "redirect": "/exit-page" })).unwrap();
    assert_eq!(redirecting.redirect(), Some("/exit-page"));

    // anything else still decodes
    let other: ErrorDescriptor = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(other, ErrorDescriptor::Other(json!(42)));
  }

  #[test]
  fn roundtrip_keeps_extra_metadata() {
    let original = json!({ "message": "message", "type": "required", "arguments": [1] });
    let descriptor: ErrorDescriptor = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(Value::from(descriptor), original);
  }
}
