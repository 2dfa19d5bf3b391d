use formflow_base::{KeyError, OrderedMap};

/// Where a completed step leads. A step without a `next` ends the flow.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct StepEntry {
  pub next: Option<String>,
}

impl StepEntry {
  /// A step followed by `next`
  pub fn leads_to(next: impl Into<String>) -> Self {
    StepEntry {
      next: Some(next.into()),
    }
  }

  /// A step with nothing after it
  pub fn terminal() -> Self {
    StepEntry { next: None }
  }
}

/// Ordered configuration of a wizard's steps, keyed by step path.
///
/// Supplied by the hosting application at startup and immutable during
/// request handling. Insertion order is meaningful: a user with no
/// completed history is sent to the first inserted step.
///
/// # Examples
/// ```
/// # use formflow_step::{StepConfig, StepEntry};
/// let mut steps = StepConfig::new();
/// steps.insert("/one", StepEntry::leads_to("/two")).unwrap();
/// steps.insert("/two", StepEntry::terminal()).unwrap();
///
/// assert_eq!(steps.first_step(), Some("/one"));
/// assert_eq!(steps.next_of("/one"), Some("/two"));
/// assert_eq!(steps.next_of("/two"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct StepConfig {
  steps: OrderedMap<StepEntry>,
}

impl StepConfig {
  /// Create an empty step configuration
  pub fn new() -> Self {
    StepConfig {
      steps: OrderedMap::new(),
    }
  }

  /// Add a step at the end of the configured order
  pub fn insert(&mut self, path: impl Into<String>, entry: StepEntry) -> Result<(), KeyError> {
    self.steps.insert(path, entry)
  }

  /// Get a step's entry by path
  pub fn get(&self, path: &str) -> Option<&StepEntry> {
    self.steps.get(path)
  }

  pub fn contains(&self, path: &str) -> bool {
    self.steps.contains_key(path)
  }

  /// The first configured step
  pub fn first_step(&self) -> Option<&str> {
    self.steps.first_key()
  }

  /// The step configured to follow `path`
  pub fn next_of(&self, path: &str) -> Option<&str> {
    self.steps.get(path)?.next.as_deref()
  }

  // Iterator over steps in configured order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &StepEntry)> {
    self.steps.iter()
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}
