use super::KeyError;

/// A string-keyed store for objects that preserves insertion order.
///
/// Lookups scan linearly, which fits the small fixed-size configuration
/// maps this backs (step and field configuration). Insertion order is
/// semantic: the first inserted key is the "first" entry of the map.
///
/// # Examples
/// ```
/// # use formflow_base::OrderedMap;
/// let mut steps = OrderedMap::new();
/// steps.insert("/one", 1).unwrap();
/// steps.insert("/two", 2).unwrap();
///
/// assert_eq!(steps.first_key(), Some("/one"));
/// assert_eq!(steps.get("/two"), Some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OrderedMap<T> {
  entries: Vec<(String, T)>,
}

impl<T> OrderedMap<T> {
  /// Create a new OrderedMap
  pub fn new() -> Self {
    Self::with_capacity(0)
  }

  /// Create a new OrderedMap with initial capacity
  pub fn with_capacity(capacity: usize) -> Self {
    OrderedMap {
      entries: Vec::with_capacity(capacity),
    }
  }

  /// Insert a new entry at the end of the map. Fails if the key already exists.
  pub fn insert(&mut self, key: impl Into<String>, value: T) -> Result<(), KeyError> {
    let key = key.into();
    if self.contains_key(&key[..]) {
      return Err(KeyError::KeyAlreadyExists(key));
    }
    self.entries.push((key, value));
    Ok(())
  }

  /// Insert or replace an entry. A replaced entry keeps its position.
  pub fn set(&mut self, key: impl Into<String>, value: T) {
    let key = key.into();
    match self.entries.iter_mut().find(|(entry_key, _)| *entry_key == key) {
      Some(entry) => entry.1 = value,
      None => self.entries.push((key, value)),
    }
  }

  /// Get an entry by its key
  pub fn get(&self, key: &str) -> Option<&T> {
    self.entries
      .iter()
      .find(|(entry_key, _)| entry_key == key)
      .map(|(_, value)| value)
  }

  /// Get a mutable reference to an entry
  pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
    self.entries
      .iter_mut()
      .find(|(entry_key, _)| entry_key == key)
      .map(|(_, value)| value)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.iter().any(|(entry_key, _)| entry_key == key)
  }

  /// The key that was inserted first
  pub fn first_key(&self) -> Option<&str> {
    self.entries.first().map(|(key, _)| &key[..])
  }

  // Iterator over keys in insertion order
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(key, _)| &key[..])
  }

  // Iterator over entries in insertion order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
    self.entries.iter().map(|(key, value)| (&key[..], value))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<T> Default for OrderedMap<T> {
  fn default() -> Self {
    Self::new()
  }
}
