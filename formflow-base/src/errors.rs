#[derive(Debug, PartialEq, serde::Serialize, Clone)]
pub enum KeyError {
  KeyAlreadyExists(String),
  KeyMissing(String),
}
