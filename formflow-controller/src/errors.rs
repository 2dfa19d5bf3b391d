use formflow_base::KeyError;

#[derive(Debug, PartialEq, serde::Serialize, Clone)]
pub enum Error {
  /// The behaviour was composed upstream of session middleware, so the
  /// request carries no session handle. Fatal for the request.
  SessionNotConfigured,

  /// A step was requested before its prerequisites were completed.
  /// Recovered by redirecting, never forwarded to the generic handler.
  MissingPrereq,

  /// Configuration lookup failed
  Key(KeyError),

  // something we try to not use
  Other,
}

impl Error {
  /// HTTP status the generic handler records for the error
  pub fn status(&self) -> u16 {
    match self {
      Error::MissingPrereq => 403,
      Error::SessionNotConfigured | Error::Key(_) | Error::Other => 500,
    }
  }
}

impl From<KeyError> for Error {
  fn from(err: KeyError) -> Self {
    Error::Key(err)
  }
}

#[cfg(test)]
mod tests {
  use formflow_base::KeyError;
  use super::Error;

  #[test]
  fn status() {
    assert_eq!(Error::MissingPrereq.status(), 403);
    assert_eq!(Error::SessionNotConfigured.status(), 500);
    assert_eq!(Error::from(KeyError::KeyMissing("/one".to_owned())).status(), 500);
  }
}
