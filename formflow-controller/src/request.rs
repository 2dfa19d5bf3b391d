use formflow_session::SessionModel;
use super::FormOptions;

/// A single wizard request.
///
/// Carries the per-user session handle (attached by session middleware
/// upstream of the behaviour) and a request-scoped copy of the form
/// options whose field set may grow while the request is handled.
#[derive(Debug, Default)]
pub struct Request {
  path: String,
  session: Option<SessionModel>,
  form: FormOptions,
}

impl Request {
  /// Create a request for a step path, with no session attached
  pub fn new(path: impl Into<String>) -> Self {
    Request {
      path: path.into(),
      session: None,
      form: FormOptions::default(),
    }
  }

  /// Attach a session handle, builder style
  pub fn with_session(mut self, session: SessionModel) -> Self {
    self.session = Some(session);
    self
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn session(&self) -> Option<&SessionModel> {
    self.session.as_ref()
  }

  pub fn session_mut(&mut self) -> Option<&mut SessionModel> {
    self.session.as_mut()
  }

  pub fn attach_session(&mut self, session: SessionModel) {
    self.session = Some(session);
  }

  /// The request-scoped form options
  pub fn form(&self) -> &FormOptions {
    &self.form
  }

  /// Mutable request-scoped form options, for request-time field additions
  pub fn form_mut(&mut self) -> &mut FormOptions {
    &mut self.form
  }

  pub fn set_form(&mut self, form: FormOptions) {
    self.form = form;
  }
}

/// The response surface the behaviour writes to.
///
/// The real HTTP response lives in the hosting web layer; this records the
/// terminal effects the controller pipeline produces.
#[derive(Debug, Default)]
pub struct Response {
  status: Option<u16>,
  redirect: Option<String>,
}

impl Response {
  pub fn new() -> Self {
    Response {
      status: None,
      redirect: None,
    }
  }

  /// Issue a redirect to `path`
  pub fn redirect(&mut self, path: impl Into<String>) {
    self.redirect = Some(path.into());
  }

  /// Where the response was redirected, if anywhere
  pub fn redirected_to(&self) -> Option<&str> {
    self.redirect.as_deref()
  }

  pub fn set_status(&mut self, status: u16) {
    self.status = Some(status);
  }

  pub fn status(&self) -> Option<u16> {
    self.status
  }
}
