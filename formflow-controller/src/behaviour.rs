use tracing::{event, Level};
use formflow_session::{ErrorMap, ValueMap};
use super::{Error, FormController, FormOptions, Request, Response};

/// Session-backed behaviour decorating a [`FormController`].
///
/// The decorator layers three things onto the wrapped controller:
/// - merges session-persisted field values, and values re-submitted with a
///   validation error, into the values the step renders
/// - filters session-recorded validation errors down to the fields of the
///   current step
/// - turns a missing-prerequisite error into a redirect to the step the
///   user should actually be on
///
/// It must be composed downstream of session middleware: a request without
/// a session handle fails [`configure`](FormController::configure).
///
/// # Examples
/// ```
/// # use serde_json::Value;
/// # use formflow_session::SessionModel;
/// # use formflow_step::{FieldConfig, FieldOptions, StepConfig, StepEntry};
/// # use formflow_controller::{Controller, FormController, FormOptions, Request, Response, SessionBehaviour};
/// let mut fields = FieldConfig::new();
/// fields.insert("first_name", FieldOptions::default()).unwrap();
///
/// let mut steps = StepConfig::new();
/// steps.insert("/name", StepEntry::leads_to("/email")).unwrap();
/// steps.insert("/email", StepEntry::terminal()).unwrap();
///
/// let behaviour = SessionBehaviour::new(Controller::new(FormOptions {
///   template: "name".to_owned(),
///   fields,
///   steps,
/// }));
///
/// // a previous visit left a value in the session
/// let mut session = SessionModel::new();
/// session.set("first_name", "Ada");
///
/// let mut req = Request::new("/name").with_session(session);
/// let res = Response::new();
/// behaviour.configure(&mut req).unwrap();
///
/// let values = behaviour.get_values(&req, &res).unwrap();
/// assert_eq!(values.get("first_name"), Some(&Value::from("Ada")));
/// ```
#[derive(Debug)]
pub struct SessionBehaviour<C: FormController> {
  inner: C,
}

impl<C: FormController> SessionBehaviour<C> {
  /// Decorate a controller
  pub fn new(inner: C) -> Self {
    SessionBehaviour { inner }
  }

  /// The wrapped controller
  pub fn inner(&self) -> &C {
    &self.inner
  }

  /// Redirect a user who requested a step whose prerequisites are not
  /// complete.
  ///
  /// The target is the step configured to follow the most recently
  /// completed one, or the first configured step when nothing has been
  /// completed yet. A last completed step with no configured `next` is a
  /// configuration dead end: no redirect is issued and a warning is
  /// logged.
  pub fn missing_prereq_handler(&self, req: &mut Request, res: &mut Response) {
    let completed = match req.session() {
      Some(session) => session.completed_steps(),
      None => Vec::new(),
    };

    let steps = &self.inner.options().steps;
    let target = match completed.last() {
      None => steps.first_step(),
      Some(last) => steps.next_of(&last[..]),
    };

    match target {
      Some(path) => {
        let path = path.to_owned();
        event!(Level::DEBUG, redirect = %path, "redirecting to the next incomplete step");
        res.redirect(path);
      }
      None => {
        event!(Level::WARN, path = req.path(), "last completed step has no configured next step");
      }
    }
  }
}

impl<C: FormController> FormController for SessionBehaviour<C> {
  fn options(&self) -> &FormOptions {
    self.inner.options()
  }

  fn configure(&self, req: &mut Request) -> Result<(), Error> {
    if req.session().is_none() {
      return Err(Error::SessionNotConfigured);
    }
    self.inner.configure(req)
  }

  fn get_values(&self, req: &Request, res: &Response) -> Result<ValueMap, Error> {
    let mut values = self.inner.get_values(req, res)?;
    let session = match req.session() {
      Some(session) => session,
      None => return Err(Error::SessionNotConfigured),
    };

    // session-persisted values override the base resolution, and values
    // re-submitted with a validation error override those in turn
    values.extend(session.values());
    values.extend(session.error_values());
    Ok(values)
  }

  fn get_errors(&self, req: &Request, _res: &Response) -> ErrorMap {
    let session = match req.session() {
      Some(session) => session,
      None => return ErrorMap::new(),
    };

    let fields = &req.form().fields;
    session
      .errors()
      .into_iter()
      .filter(|(name, descriptor)| fields.contains(&name[..]) && !descriptor.has_redirect())
      .collect()
  }

  fn error_handler(&self, err: Error, req: &mut Request, res: &mut Response) {
    match err {
      Error::MissingPrereq => self.missing_prereq_handler(req, res),
      err => self.inner.error_handler(err, req, res),
    }
  }
}
