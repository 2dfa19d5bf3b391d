//! Session-backed behaviour for multi-step form wizards.
//!
//! [`SessionBehaviour`] decorates a form-step controller with per-user
//! session state: values persisted on earlier visits (and values
//! re-submitted with a validation error) are merged into the rendered
//! step, recorded validation errors are filtered down to the fields of the
//! current step, and a user who skipped ahead is redirected back to the
//! step that follows the last one they completed.

// include commonly used traits
pub mod prelude {
  pub use formflow_controller::FormController;
}

pub mod object {
  pub use formflow_base::{KeyError, OrderedMap};
}

pub mod session {
  pub use formflow_session::{ErrorDescriptor, ErrorMap, SessionModel, ValueMap};
  pub use formflow_session::{KEY_ERRORS, KEY_ERROR_VALUES, KEY_STEPS};
}

pub mod step {
  pub use formflow_step::{FieldConfig, FieldOptions, StepConfig, StepEntry};
}

pub use formflow_controller::{Controller, FormController, FormOptions, Request, Response};
pub use formflow_controller::Error;
pub use formflow_controller::SessionBehaviour;

#[cfg(test)]
mod tests {
  use serde_json::json;
  use formflow_test_util::{test_field_config, test_session, test_step_config};
  use crate::session::ErrorDescriptor;
  use crate::{Controller, Error, FormController, FormOptions, Request, Response, SessionBehaviour};

  fn wizard() -> SessionBehaviour<Controller> {
    SessionBehaviour::new(Controller::new(FormOptions {
      template: "index".to_owned(),
      fields: test_field_config(&["field1", "field2"]),
      steps: test_step_config(),
    }))
  }

  #[test]
  fn full_step_lifecycle() {
    let wizard = wizard();

    // first visit leaves a value and a validation error in the session
    let mut session = test_session();
    session.set("field1", "saved");
    let mut errors = crate::session::ErrorMap::new();
    errors.insert("field1".to_owned(), ErrorDescriptor::with_message("Enter a value"));
    errors.insert("other_step_field".to_owned(), ErrorDescriptor::marker("ignored"));
    session.set_errors(errors);
    let mut error_values = crate::session::ValueMap::new();
    error_values.insert("field1".to_owned(), json!("resubmitted"));
    session.set_error_values(error_values);
    session.push_completed_step("/one");

    let mut req = Request::new("/two").with_session(session);
    let res = Response::new();
    wizard.configure(&mut req).unwrap();

    // the re-submitted value wins over the saved one
    let values = wizard.get_values(&req, &res).unwrap();
    assert_eq!(values.get("field1"), Some(&json!("resubmitted")));

    // only errors for this step's fields are shown
    let errors = wizard.get_errors(&req, &res);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("field1"));
  }

  #[test]
  fn skipping_ahead_redirects_back() {
    let wizard = wizard();

    let mut session = test_session();
    session.push_completed_step("/one");

    let mut req = Request::new("/three").with_session(session);
    let mut res = Response::new();
    wizard.configure(&mut req).unwrap();

    wizard.error_handler(Error::MissingPrereq, &mut req, &mut res);
    assert_eq!(res.redirected_to(), Some("/two"));
  }

  #[test]
  fn session_middleware_is_required() {
    let wizard = wizard();
    let mut req = Request::new("/one");
    assert_eq!(wizard.configure(&mut req), Err(Error::SessionNotConfigured));
  }
}
