use tracing::{event, Level};
use formflow_session::{ErrorMap, ValueMap};
use formflow_step::{FieldConfig, StepConfig};
use super::{Error, Request, Response};

/// Configuration for a form-step controller
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
  /// Template the step renders with
  pub template: String,

  /// Fields collected on the step
  pub fields: FieldConfig,

  /// The wizard's step map
  pub steps: StepConfig,
}

/// The capability set of a form-step controller.
///
/// This is the seam the session behaviour decorates: the full rendering
/// and POST pipeline is owned by the hosting framework, which only needs
/// to expose value resolution and terminal error handling through this
/// trait.
pub trait FormController {
  /// The controller's static configuration
  fn options(&self) -> &FormOptions;

  /// Per-request setup. The default seeds the request-scoped form options
  /// from the static configuration so field lookups read fresh,
  /// request-local state.
  fn configure(&self, req: &mut Request) -> Result<(), Error> {
    req.set_form(self.options().clone());
    Ok(())
  }

  /// Resolve the values rendered into the step's fields
  fn get_values(&self, req: &Request, res: &Response) -> Result<ValueMap, Error>;

  /// Collect the validation errors displayed on the step
  fn get_errors(&self, _req: &Request, _res: &Response) -> ErrorMap {
    ErrorMap::new()
  }

  /// Terminal handling for an error raised during the step lifecycle
  fn error_handler(&self, err: Error, req: &mut Request, res: &mut Response);
}

/// A minimal base controller that resolves values from field defaults.
///
/// The smallest collaborator the session behaviour can wrap when no
/// external pipeline is composed in.
#[derive(Debug)]
pub struct Controller {
  options: FormOptions,
}

impl Controller {
  pub fn new(options: FormOptions) -> Self {
    Controller { options }
  }
}

impl FormController for Controller {
  fn options(&self) -> &FormOptions {
    &self.options
  }

  fn get_values(&self, req: &Request, _res: &Response) -> Result<ValueMap, Error> {
    // read the request-scoped field set so dynamically added fields
    // resolve their defaults too
    let mut values = ValueMap::new();
    for (name, field) in req.form().fields.iter() {
      if let Some(default) = &field.default {
        values.insert(name.to_owned(), default.clone());
      }
    }
    Ok(values)
  }

  fn error_handler(&self, err: Error, req: &mut Request, res: &mut Response) {
    event!(Level::ERROR, error = ?err, path = req.path(), "step failed");
    res.set_status(err.status());
  }
}
