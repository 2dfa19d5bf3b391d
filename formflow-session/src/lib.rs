//! Session state for a multi-step form wizard.
//!
//! [`SessionModel`] is the per-user key-value store a wizard request reads
//! and writes. Beyond arbitrary field values it holds three reserved
//! bookkeeping keys: recorded validation errors, the values that were
//! submitted alongside those errors, and the ordered history of completed
//! steps.

mod model;
pub use model::{ErrorMap, SessionModel, ValueMap, KEY_ERRORS, KEY_ERROR_VALUES, KEY_STEPS};

mod descriptor;
pub use descriptor::ErrorDescriptor;
