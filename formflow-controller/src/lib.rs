//! Controller layer for FormFlow wizards.
//!
//! [`SessionBehaviour`] is the primary interface: a decorator that layers
//! session-backed state onto any [`FormController`].

mod errors;
pub use errors::Error;

mod request;
pub use request::{Request, Response};

mod controller;
pub use controller::{Controller, FormController, FormOptions};

mod behaviour;
pub use behaviour::SessionBehaviour;

#[cfg(test)]
mod test;
