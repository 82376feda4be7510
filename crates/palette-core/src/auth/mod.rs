//! Auth domain module.

mod api;
mod model;

pub use api::AuthApi;
pub use model::{AuthLabels, AuthMode, AuthenticatedUser, Credentials};
