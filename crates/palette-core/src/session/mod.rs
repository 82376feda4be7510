//! Session domain module.

mod model;

pub use model::Session;
