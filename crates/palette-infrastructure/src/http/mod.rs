//! Request layer over HTTP.

mod client;
pub mod response;

pub use client::HttpPaletteClient;
