//! Palette domain module.
//!
//! - `model`: palettes, colors and request/response bodies
//! - `api`: the request port the sync controller talks to

mod api;
mod model;

pub use api::PaletteApi;
pub use model::{
    Color, ColorId, CreatedPalette, MISSING_CHANNEL, NO_PALETTES_LABEL, NewPalette, Palette,
    PaletteId, Rgb,
};
