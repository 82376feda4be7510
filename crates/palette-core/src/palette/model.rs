//! Palette and color domain models, shaped like the service's JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub type PaletteId = i64;
pub type ColorId = i64;

/// Label of the selector entry shown when the user has no palettes.
pub const NO_PALETTES_LABEL: &str = "— No palettes yet —";

/// Rendered in place of a missing rgb channel.
pub const MISSING_CHANNEL: &str = "?";

/// A named, ordered collection of saved colors belonging to one user.
///
/// Owned by the service; the client only ever holds the copy from the latest list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: PaletteId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Vec<Color>,
}

/// A saved color. Deleting one never affects its palette's identity.
///
/// The service echoes whatever the client sent when the color was added, so `name`
/// and `hex` arrive as `null` when they were left out. Those decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hex: String,
    #[serde(default)]
    pub rgb: Option<Rgb>,
}

impl Color {
    /// `rgb(r, g, b)` with `?` for any channel the service left out.
    pub fn rgb_label(&self) -> String {
        match &self.rgb {
            Some(rgb) => rgb.to_string(),
            None => format!("rgb({0}, {0}, {0})", MISSING_CHANNEL),
        }
    }
}

/// Channels are optional; the service is not trusted to always send all three.
///
/// Any JSON number is accepted as a channel (`255.0` reads as 255). Anything else,
/// including `null` and strings, reads as a missing channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    #[serde(default, deserialize_with = "lenient_channel")]
    pub r: Option<i64>,
    #[serde(default, deserialize_with = "lenient_channel")]
    pub g: Option<i64>,
    #[serde(default, deserialize_with = "lenient_channel")]
    pub b: Option<i64>,
}

impl Rgb {
    pub fn new(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |c: Option<i64>| c.map_or_else(|| MISSING_CHANNEL.to_string(), |v| v.to_string());
        write!(
            f,
            "rgb({}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_channel<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f.round() as i64)
    }))
}

/// Body of `POST /api/palettes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPalette {
    pub name: String,
}

/// The part of a create response the client relies on.
///
/// A 2xx answer without an `id` is still a successful create; the reload then
/// simply has no preferred selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPalette {
    #[serde(default)]
    pub id: Option<PaletteId>,
}
