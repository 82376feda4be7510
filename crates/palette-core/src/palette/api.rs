//! Palette request port.

use async_trait::async_trait;

use super::model::{ColorId, CreatedPalette, Palette, PaletteId};
use crate::outcome::{Ack, ApiOutcome};

/// Request layer for the palette endpoints.
///
/// Implementations must classify responses into [`ApiOutcome`] themselves. In particular
/// `create_palette` reports `Success` whenever the body carries an `id`, whatever the status.
#[async_trait]
pub trait PaletteApi: Send + Sync {
    /// `GET /api/palettes`
    async fn list_palettes(&self) -> ApiOutcome<Vec<Palette>>;

    /// `POST /api/palettes` with `{name}`
    async fn create_palette(&self, name: &str) -> ApiOutcome<CreatedPalette>;

    /// `DELETE /api/palettes/{id}`
    async fn delete_palette(&self, id: PaletteId) -> ApiOutcome<Ack>;

    /// `DELETE /api/palettes/{id}/colors/{colorId}`
    async fn delete_color(&self, palette_id: PaletteId, color_id: ColorId) -> ApiOutcome<Ack>;
}
