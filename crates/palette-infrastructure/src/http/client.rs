//! reqwest-backed request layer for the palette service.

use async_trait::async_trait;
use palette_core::auth::{AuthApi, AuthenticatedUser, Credentials};
use palette_core::config::ClientConfig;
use palette_core::error::{PaletteError, Result};
use palette_core::outcome::{Ack, ApiOutcome};
use palette_core::palette::{ColorId, CreatedPalette, NewPalette, Palette, PaletteApi, PaletteId};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;

use super::response::{classify_ack, classify_created, classify_json};

/// HTTP client for the palette service.
///
/// One cookie jar is shared by every request, so the session cookie the service sets
/// on login accompanies palette requests and logout. All requests carry
/// `Content-Type: application/json`. Nothing is retried.
#[derive(Clone)]
pub struct HttpPaletteClient {
    base: Url,
    client: Client,
}

impl HttpPaletteClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| PaletteError::config(format!("invalid base_url: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| PaletteError::config(format!("could not build HTTP client: {}", e)))?;

        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Sends one request and returns status and raw body, or a transport message.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> std::result::Result<(StatusCode, Vec<u8>), String> {
        let url = self
            .base
            .join(path)
            .map_err(|e| format!("invalid request path {}: {}", path, e))?;

        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "Request did not complete");
            e.to_string()
        })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| e.to_string())?;

        tracing::debug!(%method, path, status = status.as_u16(), "Request finished");
        Ok((status, bytes.to_vec()))
    }
}

#[async_trait]
impl AuthApi for HttpPaletteClient {
    async fn login(&self, credentials: &Credentials) -> ApiOutcome<AuthenticatedUser> {
        match self.send(Method::POST, "/api/login", Some(credentials)).await {
            Ok((status, body)) => classify_json(status, &body),
            Err(message) => ApiOutcome::transport(message),
        }
    }

    async fn register(&self, credentials: &Credentials) -> ApiOutcome<Ack> {
        match self.send(Method::POST, "/api/register", Some(credentials)).await {
            Ok((status, body)) => classify_ack(status, &body),
            Err(message) => ApiOutcome::transport(message),
        }
    }

    async fn logout(&self) -> ApiOutcome<Ack> {
        match self.send::<()>(Method::POST, "/api/logout", None).await {
            Ok((status, body)) => classify_ack(status, &body),
            Err(message) => ApiOutcome::transport(message),
        }
    }
}

#[async_trait]
impl PaletteApi for HttpPaletteClient {
    async fn list_palettes(&self) -> ApiOutcome<Vec<Palette>> {
        match self.send::<()>(Method::GET, "/api/palettes", None).await {
            Ok((status, body)) => classify_json(status, &body),
            Err(message) => ApiOutcome::transport(message),
        }
    }

    async fn create_palette(&self, name: &str) -> ApiOutcome<CreatedPalette> {
        let body = NewPalette {
            name: name.to_string(),
        };
        match self.send(Method::POST, "/api/palettes", Some(&body)).await {
            Ok((status, body)) => classify_created(status, &body),
            Err(message) => ApiOutcome::transport(message),
        }
    }

    async fn delete_palette(&self, id: PaletteId) -> ApiOutcome<Ack> {
        let path = format!("/api/palettes/{}", id);
        match self.send::<()>(Method::DELETE, &path, None).await {
            Ok((status, body)) => classify_ack(status, &body),
            Err(message) => ApiOutcome::transport(message),
        }
    }

    async fn delete_color(&self, palette_id: PaletteId, color_id: ColorId) -> ApiOutcome<Ack> {
        let path = format!("/api/palettes/{}/colors/{}", palette_id, color_id);
        match self.send::<()>(Method::DELETE, &path, None).await {
            Ok((status, body)) => classify_ack(status, &body),
            Err(message) => ApiOutcome::transport(message),
        }
    }
}
