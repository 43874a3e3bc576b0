//! HTTP implementation of [`FigmaApi`] on top of reqwest.

use std::fmt;

use async_trait::async_trait;
use reqwest::Response;

use crate::error::{FigsliceError, Result};
use crate::types::{format_scale, ImageFormat};

use super::model::{FileResponse, Node, RenderResponse};
use super::FigmaApi;

/// Root of the public Figma REST API.
pub const DEFAULT_API_BASE: &str = "https://api.figma.com";

/// Header carrying a personal access token.
const TOKEN_HEADER: &str = "X-Figma-Token";

/// Authenticated Figma REST client.
#[derive(Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    base: String,
    token: String,
}

impl FigmaClient {
    /// Create a client against the public API.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base(token, DEFAULT_API_BASE)
    }

    /// Create a client against a different API root (proxies, mirrors).
    pub fn with_base(token: impl Into<String>, base: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("figslice/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn file_url(&self, file_key: &str) -> String {
        format!("{}/v1/files/{}", self.base, file_key)
    }

    fn images_url(&self, file_key: &str) -> String {
        format!("{}/v1/images/{}", self.base, file_key)
    }

    /// Send an authenticated GET and fail on any non-success status.
    async fn get_api(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FigsliceError::Api {
                status: status.as_u16(),
                message: body_text(response).await,
            });
        }

        Ok(response)
    }
}

impl fmt::Debug for FigmaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl FigmaApi for FigmaClient {
    async fn document(&self, file_key: &str) -> Result<Node> {
        let response = self.get_api(&self.file_url(file_key), &[]).await?;
        let file: FileResponse = response.json().await?;
        Ok(file.document)
    }

    async fn render(
        &self,
        file_key: &str,
        ids: &[&str],
        format: ImageFormat,
        scale: f64,
    ) -> Result<RenderResponse> {
        let query = [
            ("ids", ids.join(",")),
            ("format", format.to_string()),
            ("scale", format_scale(scale)),
        ];
        let response = self.get_api(&self.images_url(file_key), &query).await?;
        Ok(response.json().await?)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        // Rendered URLs are pre-signed; the token is not sent along.
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FigsliceError::Download {
                status: status.as_u16(),
                message: body_text(response).await,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

async fn body_text(response: Response) -> String {
    response.text().await.unwrap_or_default()
}
