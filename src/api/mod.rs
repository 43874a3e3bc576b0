//! Access to the remote design file service.
//!
//! The pipeline talks to Figma only through the [`FigmaApi`] trait so the
//! discovery and export stages can run against an in-memory document in
//! tests. [`FigmaClient`] is the HTTP implementation.

mod client;
mod model;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ImageFormat;

pub use client::{FigmaClient, DEFAULT_API_BASE};
pub use model::{FileResponse, Node, RenderResponse};

/// Remote operations used by the pipeline.
#[async_trait]
pub trait FigmaApi {
    /// Fetch the document tree of a file. The returned node is the document
    /// root; its children are the pages.
    async fn document(&self, file_key: &str) -> Result<Node>;

    /// Ask the render endpoint for image URLs of `ids` at one scale.
    async fn render(
        &self,
        file_key: &str,
        ids: &[&str],
        format: ImageFormat,
        scale: f64,
    ) -> Result<RenderResponse>;

    /// Download the bytes behind a rendered image URL.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}
