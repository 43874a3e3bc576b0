//! In-memory [`FigmaApi`] used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{FigmaApi, Node, RenderResponse};
use crate::error::{FigsliceError, Result};
use crate::types::{format_scale, ImageFormat};

/// One recorded render request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub ids: Vec<String>,
    pub format: ImageFormat,
    pub scale: f64,
}

#[derive(Debug, Default)]
pub struct FakeApi {
    document: Node,
    renders: HashMap<String, RenderResponse>,
    images: HashMap<String, Vec<u8>>,
    document_calls: Mutex<Vec<String>>,
    render_calls: Mutex<Vec<RenderCall>>,
    download_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new(document: Node) -> Self {
        Self {
            document,
            ..Default::default()
        }
    }

    /// Answer render requests at `scale` with `response`. Unconfigured scales
    /// answer with an empty image map.
    pub fn with_render(mut self, scale: f64, response: RenderResponse) -> Self {
        self.renders.insert(format_scale(scale), response);
        self
    }

    /// Serve `bytes` at `url`. Unknown URLs fail with a 404.
    pub fn with_image(mut self, url: &str, bytes: &[u8]) -> Self {
        self.images.insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn document_requests(&self) -> Vec<String> {
        self.document_calls.lock().unwrap().clone()
    }

    pub fn render_requests(&self) -> Vec<RenderCall> {
        self.render_calls.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.download_calls.lock().unwrap().clone()
    }
}

/// Build a render response mapping ids to URLs.
pub fn images(pairs: &[(&str, &str)]) -> RenderResponse {
    RenderResponse {
        err: None,
        images: pairs
            .iter()
            .map(|(id, url)| (id.to_string(), Some(url.to_string())))
            .collect(),
    }
}

#[async_trait]
impl FigmaApi for FakeApi {
    async fn document(&self, file_key: &str) -> Result<Node> {
        self.document_calls.lock().unwrap().push(file_key.to_string());
        Ok(self.document.clone())
    }

    async fn render(
        &self,
        _file_key: &str,
        ids: &[&str],
        format: ImageFormat,
        scale: f64,
    ) -> Result<RenderResponse> {
        self.render_calls.lock().unwrap().push(RenderCall {
            ids: ids.iter().map(|id| id.to_string()).collect(),
            format,
            scale,
        });
        Ok(self
            .renders
            .get(&format_scale(scale))
            .cloned()
            .unwrap_or_default())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.download_calls.lock().unwrap().push(url.to_string());
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| FigsliceError::Download {
                status: 404,
                message: format!("no image at {}", url),
            })
    }
}
