//! Response payloads of the Figma REST API.
//!
//! Only the fields the exporter reads are modelled; everything else in the
//! payload is ignored. Missing fields fall back to empty values so partial
//! documents still deserialize.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Node types that only group other nodes and are never exported.
const CONTAINER_TYPES: &[&str] = &["DOCUMENT", "CANVAS"];

/// A node of the document tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub children: Vec<Node>,
    /// Export presets configured on the node; their contents are opaque here.
    #[serde(rename = "exportSettings")]
    pub export_settings: Vec<Value>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_export_settings(mut self, settings: Vec<Value>) -> Self {
        self.export_settings = settings;
        self
    }

    /// True for document roots and pages.
    pub fn is_container(&self) -> bool {
        CONTAINER_TYPES.contains(&self.kind.as_str())
    }

    pub fn has_export_settings(&self) -> bool {
        !self.export_settings.is_empty()
    }
}

/// `GET /v1/files/:key`
#[derive(Debug, Clone, Deserialize)]
pub struct FileResponse {
    pub document: Node,
}

/// `GET /v1/images/:key`
///
/// Nodes that failed to render map to `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderResponse {
    pub err: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub images: HashMap<String, Option<String>>,
}

/// `"images": null` reads as an empty map; every slice is then missing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

impl RenderResponse {
    /// Image URL for a node, treating `null` and empty strings as missing.
    pub fn url_for(&self, id: &str) -> Option<&str> {
        self.images
            .get(id)
            .and_then(|url| url.as_deref())
            .filter(|url| !url.is_empty())
    }
}
