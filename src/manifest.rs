//! Project manifest (figslice.yaml) parsing.
//!
//! The manifest holds per-project defaults so a repository can pin its file
//! key, output directory and scales. Command-line flags and environment
//! variables always win over manifest values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FigsliceError, Result};
use crate::types::{ImageFormat, ScaleSet};

/// The name of the manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "figslice.yaml";

/// Scales as written in YAML: either `[2, 3]` or `"2,3"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalesValue {
    List(Vec<f64>),
    Text(String),
}

/// Project manifest loaded from figslice.yaml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Figma file key.
    pub file: Option<String>,

    /// Output directory for exported images.
    pub output: Option<PathBuf>,

    /// Export scales.
    pub scales: Option<ScalesValue>,

    /// Image format (png, jpg, svg, pdf).
    pub format: Option<String>,

    /// JSON slices list, relative to the working directory.
    pub slices_file: Option<PathBuf>,

    /// Discover slices from the document when no list is given.
    pub discover: Option<bool>,

    /// Page name pattern for discovery.
    pub page_pattern: Option<String>,

    /// Node name pattern for discovery.
    pub name_pattern: Option<String>,

    /// Alternative API root.
    pub api_base: Option<String>,
}

impl Manifest {
    /// Load manifest from a figslice.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FigsliceError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| FigsliceError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Find the manifest to use.
    ///
    /// An explicit path must exist. Without one, `figslice.yaml` in `dir` is
    /// used when present and defaults apply otherwise.
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(FigsliceError::Config {
                    message: format!("Manifest not found: {}", path.display()),
                    help: Some("Check --config or FIGSLICE_CONFIG".to_string()),
                });
            }
            return Ok(Some((path.to_path_buf(), Self::load(path)?)));
        }

        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            let manifest = Self::load(&path)?;
            return Ok(Some((path, manifest)));
        }

        Ok(None)
    }

    /// Parsed scales, if the manifest sets any.
    pub fn scale_set(&self) -> Option<Result<ScaleSet>> {
        self.scales.as_ref().map(|value| match value {
            ScalesValue::List(values) => ScaleSet::from_values(values.clone()),
            ScalesValue::Text(raw) => ScaleSet::parse(raw),
        })
    }

    /// Parsed image format, if the manifest sets one.
    pub fn image_format(&self) -> Option<Result<ImageFormat>> {
        self.format.as_deref().map(str::parse)
    }
}
