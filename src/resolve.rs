//! Input resolution: decide where the slice list comes from and load it.

use std::path::PathBuf;

use crate::api::FigmaApi;
use crate::discovery::{discover_slices, DiscoveryOptions};
use crate::error::{FigsliceError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{parse_slices, validate_slices, Slice};

/// Where the slices of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceSource {
    /// JSON file on disk.
    File(PathBuf),
    /// JSON passed directly on the command line or in the environment.
    Inline(String),
    /// Walk the remote document.
    Discover(DiscoveryOptions),
}

impl SliceSource {
    /// Pick a source by precedence: file, then inline JSON, then discovery.
    pub fn select(
        file: Option<PathBuf>,
        inline: Option<String>,
        discover: bool,
        options: DiscoveryOptions,
    ) -> Result<Self> {
        if let Some(path) = file {
            return Ok(SliceSource::File(path));
        }
        if let Some(json) = inline {
            return Ok(SliceSource::Inline(json));
        }
        if discover {
            return Ok(SliceSource::Discover(options));
        }

        Err(FigsliceError::Config {
            message: "No slices provided".to_string(),
            help: Some("Use --slices, --slices-file or --discover".to_string()),
        })
    }
}

/// Load and validate the slices of `source`.
///
/// Only discovery touches the network; file and inline sources are fully
/// validated without a request.
pub async fn resolve_slices<A>(
    source: &SliceSource,
    api: &A,
    file_key: &str,
    printer: &Printer,
) -> Result<Vec<Slice>>
where
    A: FigmaApi + ?Sized,
{
    let slices = match source {
        SliceSource::File(path) => {
            printer.status("Loading", &display_path(path));
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| FigsliceError::Io {
                    path: path.clone(),
                    message: format!("Failed to read slices file: {}", e),
                })?;
            parse_slices(&text)?
        }
        SliceSource::Inline(json) => parse_slices(json)?,
        SliceSource::Discover(options) => discover_slices(api, file_key, options, printer).await?,
    };

    validate_slices(&slices)?;
    printer.verbose("Resolved", &plural(slices.len(), "slice", "slices"));

    Ok(slices)
}
