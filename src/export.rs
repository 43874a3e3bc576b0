//! Export driver: render slices per scale and write the images to disk.
//!
//! Each scale is one batched render request for every slice, followed by one
//! download per returned URL. A slice without a URL is reported and skipped;
//! any other failure stops the whole run, including the scales not yet
//! processed.

use std::path::{Path, PathBuf};

use crate::api::FigmaApi;
use crate::error::{FigsliceError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{format_scale, ImageFormat, ScaleSet, Slice};

/// Where and how to export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub file_key: String,
    pub format: ImageFormat,
    pub output: PathBuf,
}

/// A slice the render endpoint returned no image for.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingImage {
    pub slice: Slice,
    pub scale: f64,
}

/// Outcome of a completed export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Files written, in the order they were written.
    pub written: Vec<PathBuf>,
    /// Skipped (slice, scale) pairs.
    pub missing: Vec<MissingImage>,
}

/// `<name>@<scale>x.<format>`
pub fn output_filename(slice: &Slice, scale: f64, format: ImageFormat) -> String {
    format!("{}@{}x.{}", slice.name, format_scale(scale), format)
}

/// Export every slice at every scale.
///
/// Creates the output directory first. Scales are processed in order and a
/// scale's files are all written before the next scale is requested.
pub async fn export_slices<A>(
    api: &A,
    options: &ExportOptions,
    slices: &[Slice],
    scales: &ScaleSet,
    printer: &Printer,
) -> Result<ExportSummary>
where
    A: FigmaApi + ?Sized,
{
    tokio::fs::create_dir_all(&options.output)
        .await
        .map_err(|e| FigsliceError::Io {
            path: options.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;

    let mut summary = ExportSummary::default();
    for scale in scales.iter() {
        export_scale(api, options, slices, scale, printer, &mut summary).await?;
    }

    Ok(summary)
}

async fn export_scale<A>(
    api: &A,
    options: &ExportOptions,
    slices: &[Slice],
    scale: f64,
    printer: &Printer,
    summary: &mut ExportSummary,
) -> Result<()>
where
    A: FigmaApi + ?Sized,
{
    let label = format_scale(scale);
    printer.status(
        "Rendering",
        &format!("{} at {}x", plural(slices.len(), "slice", "slices"), label),
    );

    let ids: Vec<&str> = slices.iter().map(|s| s.id.as_str()).collect();
    printer.verbose("Request", &format!("ids={} format={}", ids.join(","), options.format));
    let response = api
        .render(&options.file_key, &ids, options.format, scale)
        .await?;

    if let Some(message) = &response.err {
        return Err(FigsliceError::Render {
            scale: label,
            message: message.clone(),
        });
    }

    for slice in slices {
        let Some(url) = response.url_for(&slice.id) else {
            printer.warning(
                "Missing",
                &format!("image URL for {} ({}) at {}x", slice.id, slice.name, label),
            );
            summary.missing.push(MissingImage {
                slice: slice.clone(),
                scale,
            });
            continue;
        };

        let filename = output_filename(slice, scale, options.format);
        let path = options.output.join(&filename);

        printer.verbose("Downloading", url);
        let bytes = api.download(url).await?;
        write_image(&path, &bytes).await?;

        printer.status("Saved", &filename);
        summary.written.push(path);
    }

    Ok(())
}

async fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| FigsliceError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write {}: {}", display_path(path), e),
        })
}
