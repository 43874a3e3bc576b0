//! Export command implementation.
//!
//! Resolves the slices, then renders and downloads them at every scale.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Args;

use crate::error::Result;
use crate::export::{export_slices, ExportOptions, ExportSummary};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::resolve::{resolve_slices, SliceSource};
use crate::types::{ImageFormat, ScaleSet};

use super::{ConnectionArgs, PatternArgs};

const DEFAULT_OUTPUT: &str = "slices";
const DEFAULT_SCALES: &str = "2,3";

/// Render slices and write them as images
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// JSON string with a slices array
    #[arg(long, env = "FIGMA_SLICES")]
    pub slices: Option<String>,

    /// Path to a JSON file with a slices array
    #[arg(long, env = "FIGMA_SLICES_FILE")]
    pub slices_file: Option<PathBuf>,

    /// Discover slices from the document when no list is given
    #[arg(long, env = "FIGMA_DISCOVER", value_parser = FalseyValueParser::new())]
    pub discover: bool,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Output directory [default: ./slices]
    #[arg(long, short, env = "OUTPUT_DIR")]
    pub out: Option<PathBuf>,

    /// Comma-separated export scales [default: 2,3]
    #[arg(long, env = "FIGMA_SCALES")]
    pub scales: Option<String>,

    /// Image format [default: png]
    #[arg(long, value_enum, ignore_case = true, env = "FIGMA_FORMAT")]
    pub format: Option<ImageFormat>,
}

/// Pick the slice source. Any list given by flag or environment shadows the
/// manifest's `slices_file`.
fn slice_source(args: &ExportArgs, manifest: &Manifest) -> Result<SliceSource> {
    let file = match (&args.slices_file, &args.slices) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(_)) => None,
        (None, None) => manifest.slices_file.clone(),
    };

    SliceSource::select(
        file,
        args.slices.clone(),
        args.discover || manifest.discover.unwrap_or(false),
        args.patterns.options(manifest),
    )
}

pub async fn run(args: ExportArgs, printer: &Printer) -> Result<ExportSummary> {
    let connection = args.connection.connect(printer).await?;
    let manifest = &connection.manifest;

    // Settings are checked before the first request.
    let scales = match (&args.scales, manifest.scale_set()) {
        (Some(raw), _) => ScaleSet::parse(raw)?,
        (None, Some(scales)) => scales?,
        (None, None) => ScaleSet::parse(DEFAULT_SCALES)?,
    };

    let format = match (args.format, manifest.image_format()) {
        (Some(format), _) => format,
        (None, Some(format)) => format?,
        (None, None) => ImageFormat::default(),
    };

    let output = args
        .out
        .clone()
        .or_else(|| manifest.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let source = slice_source(&args, manifest)?;

    printer.verbose("Scales", &scales.to_string());
    printer.verbose("Output", &display_path(&output));

    let slices = resolve_slices(
        &source,
        &connection.client,
        &connection.file_key,
        printer,
    )
    .await?;

    let options = ExportOptions {
        file_key: connection.file_key.clone(),
        format,
        output,
    };
    let summary = export_slices(&connection.client, &options, &slices, &scales, printer).await?;

    let written = plural(summary.written.len(), "file", "files");
    let target = printer.cyan(&display_path(&options.output));
    if summary.missing.is_empty() {
        printer.info("Finished", &format!("{} to {}", written, target));
    } else {
        printer.warning(
            "Finished",
            &format!("{} to {} ({} missing)", written, target, summary.missing.len()),
        );
    }

    Ok(summary)
}
