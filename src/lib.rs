//! figslice - Figma slice exporter
//!
//! A library for resolving named design nodes ("slices") and exporting them
//! from the Figma API as image files at one or more scales.

pub mod api;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod export;
pub mod manifest;
pub mod output;
pub mod resolve;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{FigmaApi, FigmaClient, Node, RenderResponse};
pub use discovery::{discover_slices, select_slices, DiscoveryOptions, NameRegistry, SliceFilter};
pub use error::{FigsliceError, Result};
pub use export::{export_slices, output_filename, ExportOptions, ExportSummary, MissingImage};
pub use manifest::Manifest;
pub use resolve::{resolve_slices, SliceSource};
pub use types::{parse_slices, ImageFormat, ScaleSet, Slice, SliceList};
