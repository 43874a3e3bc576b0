//! Automatic slice discovery from a file's document tree.
//!
//! Instead of an explicit slices list, discovery fetches the document,
//! walks every page and picks the nodes to export: those whose name matches
//! a pattern, or, without a pattern, those that carry export settings in the
//! design file. Selected names are sanitized for the filesystem and made
//! unique in document order.
//!
//! # Example
//!
//! ```ignore
//! use figslice::discovery::{discover_slices, DiscoveryOptions};
//!
//! let options = DiscoveryOptions {
//!     page_pattern: Some("^Icons$".into()),
//!     name_pattern: None,
//! };
//! let slices = discover_slices(&client, "FILE_KEY", &options, &printer).await?;
//! ```

mod names;
mod walker;

use regex::Regex;

use crate::api::{FigmaApi, Node};
use crate::error::{FigsliceError, Result};
use crate::output::{plural, Printer};
use crate::types::Slice;

pub use names::{sanitize_name, NameRegistry};
pub use walker::{collect_nodes, select_slices, DiscoveredNode};

/// User-supplied discovery patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Only pages whose name matches are walked.
    pub page_pattern: Option<String>,
    /// Select nodes by name instead of by export settings.
    pub name_pattern: Option<String>,
}

/// Compiled selection rules for one discovery run.
#[derive(Debug, Clone)]
pub struct SliceFilter {
    pages: Option<Regex>,
    names: Option<Regex>,
}

impl SliceFilter {
    /// Compile the patterns in `options`. A malformed pattern fails with its
    /// text in the error.
    pub fn new(options: &DiscoveryOptions) -> Result<Self> {
        Ok(Self {
            pages: compile(options.page_pattern.as_deref())?,
            names: compile(options.name_pattern.as_deref())?,
        })
    }

    pub fn includes_page(&self, page: &Node) -> bool {
        self.pages.as_ref().map_or(true, |re| re.is_match(&page.name))
    }

    /// Selection test for a non-container node.
    pub fn selects(&self, node: &Node) -> bool {
        match &self.names {
            Some(re) => re.is_match(&node.name),
            None => node.has_export_settings(),
        }
    }

    pub fn has_name_pattern(&self) -> bool {
        self.names.is_some()
    }

    /// Human-readable description of the active selection rule.
    pub fn rule(&self) -> String {
        match &self.names {
            Some(re) => format!("/{}/", re.as_str()),
            None => "export settings".to_string(),
        }
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|e| FigsliceError::Pattern {
                pattern: p.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}

/// Fetch the document of `file_key` and select slices from it.
///
/// Patterns are compiled before the document is requested, so a bad pattern
/// never costs a network round-trip.
pub async fn discover_slices<A>(
    api: &A,
    file_key: &str,
    options: &DiscoveryOptions,
    printer: &Printer,
) -> Result<Vec<Slice>>
where
    A: FigmaApi + ?Sized,
{
    let filter = SliceFilter::new(options)?;

    printer.status("Fetching", &format!("document {}", file_key));
    let document = api.document(file_key).await?;
    printer.verbose(
        "Pages",
        &plural(
            document
                .children
                .iter()
                .filter(|p| filter.includes_page(p))
                .count(),
            "page",
            "pages",
        ),
    );

    let slices = select_slices(&document, &filter)?;
    printer.info(
        "Discovered",
        &format!("{} by {}", plural(slices.len(), "slice", "slices"), filter.rule()),
    );

    Ok(slices)
}
