//! Core types shared by the resolver, discovery and export stages.

mod format;
mod scale;
mod slice;

pub use format::ImageFormat;
pub use scale::{format_scale, ScaleSet};
pub use slice::{parse_slices, validate_slices, Slice, SliceList};
