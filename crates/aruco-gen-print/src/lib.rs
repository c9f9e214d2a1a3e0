//! Marker rasterisation and print-page composition.
//!
//! Two pure transforms, each consuming an immutable, validated spec:
//! - [`MarkerSpec`] / [`render_marker`]: one dictionary marker to a square
//!   black-on-white bitmap of an exact pixel size,
//! - [`PageLayoutSpec`] / [`compose_page`]: a set of rendered markers to a
//!   print-ready page canvas (credit-card / A4 / A5) at a given DPI.
//!
//! File I/O stays with the caller; both transforms return in-memory
//! [`image::GrayImage`] buffers.

mod font;
mod marker;
mod page;

pub use marker::{render_marker, MarkerSpec, RenderError, BORDER_BITS};
pub use page::{
    compose_page, mm_to_px, page_size_px, LayoutError, PageLayoutSpec, PaperFormat,
};
