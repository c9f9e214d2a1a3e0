//! Print-page composition: paper formats, mm→px conversion, grid placement.

use crate::font;
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Fill factor of a grid cell taken by the marker bitmap; the rest is
/// inter-marker spacing and caption room.
const MARKER_FILL: f64 = 0.85;
/// Shade of the cut-guide rectangle at the page edge.
const CUT_GUIDE_SHADE: u8 = 210;
/// Shade of the id captions.
const CAPTION_SHADE: u8 = 60;
/// Cut-guide line thickness in pixels.
const CUT_GUIDE_PX: u32 = 2;

/// Supported physical paper formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaperFormat {
    /// ISO/IEC 7810 ID-1 card, landscape.
    CreditCard,
    A4,
    A5,
}

impl PaperFormat {
    /// Physical size in millimeters, `(width, height)`.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperFormat::CreditCard => (85.60, 53.98),
            PaperFormat::A4 => (210.0, 297.0),
            PaperFormat::A5 => (148.0, 210.0),
        }
    }

    /// Largest marker grid the format accommodates, `(cols, rows)`.
    pub fn max_grid(self) -> (u32, u32) {
        match self {
            PaperFormat::CreditCard => (1, 1),
            PaperFormat::A4 => (3, 3),
            PaperFormat::A5 => (2, 2),
        }
    }

    /// Maximum marker count per page.
    pub fn capacity(self) -> u32 {
        let (cols, rows) = self.max_grid();
        cols * rows
    }

    /// Default `--count` for the format.
    pub fn default_count(self) -> u32 {
        self.capacity()
    }

    /// Lowercase format name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PaperFormat::CreditCard => "creditcard",
            PaperFormat::A4 => "a4",
            PaperFormat::A5 => "a5",
        }
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperFormat {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "creditcard" => Ok(PaperFormat::CreditCard),
            "a4" => Ok(PaperFormat::A4),
            "a5" => Ok(PaperFormat::A5),
            other => Err(LayoutError::UnknownFormat(other.to_owned())),
        }
    }
}

/// Page composition errors.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("unknown print format `{0}` (expected creditcard, a4 or a5)")]
    UnknownFormat(String),
    #[error("{count} markers do not fit a {format} page (at most {capacity})")]
    CapacityExceeded {
        count: u32,
        capacity: u32,
        format: &'static str,
    },
    #[error("marker count must be positive")]
    InvalidCount,
    #[error("dpi must be positive")]
    InvalidDpi,
    #[error("margin must be non-negative and finite")]
    InvalidMargin,
    #[error("margins leave no printable area on the page")]
    MarginTooLarge,
    #[error("layout expects {expected} markers, got {got}")]
    MarkerCountMismatch { expected: usize, got: usize },
}

/// Validated request for one composed page.
#[derive(Clone, Copy, Debug)]
pub struct PageLayoutSpec {
    pub format: PaperFormat,
    pub dpi: u32,
    pub margin_mm: f64,
    pub count: u32,
    /// Draw a numeric-id caption beneath each marker.
    pub labels: bool,
}

impl PageLayoutSpec {
    /// Validate dpi, margin and count against the format.
    pub fn new(
        format: PaperFormat,
        dpi: u32,
        margin_mm: f64,
        count: u32,
    ) -> Result<Self, LayoutError> {
        if dpi == 0 {
            return Err(LayoutError::InvalidDpi);
        }
        if !margin_mm.is_finite() || margin_mm < 0.0 {
            return Err(LayoutError::InvalidMargin);
        }
        if count == 0 {
            return Err(LayoutError::InvalidCount);
        }
        if count > format.capacity() {
            return Err(LayoutError::CapacityExceeded {
                count,
                capacity: format.capacity(),
                format: format.name(),
            });
        }
        Ok(Self {
            format,
            dpi,
            margin_mm,
            count,
            labels: true,
        })
    }

    /// Same spec without id captions.
    pub fn without_labels(mut self) -> Self {
        self.labels = false;
        self
    }

    /// Grid shape used for `count` markers, `(cols, rows)`.
    ///
    /// The smallest near-square grid holding `count`, capped at the
    /// format's maximum shape.
    pub fn grid(&self) -> (u32, u32) {
        let (max_cols, _) = self.format.max_grid();
        let cols = (self.count as f64).sqrt().ceil() as u32;
        let cols = cols.clamp(1, max_cols);
        let rows = self.count.div_ceil(cols);
        (cols, rows)
    }
}

/// Convert a physical length to pixels at the given resolution.
pub fn mm_to_px(mm: f64, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * f64::from(dpi)).round() as u32
}

/// Page canvas size in pixels for a format at the given resolution.
pub fn page_size_px(format: PaperFormat, dpi: u32) -> (u32, u32) {
    let (w_mm, h_mm) = format.dimensions_mm();
    (mm_to_px(w_mm, dpi), mm_to_px(h_mm, dpi))
}

/// Compose already-rendered markers onto one page canvas.
///
/// `markers` holds `(id, bitmap)` pairs in placement order (row-major,
/// top-left first) and must match `spec.count`. Marker bitmaps are
/// uniformly rescaled with nearest-neighbor filtering to the grid cell.
pub fn compose_page(
    spec: &PageLayoutSpec,
    markers: &[(u32, GrayImage)],
) -> Result<GrayImage, LayoutError> {
    if markers.len() != spec.count as usize {
        return Err(LayoutError::MarkerCountMismatch {
            expected: spec.count as usize,
            got: markers.len(),
        });
    }

    let (page_w, page_h) = page_size_px(spec.format, spec.dpi);
    let margin = mm_to_px(spec.margin_mm, spec.dpi);
    if 2 * margin >= page_w || 2 * margin >= page_h {
        return Err(LayoutError::MarginTooLarge);
    }
    let interior_w = page_w - 2 * margin;
    let interior_h = page_h - 2 * margin;

    let (cols, rows) = spec.grid();
    let cell_w = f64::from(interior_w) / f64::from(cols);
    let cell_h = f64::from(interior_h) / f64::from(rows);

    // Caption metrics scale with resolution: ~3 mm tall at any dpi.
    let glyph_scale = 1.max(spec.dpi / 60);
    let caption_gap = 2 * glyph_scale;
    let caption_h = if spec.labels {
        font::number_height(glyph_scale) + caption_gap
    } else {
        0
    };

    let marker_side = (cell_w.min(cell_h - f64::from(caption_h)) * MARKER_FILL).floor();
    if marker_side < 1.0 {
        return Err(LayoutError::MarginTooLarge);
    }
    let marker_side = marker_side as u32;

    log::debug!(
        "composing {} page: {}x{} px, grid {}x{}, marker side {} px",
        spec.format,
        page_w,
        page_h,
        cols,
        rows,
        marker_side
    );

    let mut page = GrayImage::from_pixel(page_w, page_h, Luma([255u8]));

    for (i, (id, bitmap)) in markers.iter().enumerate() {
        let col = i as u32 % cols;
        let row = i as u32 / cols;
        let cell_x = f64::from(margin) + f64::from(col) * cell_w;
        let cell_y = f64::from(margin) + f64::from(row) * cell_h;

        let block_h = marker_side + caption_h;
        let x = (cell_x + (cell_w - f64::from(marker_side)) / 2.0).round() as u32;
        let y = (cell_y + (cell_h - f64::from(block_h)) / 2.0).round() as u32;

        let scaled = if bitmap.width() == marker_side && bitmap.height() == marker_side {
            bitmap.clone()
        } else {
            imageops::resize(bitmap, marker_side, marker_side, FilterType::Nearest)
        };
        imageops::replace(&mut page, &scaled, i64::from(x), i64::from(y));

        if spec.labels {
            let text_w = font::number_width(*id, glyph_scale);
            let text_x = (cell_x + (cell_w - f64::from(text_w)) / 2.0).round() as u32;
            let text_y = y + marker_side + caption_gap;
            font::draw_number(&mut page, *id, text_x, text_y, glyph_scale, CAPTION_SHADE);
        }
    }

    draw_cut_guide(&mut page);
    Ok(page)
}

/// Light rectangle at the page edge, as a cutting aid.
fn draw_cut_guide(page: &mut GrayImage) {
    let (w, h) = page.dimensions();
    let t = CUT_GUIDE_PX.min(w / 2).min(h / 2);
    for i in 0..t {
        for x in 0..w {
            page.put_pixel(x, i, Luma([CUT_GUIDE_SHADE]));
            page.put_pixel(x, h - 1 - i, Luma([CUT_GUIDE_SHADE]));
        }
        for y in 0..h {
            page.put_pixel(i, y, Luma([CUT_GUIDE_SHADE]));
            page.put_pixel(w - 1 - i, y, Luma([CUT_GUIDE_SHADE]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{render_marker, MarkerSpec};

    fn rendered(count: u32) -> Vec<(u32, GrayImage)> {
        (0..count)
            .map(|id| {
                let spec = MarkerSpec::new("DICT_4X4_50", id, 120).expect("spec");
                (id, render_marker(&spec))
            })
            .collect()
    }

    #[test]
    fn page_pixel_sizes_match_dpi_formula() {
        assert_eq!(page_size_px(PaperFormat::A4, 300), (2480, 3508));
        assert_eq!(page_size_px(PaperFormat::A5, 300), (1748, 2480));
        assert_eq!(page_size_px(PaperFormat::CreditCard, 300), (1011, 638));
        assert_eq!(page_size_px(PaperFormat::A4, 150), (1240, 1754));
    }

    #[test]
    fn grid_shape_respects_format_cap() {
        let a4 = |count| {
            PageLayoutSpec::new(PaperFormat::A4, 300, 10.0, count)
                .expect("spec")
                .grid()
        };
        assert_eq!(a4(1), (1, 1));
        assert_eq!(a4(2), (2, 1));
        assert_eq!(a4(4), (2, 2));
        assert_eq!(a4(5), (3, 2));
        assert_eq!(a4(9), (3, 3));

        let cc = PageLayoutSpec::new(PaperFormat::CreditCard, 300, 5.0, 1)
            .expect("spec")
            .grid();
        assert_eq!(cc, (1, 1));
    }

    #[test]
    fn composed_page_has_formula_dimensions() {
        let spec = PageLayoutSpec::new(PaperFormat::A4, 300, 10.0, 9).expect("spec");
        let page = compose_page(&spec, &rendered(9)).expect("page");
        assert_eq!(page.dimensions(), (2480, 3508));

        let spec = PageLayoutSpec::new(PaperFormat::A5, 300, 10.0, 4).expect("spec");
        let page = compose_page(&spec, &rendered(4)).expect("page");
        assert_eq!(page.dimensions(), (1748, 2480));
    }

    #[test]
    fn count_over_capacity_is_rejected() {
        let err = PageLayoutSpec::new(PaperFormat::A4, 300, 10.0, 10).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::CapacityExceeded {
                count: 10,
                capacity: 9,
                ..
            }
        ));

        assert!(PageLayoutSpec::new(PaperFormat::CreditCard, 300, 10.0, 2).is_err());
        assert!(PageLayoutSpec::new(PaperFormat::A5, 300, 10.0, 5).is_err());
    }

    #[test]
    fn invalid_spec_fields_are_rejected() {
        assert!(matches!(
            PageLayoutSpec::new(PaperFormat::A4, 0, 10.0, 1),
            Err(LayoutError::InvalidDpi)
        ));
        assert!(matches!(
            PageLayoutSpec::new(PaperFormat::A4, 300, -1.0, 1),
            Err(LayoutError::InvalidMargin)
        ));
        assert!(matches!(
            PageLayoutSpec::new(PaperFormat::A4, 300, 10.0, 0),
            Err(LayoutError::InvalidCount)
        ));
    }

    #[test]
    fn oversized_margin_is_rejected() {
        let spec = PageLayoutSpec::new(PaperFormat::CreditCard, 300, 30.0, 1).expect("spec");
        assert!(matches!(
            compose_page(&spec, &rendered(1)),
            Err(LayoutError::MarginTooLarge)
        ));
    }

    #[test]
    fn marker_count_mismatch_is_rejected() {
        let spec = PageLayoutSpec::new(PaperFormat::A4, 300, 10.0, 9).expect("spec");
        assert!(matches!(
            compose_page(&spec, &rendered(4)),
            Err(LayoutError::MarkerCountMismatch {
                expected: 9,
                got: 4
            })
        ));
    }

    #[test]
    fn cut_guide_is_drawn_at_page_edge() {
        let spec = PageLayoutSpec::new(PaperFormat::A5, 150, 10.0, 4).expect("spec");
        let page = compose_page(&spec, &rendered(4)).expect("page");
        let (w, h) = page.dimensions();
        assert_eq!(page.get_pixel(0, 0)[0], CUT_GUIDE_SHADE);
        assert_eq!(page.get_pixel(w - 1, h - 1)[0], CUT_GUIDE_SHADE);
        assert_eq!(page.get_pixel(w / 2, 0)[0], CUT_GUIDE_SHADE);
    }

    #[test]
    fn markers_land_inside_the_margins() {
        let spec = PageLayoutSpec::new(PaperFormat::A4, 300, 10.0, 9).expect("spec");
        let page = compose_page(&spec, &rendered(9)).expect("page");
        let margin = mm_to_px(10.0, 300);
        // Everything strictly inside the margin band stays white except the
        // cut guide at the very edge.
        for x in CUT_GUIDE_PX..page.width() - CUT_GUIDE_PX {
            for y in CUT_GUIDE_PX..margin / 2 {
                assert_eq!(page.get_pixel(x, y)[0], 255);
            }
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let spec = PageLayoutSpec::new(PaperFormat::A5, 300, 10.0, 4).expect("spec");
        let a = compose_page(&spec, &rendered(4)).expect("page");
        let b = compose_page(&spec, &rendered(4)).expect("page");
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn format_names_round_trip() {
        for format in [PaperFormat::CreditCard, PaperFormat::A4, PaperFormat::A5] {
            assert_eq!(format.name().parse::<PaperFormat>().unwrap(), format);
        }
        assert!(matches!(
            "letter".parse::<PaperFormat>(),
            Err(LayoutError::UnknownFormat(_))
        ));
    }
}
