//! Single-marker rasterisation.

use aruco_gen_dict::{builtins, Dictionary};
use image::{GrayImage, Luma};

/// Width of the black border ring around the inner bits, in modules.
pub const BORDER_BITS: usize = 1;

const BLACK: Luma<u8> = Luma([0u8]);
const WHITE: Luma<u8> = Luma([255u8]);

/// Marker rendering errors.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("unknown dictionary `{name}` (choose from: {choices})")]
    UnknownDictionary { name: String, choices: String },
    #[error("marker id {id} is out of range for {dictionary} (valid range: 0-{max_id})")]
    IdOutOfRange {
        id: u32,
        dictionary: &'static str,
        max_id: u32,
    },
    #[error("size {size} px is too small for {dictionary} (needs at least {min} px)")]
    SizeTooSmall {
        size: u32,
        dictionary: &'static str,
        min: u32,
    },
}

/// Validated request for one marker bitmap.
#[derive(Clone, Copy, Debug)]
pub struct MarkerSpec {
    pub dictionary: Dictionary,
    pub id: u32,
    pub size_px: u32,
}

impl MarkerSpec {
    /// Resolve the dictionary by name and validate `id` and `size_px`.
    pub fn new(dictionary_name: &str, id: u32, size_px: u32) -> Result<Self, RenderError> {
        let dictionary = builtins::builtin_dictionary(dictionary_name).ok_or_else(|| {
            RenderError::UnknownDictionary {
                name: dictionary_name.to_owned(),
                choices: builtins::names().collect::<Vec<_>>().join(", "),
            }
        })?;

        if id as usize >= dictionary.capacity() {
            return Err(RenderError::IdOutOfRange {
                id,
                dictionary: dictionary.name,
                max_id: dictionary.capacity() as u32 - 1,
            });
        }

        // At least one pixel per module, border ring included.
        let min = (dictionary.marker_size + 2 * BORDER_BITS) as u32;
        if size_px < min {
            return Err(RenderError::SizeTooSmall {
                size: size_px,
                dictionary: dictionary.name,
                min,
            });
        }

        Ok(Self {
            dictionary,
            id,
            size_px,
        })
    }

    /// Marker side length in modules, border ring included.
    #[inline]
    pub fn modules(&self) -> usize {
        self.dictionary.marker_size + 2 * BORDER_BITS
    }
}

/// Rasterise a marker: black modules on white, nearest-neighbor scaled to
/// `size_px × size_px` so module edges stay crisp.
pub fn render_marker(spec: &MarkerSpec) -> GrayImage {
    let n = spec.dictionary.marker_size;
    let cells = spec.modules();
    let size = spec.size_px as usize;
    // Validated by `MarkerSpec::new`; inner ids never miss.
    let code = spec.dictionary.code(spec.id).unwrap_or(0);

    let mut img = GrayImage::from_pixel(spec.size_px, spec.size_px, WHITE);
    for py in 0..size {
        let cy = py * cells / size;
        for px in 0..size {
            let cx = px * cells / size;
            let on_border = cx < BORDER_BITS
                || cy < BORDER_BITS
                || cx >= cells - BORDER_BITS
                || cy >= cells - BORDER_BITS;
            let black = if on_border {
                true
            } else {
                let bx = cx - BORDER_BITS;
                let by = cy - BORDER_BITS;
                (code >> (by * n + bx)) & 1 == 1
            };
            if black {
                img.put_pixel(px as u32, py as u32, BLACK);
            }
        }
    }

    log::debug!(
        "rendered {} id {} at {} px",
        spec.dictionary.name,
        spec.id,
        spec.size_px
    );
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exact_requested_size() {
        for size in [6, 37, 200, 451] {
            let spec = MarkerSpec::new("DICT_4X4_50", 3, size).expect("spec");
            let img = render_marker(&spec);
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
        }
    }

    #[test]
    fn border_ring_is_black() {
        let spec = MarkerSpec::new("DICT_5X5_100", 42, 210).expect("spec");
        let img = render_marker(&spec);
        let last = img.width() - 1;
        for i in 0..img.width() {
            assert_eq!(img.get_pixel(i, 0)[0], 0);
            assert_eq!(img.get_pixel(i, last)[0], 0);
            assert_eq!(img.get_pixel(0, i)[0], 0);
            assert_eq!(img.get_pixel(last, i)[0], 0);
        }
    }

    #[test]
    fn inner_bits_match_dictionary() {
        let spec = MarkerSpec::new("DICT_4X4_50", 7, 60).expect("spec");
        let img = render_marker(&spec);
        // 6x6 modules at 60 px => 10 px per module; sample module centers.
        for by in 0..4u32 {
            for bx in 0..4u32 {
                let expected = spec
                    .dictionary
                    .module(7, bx as usize, by as usize)
                    .expect("module");
                let px = (bx + 1) * 10 + 5;
                let py = (by + 1) * 10 + 5;
                let black = img.get_pixel(px, py)[0] == 0;
                assert_eq!(black, expected, "module ({bx},{by})");
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let spec = MarkerSpec::new("DICT_6X6_250", 99, 123).expect("spec");
        let a = render_marker(&spec);
        let b = render_marker(&spec);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn rejects_out_of_range_id() {
        let err = MarkerSpec::new("DICT_4X4_50", 50, 200).unwrap_err();
        assert!(matches!(
            err,
            RenderError::IdOutOfRange { id: 50, max_id: 49, .. }
        ));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn rejects_unknown_dictionary() {
        let err = MarkerSpec::new("DICT_3X3_50", 0, 200).unwrap_err();
        assert!(matches!(err, RenderError::UnknownDictionary { .. }));
        assert!(err.to_string().contains("DICT_4X4_50"));
    }

    #[test]
    fn rejects_degenerate_size() {
        let err = MarkerSpec::new("DICT_7X7_50", 0, 8).unwrap_err();
        assert!(matches!(err, RenderError::SizeTooSmall { min: 9, .. }));
    }
}
