//! Embedded ArUco marker dictionaries.
//!
//! This crate holds the dictionary metadata and the built-in code tables
//! used by the rendering tools:
//! - [`Dictionary`] describes one fixed dictionary (grid size, capacity,
//!   packed marker codes),
//! - [`builtins`] exposes the 16 `DICT_<N>X<N>_<count>` dictionaries by name.
//!
//! It does **not** detect or decode markers; it only answers "what are the
//! inner bits of marker `id` in dictionary `name`".

pub mod builtins;
mod codes;

/// A fixed ArUco-style dictionary.
#[derive(Clone, Copy, Debug)]
pub struct Dictionary {
    /// Canonical dictionary name, e.g. `DICT_4X4_50`.
    pub name: &'static str,
    /// Marker side length (number of inner bits per side).
    pub marker_size: usize,
    /// Maximum error-correcting Hamming distance supported by the dictionary.
    pub max_correction_bits: u8,
    /// One `u64` per marker id, encoding the inner `marker_size × marker_size`
    /// bits in row-major order, with **black = 1**.
    pub codes: &'static [u64],
}

impl Dictionary {
    /// Total number of inner bits per marker.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.marker_size * self.marker_size
    }

    /// Number of marker ids in the dictionary.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.codes.len()
    }

    /// Packed code for marker `id`, or `None` if `id` is out of range.
    #[inline]
    pub fn code(&self, id: u32) -> Option<u64> {
        self.codes.get(id as usize).copied()
    }

    /// Inner bit at `(x, y)` of marker `id`; `true` means black.
    ///
    /// Returns `None` if `id` or the coordinates are out of range.
    pub fn module(&self, id: u32, x: usize, y: usize) -> Option<bool> {
        if x >= self.marker_size || y >= self.marker_size {
            return None;
        }
        let code = self.code(id)?;
        Some((code >> (y * self.marker_size + x)) & 1 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_matches_packed_code() {
        let dict = builtins::builtin_dictionary("DICT_4X4_50").expect("builtin dict");
        let code = dict.code(7).expect("code");
        for y in 0..4 {
            for x in 0..4 {
                let expected = (code >> (y * 4 + x)) & 1 == 1;
                assert_eq!(dict.module(7, x, y), Some(expected));
            }
        }
    }

    #[test]
    fn module_rejects_out_of_range() {
        let dict = builtins::builtin_dictionary("DICT_4X4_50").expect("builtin dict");
        assert_eq!(dict.module(50, 0, 0), None);
        assert_eq!(dict.module(0, 4, 0), None);
        assert_eq!(dict.module(0, 0, 4), None);
    }
}
