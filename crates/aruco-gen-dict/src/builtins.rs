//! Built-in dictionaries, compiled into the binary.
//!
//! The source-of-truth for the code tables lives in `src/codes.rs`,
//! emitted by `tools/gen_codes.py`. The `_50`/`_100`/`_250` variants of a
//! grid size are prefixes of the `_1000` table, so the smaller dictionaries
//! enjoy a larger minimum inter-marker distance.

use crate::codes;
use crate::Dictionary;

struct Builtin {
    name: &'static str,
    marker_size: usize,
    max_correction_bits: u8,
    table: &'static [u64; 1000],
    capacity: usize,
}

#[rustfmt::skip]
static BUILTINS: [Builtin; 16] = [
    Builtin { name: "DICT_4X4_50",   marker_size: 4, max_correction_bits: 1, table: &codes::CODES_4X4_1000, capacity: 50 },
    Builtin { name: "DICT_4X4_100",  marker_size: 4, max_correction_bits: 1, table: &codes::CODES_4X4_1000, capacity: 100 },
    Builtin { name: "DICT_4X4_250",  marker_size: 4, max_correction_bits: 1, table: &codes::CODES_4X4_1000, capacity: 250 },
    Builtin { name: "DICT_4X4_1000", marker_size: 4, max_correction_bits: 0, table: &codes::CODES_4X4_1000, capacity: 1000 },
    Builtin { name: "DICT_5X5_50",   marker_size: 5, max_correction_bits: 2, table: &codes::CODES_5X5_1000, capacity: 50 },
    Builtin { name: "DICT_5X5_100",  marker_size: 5, max_correction_bits: 2, table: &codes::CODES_5X5_1000, capacity: 100 },
    Builtin { name: "DICT_5X5_250",  marker_size: 5, max_correction_bits: 2, table: &codes::CODES_5X5_1000, capacity: 250 },
    Builtin { name: "DICT_5X5_1000", marker_size: 5, max_correction_bits: 2, table: &codes::CODES_5X5_1000, capacity: 1000 },
    Builtin { name: "DICT_6X6_50",   marker_size: 6, max_correction_bits: 4, table: &codes::CODES_6X6_1000, capacity: 50 },
    Builtin { name: "DICT_6X6_100",  marker_size: 6, max_correction_bits: 4, table: &codes::CODES_6X6_1000, capacity: 100 },
    Builtin { name: "DICT_6X6_250",  marker_size: 6, max_correction_bits: 4, table: &codes::CODES_6X6_1000, capacity: 250 },
    Builtin { name: "DICT_6X6_1000", marker_size: 6, max_correction_bits: 4, table: &codes::CODES_6X6_1000, capacity: 1000 },
    Builtin { name: "DICT_7X7_50",   marker_size: 7, max_correction_bits: 6, table: &codes::CODES_7X7_1000, capacity: 50 },
    Builtin { name: "DICT_7X7_100",  marker_size: 7, max_correction_bits: 6, table: &codes::CODES_7X7_1000, capacity: 100 },
    Builtin { name: "DICT_7X7_250",  marker_size: 7, max_correction_bits: 6, table: &codes::CODES_7X7_1000, capacity: 250 },
    Builtin { name: "DICT_7X7_1000", marker_size: 7, max_correction_bits: 6, table: &codes::CODES_7X7_1000, capacity: 1000 },
];

/// Look up a built-in dictionary by its canonical name.
pub fn builtin_dictionary(name: &str) -> Option<Dictionary> {
    BUILTINS.iter().find(|b| b.name == name).map(|b| Dictionary {
        name: b.name,
        marker_size: b.marker_size,
        max_correction_bits: b.max_correction_bits,
        codes: &b.table[..b.capacity],
    })
}

/// Names of all built-in dictionaries, in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_names_resolve() {
        for name in names() {
            let dict = builtin_dictionary(name).expect("builtin dict");
            assert_eq!(dict.name, name);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(builtin_dictionary("DICT_9X9_50").is_none());
        assert!(builtin_dictionary("").is_none());
    }

    #[test]
    fn capacities_match_names() {
        for name in names() {
            let dict = builtin_dictionary(name).expect("builtin dict");
            let count: usize = name
                .rsplit('_')
                .next()
                .and_then(|s| s.parse().ok())
                .expect("trailing count");
            assert_eq!(dict.capacity(), count);
        }
    }

    #[test]
    fn small_variants_are_prefixes_of_1000() {
        let small = builtin_dictionary("DICT_6X6_50").expect("builtin dict");
        let full = builtin_dictionary("DICT_6X6_1000").expect("builtin dict");
        assert_eq!(small.codes, &full.codes[..50]);
    }

    #[test]
    fn codes_fit_their_grid() {
        for name in names() {
            let dict = builtin_dictionary(name).expect("builtin dict");
            let mask = if dict.bit_count() == 64 {
                u64::MAX
            } else {
                (1u64 << dict.bit_count()) - 1
            };
            for &code in dict.codes {
                assert_eq!(code & !mask, 0, "{name}: code wider than grid");
            }
        }
    }
}
