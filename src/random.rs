//! Random form-fill data
//!
//! Bounded-length strings for scenario inputs whose exact value is
//! irrelevant (names, postal codes).

use rand::Rng;
use tracing::warn;

const UPPERCASE: (u8, u8) = (b'A', b'Z');
const LOWERCASE: (u8, u8) = (b'a', b'z');
const DIGITS: (u8, u8) = (b'0', b'9');
const SYMBOLS: (u8, u8) = (b'!', b'/');

/// Which ASCII character classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub const fn lowercase() -> Self {
        Self {
            uppercase: false,
            lowercase: true,
            numbers: false,
            symbols: false,
        }
    }

    pub const fn numeric() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: true,
            symbols: false,
        }
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::lowercase()
    }
}

/// Generate a string of exactly `length` characters drawn from the union of
/// the selected classes. Selecting no class falls back to lowercase and
/// emits a diagnostic.
///
/// Known bias, preserved deliberately: each position independently picks a
/// *class* uniformly and then a character within it, so with several classes
/// selected the result is not guaranteed to contain a character from every
/// class, and small classes are over-represented relative to their size.
/// Every call site in this suite selects a single class, where the bias is
/// unobservable.
pub fn random_string(length: usize, classes: CharClasses) -> String {
    let mut ranges: Vec<(u8, u8)> = Vec::with_capacity(4);
    if classes.uppercase {
        ranges.push(UPPERCASE);
    }
    if classes.lowercase {
        ranges.push(LOWERCASE);
    }
    if classes.numbers {
        ranges.push(DIGITS);
    }
    if classes.symbols {
        ranges.push(SYMBOLS);
    }
    if ranges.is_empty() {
        warn!("no character classes selected, defaulting to lowercase");
        ranges.push(LOWERCASE);
    }

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let (lo, hi) = ranges[rng.gen_range(0..ranges.len())];
            rng.gen_range(lo..=hi) as char
        })
        .collect()
}
