//! Pagination module core types
//!
//! Contains the error type, the half-integer counter value and the glyphs
//! of the initializer grammar.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use thiserror::Error;

// ============================================================
// Constants
// ============================================================

/// Toggles verbatim text mode inside an initializer
pub const TEXT_ESCAPE: char = '`';

/// Leading: start on the back side. Elsewhere: increment by one half
pub const HALF: char = '½';

/// Tags the next fragment as shown on odd (recto) sides only
pub const ODD_PAGE_MARKER: char = '¡';

/// Tags the next fragment as shown on even (verso) sides only
pub const EVEN_PAGE_MARKER: char = '¿';

/// Tags the next letter run as an alphabetic numeral
pub const ALPHABETIC_MARKER: char = 'ª';

/// Superscript digits, indexed by their value
pub const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

// ============================================================
// Error Types
// ============================================================

/// Pagination error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Invalid initializer: {0}")]
    InvalidInitializer(String),

    #[error("Number format failure: {0}")]
    NumberFormat(String),
}

pub type Result<T> = std::result::Result<T, PaginationError>;

// ============================================================
// Half Integer
// ============================================================

/// An integer that may carry an additional one half
///
/// The half marks the back side of a leaf. Values are immutable; every
/// addition yields a new instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HalfInteger {
    value: i64,
    half: bool,
}

impl HalfInteger {
    /// Zero, without half
    pub const ZERO: HalfInteger = HalfInteger::new(0, false);

    /// One half
    pub const ONE_HALF: HalfInteger = HalfInteger::new(0, true);

    /// Create a new value
    pub const fn new(value: i64, half: bool) -> Self {
        Self { value, half }
    }

    /// Integer part, the half truncated
    pub fn int_value(&self) -> i64 {
        self.value
    }

    /// Whether the value carries one half
    pub fn is_half(&self) -> bool {
        self.half
    }

    /// Add another value; two halves carry into the integer part
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(self, other: HalfInteger) -> HalfInteger {
        if self.half && other.half {
            HalfInteger::new(self.value + other.value + 1, false)
        } else {
            HalfInteger::new(self.value + other.value, self.half || other.half)
        }
    }

    /// Divide a whole-number distance into `parts` steps, keeping one half
    /// when the division does not come out even in whole numbers.
    ///
    /// Returns `None` when the doubled distance overflows or `parts` is zero.
    pub(crate) fn split(distance: i64, parts: i64) -> Option<HalfInteger> {
        let doubled = distance.checked_mul(2)?.checked_div(parts)?;
        Some(HalfInteger::new(doubled.div_euclid(2), doubled.rem_euclid(2) == 1))
    }
}

impl From<i64> for HalfInteger {
    fn from(value: i64) -> Self {
        HalfInteger::new(value, false)
    }
}

impl Add for HalfInteger {
    type Output = HalfInteger;

    fn add(self, other: HalfInteger) -> HalfInteger {
        HalfInteger::add(self, other)
    }
}

impl PartialOrd for HalfInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HalfInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.half.cmp(&other.half))
    }
}

impl fmt::Display for HalfInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.half {
            write!(f, "{}{}", self.value, HALF)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
