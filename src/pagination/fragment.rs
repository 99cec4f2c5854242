//! Pagination fragments
//!
//! A label is assembled from fragments. Counting fragments (decimal, Roman,
//! alphabetic) render the shared counter in their own alphabet; static text
//! contributes fixed text, optionally on one side of the leaf only.

use super::types::{HalfInteger, PaginationError, Result};

/// Roman hundreds, tens and ones, indexed by digit
const ROMAN_HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const ROMAN_TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const ROMAN_ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Letters of the alphabetic numeral system
const ALPHABET_SIZE: i64 = 26;

// ============================================================
// Fragment
// ============================================================

/// One piece of a pagination label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Decimal(DecimalNumeral),
    Roman(RomanNumeral),
    Alphabetic(AlphabeticNumeral),
    StaticText(StaticText),
}

impl Fragment {
    /// Value the literal stood for, `None` for static text
    pub fn initial_value(&self) -> Option<i64> {
        match self {
            Fragment::Decimal(numeral) => Some(numeral.initial_value),
            Fragment::Roman(numeral) => Some(numeral.initial_value),
            Fragment::Alphabetic(numeral) => Some(numeral.initial_value),
            Fragment::StaticText(_) => None,
        }
    }

    /// Step this fragment adds to the shared counter, if any
    pub fn increment(&self) -> Option<HalfInteger> {
        match self {
            Fragment::Decimal(numeral) => numeral.increment,
            Fragment::Roman(numeral) => numeral.increment,
            Fragment::Alphabetic(numeral) => numeral.increment,
            Fragment::StaticText(text) => text.increment,
        }
    }

    pub fn set_increment(&mut self, increment: HalfInteger) {
        let slot = match self {
            Fragment::Decimal(numeral) => &mut numeral.increment,
            Fragment::Roman(numeral) => &mut numeral.increment,
            Fragment::Alphabetic(numeral) => &mut numeral.increment,
            Fragment::StaticText(text) => &mut text.increment,
        };
        *slot = Some(increment);
    }

    /// Whether this fragment counts (has an initial value)
    pub fn is_counting(&self) -> bool {
        self.initial_value().is_some()
    }

    /// Render the counter value
    pub fn format(&self, value: HalfInteger) -> String {
        match self {
            Fragment::Decimal(numeral) => numeral.format(value),
            Fragment::Roman(numeral) => numeral.format(value),
            Fragment::Alphabetic(numeral) => numeral.format(value),
            Fragment::StaticText(text) => text.format(value),
        }
    }
}

// ============================================================
// Decimal
// ============================================================

/// Decimal numeral, zero-padded to the width of its literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalNumeral {
    initial_value: i64,
    digit_width: usize,
    increment: Option<HalfInteger>,
}

impl DecimalNumeral {
    /// Parse a decimal literal such as `"007"`
    pub fn parse(literal: &str) -> Result<Self> {
        let initial_value = parse_decimal(literal)?;
        Ok(Self {
            initial_value,
            digit_width: literal.chars().count(),
            increment: None,
        })
    }

    /// Minimum number of digits emitted
    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    pub fn format(&self, value: HalfInteger) -> String {
        format!("{:0width$}", value.int_value(), width = self.digit_width)
    }
}

/// Parse a decimal number, surrounding whitespace ignored
pub fn parse_decimal(literal: &str) -> Result<i64> {
    literal
        .trim()
        .parse::<i64>()
        .map_err(|e| PaginationError::NumberFormat(format!("\"{}\" is not a decimal number: {}", literal, e)))
}

// ============================================================
// Roman
// ============================================================

/// Roman numeral in upper or lower case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanNumeral {
    initial_value: i64,
    uppercase: bool,
    increment: Option<HalfInteger>,
}

impl RomanNumeral {
    /// Parse a Roman literal; the literal's case is kept for output
    pub fn parse(literal: &str) -> Result<Self> {
        let initial_value = Self::parse_value(literal)?;
        Ok(Self {
            initial_value,
            uppercase: !literal.chars().any(char::is_lowercase),
            increment: None,
        })
    }

    pub fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    /// Value of a Roman literal, case-insensitive
    ///
    /// Walks right to left: a letter smaller than the largest letter seen
    /// so far is a subtractive prefix.
    pub fn parse_value(literal: &str) -> Result<i64> {
        let literal = literal.trim();
        if literal.is_empty() {
            return Err(PaginationError::NumberFormat(
                "empty Roman numeral".to_string(),
            ));
        }

        let mut total: i64 = 0;
        let mut highest: i64 = 0;
        for c in literal.chars().rev() {
            let digit = roman_digit(c).ok_or_else(|| {
                PaginationError::NumberFormat(format!(
                    "\"{}\" is not a Roman numeral: unexpected '{}'",
                    literal, c
                ))
            })?;
            if digit < highest {
                total -= digit;
            } else {
                total += digit;
                highest = digit;
            }
        }
        Ok(total)
    }

    /// Render an integer as a Roman numeral; non-positive values are empty
    pub fn to_roman(number: i64, uppercase: bool) -> String {
        if number <= 0 {
            return String::new();
        }
        let mut roman = "M".repeat((number / 1000) as usize);
        roman.push_str(ROMAN_HUNDREDS[(number / 100 % 10) as usize]);
        roman.push_str(ROMAN_TENS[(number / 10 % 10) as usize]);
        roman.push_str(ROMAN_ONES[(number % 10) as usize]);
        if uppercase {
            roman
        } else {
            roman.to_ascii_lowercase()
        }
    }

    pub fn format(&self, value: HalfInteger) -> String {
        Self::to_roman(value.int_value(), self.uppercase)
    }
}

/// Value of a single Roman letter
fn roman_digit(c: char) -> Option<i64> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Whether a character is one of the Roman letters
pub(crate) fn is_roman_letter(c: char) -> bool {
    c.is_ascii() && roman_digit(c).is_some()
}

// ============================================================
// Alphabetic
// ============================================================

/// Bijective base-26 numeral: a=1 … z=26, aa=27 …
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabeticNumeral {
    initial_value: i64,
    increment: Option<HalfInteger>,
}

impl AlphabeticNumeral {
    pub fn parse(literal: &str) -> Result<Self> {
        Ok(Self {
            initial_value: Self::parse_value(literal)?,
            increment: None,
        })
    }

    /// Value of an alphabetic literal, case-insensitive
    pub fn parse_value(literal: &str) -> Result<i64> {
        let literal = literal.trim();
        if literal.is_empty() {
            return Err(PaginationError::NumberFormat(
                "empty alphabetic numeral".to_string(),
            ));
        }

        let mut total: i64 = 0;
        for c in literal.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(PaginationError::NumberFormat(format!(
                    "\"{}\" is not an alphabetic numeral: unexpected '{}'",
                    literal, c
                )));
            }
            let digit = i64::from(c.to_ascii_lowercase() as u8 - b'a') + 1;
            total = total
                .checked_mul(ALPHABET_SIZE)
                .and_then(|t| t.checked_add(digit))
                .ok_or_else(|| {
                    PaginationError::NumberFormat(format!(
                        "alphabetic numeral \"{}\" is too large",
                        literal
                    ))
                })?;
        }
        Ok(total)
    }

    /// Render an integer in lowercase letters; non-positive values are empty
    pub fn to_letters(number: i64) -> String {
        let mut letters = Vec::new();
        let mut n = number;
        while n > 0 {
            n -= 1;
            letters.push((b'a' + (n % ALPHABET_SIZE) as u8) as char);
            n /= ALPHABET_SIZE;
        }
        letters.iter().rev().collect()
    }

    pub fn format(&self, value: HalfInteger) -> String {
        Self::to_letters(value.int_value())
    }
}

// ============================================================
// Static Text
// ============================================================

/// Leaf side a static text is shown on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSide {
    /// Front side; the counter carries one half
    Odd,
    /// Back side; the counter is a whole number
    Even,
    /// Both sides
    #[default]
    Any,
}

impl PageSide {
    /// Whether text tagged with this side shows at the given value
    pub fn matches(&self, value: HalfInteger) -> bool {
        match self {
            PageSide::Odd => value.is_half(),
            PageSide::Even => !value.is_half(),
            PageSide::Any => true,
        }
    }
}

/// Fixed text, optionally limited to one leaf side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticText {
    text: String,
    side: PageSide,
    increment: Option<HalfInteger>,
}

impl StaticText {
    pub fn new(text: impl Into<String>, side: PageSide) -> Self {
        Self {
            text: text.into(),
            side,
            increment: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn side(&self) -> PageSide {
        self.side
    }

    pub fn format(&self, value: HalfInteger) -> String {
        if self.side.matches(value) {
            self.text.clone()
        } else {
            String::new()
        }
    }
}
