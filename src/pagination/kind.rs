//! Pagination types
//!
//! A type decides the numeral alphabet. It reads the user's seed value and
//! hands the formatted value pair to a [`PaginatorMode`] to build the
//! initializer.

use super::fragment::{parse_decimal, AlphabeticNumeral, RomanNumeral};
use super::mode::{quote_text, PaginatorMode};
use super::types::{PaginationError, Result, ALPHABETIC_MARKER};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Numeral alphabet of a pagination
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PaginatorType {
    /// Decimal numbers
    #[default]
    Arabic,
    /// Roman numerals
    Roman,
    /// The same text on every image, regardless of mode
    Uncounted,
    /// The same text on every image, shaped by the mode
    FreeText,
    /// Letters: a … z, aa …
    Alphabetic,
    /// The seed is a raw initializer
    Advanced,
}

impl PaginatorType {
    /// All types, in legacy code order
    pub const ALL: [PaginatorType; 6] = [
        PaginatorType::Arabic,
        PaginatorType::Roman,
        PaginatorType::Uncounted,
        PaginatorType::FreeText,
        PaginatorType::Alphabetic,
        PaginatorType::Advanced,
    ];

    /// Legacy integer code
    pub fn code(&self) -> u32 {
        match self {
            PaginatorType::Arabic => 1,
            PaginatorType::Roman => 2,
            PaginatorType::Uncounted => 3,
            PaginatorType::FreeText => 4,
            PaginatorType::Alphabetic => 5,
            PaginatorType::Advanced => 99,
        }
    }

    /// Look up a type by its legacy integer code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaginatorType::Arabic => "arabic",
            PaginatorType::Roman => "roman",
            PaginatorType::Uncounted => "uncounted",
            PaginatorType::FreeText => "free_text",
            PaginatorType::Alphabetic => "alphabetic",
            PaginatorType::Advanced => "advanced",
        }
    }

    /// Build an initializer from a seed value
    pub fn format(
        &self,
        mode: PaginatorMode,
        value: &str,
        fictitious: bool,
        separator: &str,
    ) -> Result<String> {
        match self {
            PaginatorType::Arabic => {
                let number = parse_decimal(value).or_else(|decimal_err| {
                    debug!(value, "Seed is not decimal, trying Roman numerals");
                    RomanNumeral::parse_value(value).map_err(|_| decimal_err)
                })?;
                let next = successor(number)?;
                Ok(mode.format(
                    &number.to_string(),
                    &next.to_string(),
                    fictitious,
                    separator,
                ))
            }
            PaginatorType::Roman => {
                let (number, uppercase) = match RomanNumeral::parse_value(value) {
                    Ok(number) => (number, !value.chars().any(char::is_lowercase)),
                    Err(roman_err) => {
                        debug!(value, "Seed is not a Roman numeral, trying decimal");
                        (parse_decimal(value).map_err(|_| roman_err)?, true)
                    }
                };
                if number < 1 {
                    return Err(PaginationError::NumberFormat(format!(
                        "{} has no Roman numeral",
                        number
                    )));
                }
                let next = successor(number)?;
                Ok(mode.format(
                    &RomanNumeral::to_roman(number, uppercase),
                    &RomanNumeral::to_roman(next, uppercase),
                    fictitious,
                    separator,
                ))
            }
            PaginatorType::Alphabetic => {
                let number = AlphabeticNumeral::parse_value(value)?;
                let next = successor(number)?;
                Ok(mode.format(
                    &format!("{}{}", ALPHABETIC_MARKER, AlphabeticNumeral::to_letters(number)),
                    &format!("{}{}", ALPHABETIC_MARKER, AlphabeticNumeral::to_letters(next)),
                    fictitious,
                    separator,
                ))
            }
            PaginatorType::FreeText => {
                let text = quote_text(value);
                Ok(mode.format(&text, &text, fictitious, separator))
            }
            PaginatorType::Uncounted => {
                let text = quote_text(value);
                Ok(PaginatorMode::Pages.format(&text, &text, fictitious, separator))
            }
            PaginatorType::Advanced => Ok(value.to_string()),
        }
    }
}

impl fmt::Display for PaginatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn successor(number: i64) -> Result<i64> {
    number
        .checked_add(1)
        .ok_or_else(|| PaginationError::NumberFormat(format!("{} has no successor", number)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::generate_labels;

    #[test]
    fn test_arabic() {
        assert_eq!(
            PaginatorType::Arabic
                .format(PaginatorMode::Pages, "4", false, " ")
                .unwrap(),
            "4"
        );
        assert_eq!(
            PaginatorType::Arabic
                .format(PaginatorMode::DoublePages, "7", false, " ")
                .unwrap(),
            "7 8"
        );
    }

    #[test]
    fn test_arabic_falls_back_to_roman() {
        assert_eq!(
            PaginatorType::Arabic
                .format(PaginatorMode::Pages, "XII", false, " ")
                .unwrap(),
            "12"
        );
    }

    #[test]
    fn test_arabic_rejects_garbage() {
        assert!(matches!(
            PaginatorType::Arabic.format(PaginatorMode::Pages, "abc", false, " "),
            Err(PaginationError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_roman() {
        assert_eq!(
            PaginatorType::Roman
                .format(PaginatorMode::Pages, "4", false, " ")
                .unwrap(),
            "IV"
        );
        assert_eq!(
            PaginatorType::Roman
                .format(PaginatorMode::DoublePages, "IV", false, " ")
                .unwrap(),
            "IV V"
        );
        assert_eq!(
            PaginatorType::Roman
                .format(PaginatorMode::Pages, "ix", true, " ")
                .unwrap(),
            "[ix]"
        );
    }

    #[test]
    fn test_worded_separator_keeps_counting() {
        let roman = PaginatorType::Roman
            .format(PaginatorMode::DoublePages, "9", false, " and ")
            .unwrap();
        assert_eq!(
            generate_labels(&roman, 2).unwrap(),
            ["IX and X", "XI and XII"]
        );

        let alphabetic = PaginatorType::Alphabetic
            .format(PaginatorMode::DoublePages, "a", false, " and ")
            .unwrap();
        assert_eq!(
            generate_labels(&alphabetic, 2).unwrap(),
            ["a and b", "c and d"]
        );
    }

    #[test]
    fn test_roman_rejects_garbage() {
        assert!(matches!(
            PaginatorType::Roman.format(PaginatorMode::Pages, "4b", false, " "),
            Err(PaginationError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_roman_needs_positive_seed() {
        assert!(matches!(
            PaginatorType::Roman.format(PaginatorMode::Pages, "0", false, " "),
            Err(PaginationError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_alphabetic() {
        assert_eq!(
            PaginatorType::Alphabetic
                .format(PaginatorMode::DoublePages, "z", false, " ")
                .unwrap(),
            "ªz ªaa"
        );
    }

    #[test]
    fn test_free_text_and_uncounted() {
        assert_eq!(
            PaginatorType::FreeText
                .format(PaginatorMode::DoublePages, "Plate", false, " ")
                .unwrap(),
            "`Plate` `Plate`"
        );
        assert_eq!(
            PaginatorType::Uncounted
                .format(PaginatorMode::DoublePages, "Plate", false, " ")
                .unwrap(),
            "`Plate`"
        );
        assert_eq!(
            PaginatorType::Uncounted
                .format(PaginatorMode::Pages, "-", false, " ")
                .unwrap(),
            "`-`"
        );
    }

    #[test]
    fn test_advanced_passes_through() {
        assert_eq!(
            PaginatorType::Advanced
                .format(PaginatorMode::Rectoverso, "1½¡`r`", true, "/")
                .unwrap(),
            "1½¡`r`"
        );
    }

    #[test]
    fn test_legacy_codes() {
        for kind in PaginatorType::ALL {
            assert_eq!(PaginatorType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PaginatorType::from_code(99), Some(PaginatorType::Advanced));
        assert_eq!(PaginatorType::from_code(42), None);
    }
}
