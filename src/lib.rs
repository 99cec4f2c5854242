//! book-paginator - Page and sheet numbering for scanned image sequences
//!
//! Turns a compact pagination initializer (e.g. `"1"`, `"IV"`, ``"1½¡`r`¿`v`"``)
//! into an endless sequence of labels, one per scanned image.
//!
//! # Features
//!
//! - Decimal, Roman, alphabetic and static-text numeral fragments
//! - Increment inference from the initializer's own numbers
//! - Recto/verso and foliation numbering through half-integer values
//! - Reversed (right-to-left) double-page ordering
//! - Seed-based initializer building ([`PaginatorType`] + [`PaginatorMode`])
//!
//! # Example
//!
//! ```rust
//! use book_paginator::{Paginator, PaginatorMode, PaginatorType};
//!
//! let initializer = PaginatorType::Roman
//!     .format(PaginatorMode::Pages, "4", false, " ")
//!     .unwrap();
//! assert_eq!(initializer, "IV");
//!
//! let labels: Vec<String> = Paginator::new(&initializer).unwrap().take(3).collect();
//! assert_eq!(labels, ["IV", "V", "VI"]);
//! ```

pub mod cli;
pub mod config;
pub mod pagination;
pub mod request;

// Re-export public API
pub use cli::{exit_codes, Cli, Commands, LabelsArgs};
pub use config::{CliOverrides, Config, ConfigError, PaginationDefaults};
pub use pagination::{
    generate_labels, AlphabeticNumeral, DecimalNumeral, Fragment, HalfInteger, PageSide,
    PaginationError, Paginator, PaginatorMode, PaginatorType, Result, RomanNumeral, StaticText,
};
pub use request::{PaginationRequest, PaginationRequestBuilder};
