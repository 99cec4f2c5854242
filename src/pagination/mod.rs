//! Pagination module
//!
//! Computes label sequences for scanned image sequences.
//!
//! # Features
//!
//! - Initializer grammar parsing into numeral and text fragments
//! - Decimal (zero-padded), Roman, alphabetic and static-text fragments
//! - Increment inference and reversed (right-to-left) ordering
//! - Half-integer counting for recto/verso and foliation
//! - Initializer building from a seed value ([`PaginatorType`], [`PaginatorMode`])
//!
//! # Example
//!
//! ```rust
//! use book_paginator::{generate_labels, PaginatorMode, PaginatorType};
//!
//! let initializer = PaginatorType::Arabic
//!     .format(PaginatorMode::DoublePages, "1", false, " ")
//!     .unwrap();
//!
//! let labels = generate_labels(&initializer, 3).unwrap();
//! assert_eq!(labels, ["1 2", "3 4", "5 6"]);
//! ```

// Submodules
mod fragment;
mod kind;
mod mode;
mod paginator;
mod types;

// Re-export public API
pub use fragment::{AlphabeticNumeral, DecimalNumeral, Fragment, PageSide, RomanNumeral, StaticText};
pub use kind::PaginatorType;
pub use mode::PaginatorMode;
pub use paginator::{generate_labels, Paginator};
pub use types::{
    HalfInteger, PaginationError, Result, ALPHABETIC_MARKER, EVEN_PAGE_MARKER, HALF,
    ODD_PAGE_MARKER, SUPERSCRIPT_DIGITS, TEXT_ESCAPE,
};
