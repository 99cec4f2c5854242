//! Pagination modes
//!
//! A mode decides the shape of each label: one page, two columns, a double
//! page spread, a leaf, or recto/verso sides. It turns a formatted value
//! (and the value after it) into an initializer fragment sequence.

use super::paginator::CharClass;
use super::types::{EVEN_PAGE_MARKER, HALF, ODD_PAGE_MARKER, TEXT_ESCAPE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recto side suffix
const RECTO: &str = "r";

/// Verso side suffix
const VERSO: &str = "v";

/// Superscript two, counting two columns per image
const TWO_COLUMNS: char = '²';

/// Label shape of a pagination
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PaginatorMode {
    /// One page per image: `1`, `2`, `3`
    #[default]
    Pages,
    /// Two columns per image: `1`, `3`, `5`
    Columns,
    /// One number per leaf, on both sides: `1`, `1`, `2`
    Foliation,
    /// Leaf numbers with side: `1r`, `1v`, `2r`
    RectoversoFoliation,
    /// Spread of a verso and the next recto: `1v 2r`, `2v 3r`
    Rectoverso,
    /// Two pages per image: `1 2`, `3 4`
    DoublePages,
}

impl PaginatorMode {
    /// All modes, in legacy code order
    pub const ALL: [PaginatorMode; 6] = [
        PaginatorMode::Pages,
        PaginatorMode::Columns,
        PaginatorMode::Foliation,
        PaginatorMode::RectoversoFoliation,
        PaginatorMode::Rectoverso,
        PaginatorMode::DoublePages,
    ];

    /// Legacy integer code
    pub fn code(&self) -> u32 {
        match self {
            PaginatorMode::Pages => 1,
            PaginatorMode::Columns => 2,
            PaginatorMode::Foliation => 3,
            PaginatorMode::RectoversoFoliation => 4,
            PaginatorMode::Rectoverso => 5,
            PaginatorMode::DoublePages => 6,
        }
    }

    /// Look up a mode by its legacy integer code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaginatorMode::Pages => "pages",
            PaginatorMode::Columns => "columns",
            PaginatorMode::Foliation => "foliation",
            PaginatorMode::RectoversoFoliation => "rectoverso_foliation",
            PaginatorMode::Rectoverso => "rectoverso",
            PaginatorMode::DoublePages => "double_pages",
        }
    }

    /// Build the initializer for `value`, `next` being the value after it.
    ///
    /// A fictitious value is bracketed. The separator sits between the two
    /// pages of a spread.
    pub fn format(&self, value: &str, next: &str, fictitious: bool, separator: &str) -> String {
        let bracket = |text: String| {
            if fictitious {
                format!("[{}]", text)
            } else {
                text
            }
        };
        let separator = escape_text(separator);

        match self {
            PaginatorMode::Pages => bracket(value.to_string()),
            PaginatorMode::Columns => bracket(format!("{}{}", value, TWO_COLUMNS)),
            PaginatorMode::Foliation => bracket(format!("{}{}", value, HALF)),
            PaginatorMode::RectoversoFoliation => format!(
                "{}{}{}{}{}",
                bracket(format!("{}{}", value, HALF)),
                ODD_PAGE_MARKER,
                escape_text(RECTO),
                EVEN_PAGE_MARKER,
                escape_text(VERSO)
            ),
            PaginatorMode::Rectoverso => format!(
                "{}{}{}{}{}{}{}{}",
                HALF,
                bracket(format!("{}{}", value, HALF)),
                EVEN_PAGE_MARKER,
                escape_text(VERSO),
                separator,
                bracket(format!("{}{}", next, HALF)),
                ODD_PAGE_MARKER,
                escape_text(RECTO)
            ),
            PaginatorMode::DoublePages => format!(
                "{}{}{}",
                bracket(value.to_string()),
                separator,
                bracket(next.to_string())
            ),
        }
    }
}

impl fmt::Display for PaginatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Quote text so the parser keeps it verbatim
///
/// Plain symbol runs (spaces, punctuation) need no quoting. Backticks
/// cannot be represented inside quoted text and are dropped.
pub(crate) fn escape_text(text: &str) -> String {
    if text.chars().all(|c| CharClass::of(c) == CharClass::Symbol) {
        text.to_string()
    } else {
        quote_text(text)
    }
}

/// Quote text unconditionally
pub(crate) fn quote_text(text: &str) -> String {
    let inner: String = text.chars().filter(|&c| c != TEXT_ESCAPE).collect();
    format!("{}{}{}", TEXT_ESCAPE, inner, TEXT_ESCAPE)
}
