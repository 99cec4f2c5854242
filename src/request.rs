//! Pagination requests
//!
//! The call shape of a caller that knows the user's four choices (type,
//! mode, seed value, fictitious) plus how many images need labels.

use crate::pagination::{generate_labels, PaginatorMode, PaginatorType, Result};
use serde::{Deserialize, Serialize};

/// Default separator between the two pages of a spread
pub const DEFAULT_SEPARATOR: &str = " ";

/// A request for `count` labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Numeral alphabet
    #[serde(default)]
    pub kind: PaginatorType,
    /// Label shape
    #[serde(default)]
    pub mode: PaginatorMode,
    /// Seed value (or raw initializer for [`PaginatorType::Advanced`])
    pub value: String,
    /// Bracket labels of non-physical pages
    #[serde(default)]
    pub fictitious: bool,
    /// Separator between the pages of a spread
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Number of labels
    pub count: usize,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl PaginationRequest {
    /// Create a request for `count` labels starting at `value`
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            kind: PaginatorType::default(),
            mode: PaginatorMode::default(),
            value: value.into(),
            fictitious: false,
            separator: default_separator(),
            count,
        }
    }

    /// Create a new request builder
    pub fn builder(value: impl Into<String>) -> PaginationRequestBuilder {
        PaginationRequestBuilder {
            request: Self::new(value, 0),
        }
    }

    /// Initializer string this request stands for
    pub fn initializer(&self) -> Result<String> {
        self.kind
            .format(self.mode, &self.value, self.fictitious, &self.separator)
    }

    /// Generate the requested labels
    pub fn labels(&self) -> Result<Vec<String>> {
        generate_labels(&self.initializer()?, self.count)
    }
}

/// Builder for PaginationRequest
#[derive(Debug)]
pub struct PaginationRequestBuilder {
    request: PaginationRequest,
}

impl PaginationRequestBuilder {
    #[must_use]
    pub fn kind(mut self, kind: PaginatorType) -> Self {
        self.request.kind = kind;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: PaginatorMode) -> Self {
        self.request.mode = mode;
        self
    }

    #[must_use]
    pub fn fictitious(mut self, fictitious: bool) -> Self {
        self.request.fictitious = fictitious;
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.request.separator = separator.into();
        self
    }

    /// Set the number of labels
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.request.count = count;
        self
    }

    /// Build the request
    #[must_use]
    pub fn build(self) -> PaginationRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PaginationError;

    #[test]
    fn test_request_default() {
        let request = PaginationRequest::new("1", 3);
        assert_eq!(request.kind, PaginatorType::Arabic);
        assert_eq!(request.mode, PaginatorMode::Pages);
        assert_eq!(request.separator, " ");
        assert!(!request.fictitious);
        assert_eq!(request.labels().unwrap(), ["1", "2", "3"]);
    }

    #[test]
    fn test_request_builder() {
        let request = PaginationRequest::builder("3")
            .kind(PaginatorType::Roman)
            .mode(PaginatorMode::DoublePages)
            .separator("/")
            .fictitious(true)
            .count(2)
            .build();

        assert_eq!(request.initializer().unwrap(), "[III]/[IV]");
        assert_eq!(request.labels().unwrap(), ["[III]/[IV]", "[V]/[VI]"]);
    }

    #[test]
    fn test_request_zero_count() {
        let request = PaginationRequest::new("1", 0);
        assert!(request.labels().unwrap().is_empty());
    }

    #[test]
    fn test_request_invalid_seed() {
        let request = PaginationRequest::new("seven", 2);
        assert!(matches!(
            request.labels(),
            Err(PaginationError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_request_serde() {
        let json = r#"{"kind":"roman","mode":"pages","value":"4","count":2}"#;
        let request: PaginationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.separator, " ");
        assert_eq!(request.labels().unwrap(), ["IV", "V"]);

        let back = serde_json::to_string(&request).unwrap();
        assert!(back.contains("\"kind\":\"roman\""));
    }
}
