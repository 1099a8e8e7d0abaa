//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Listings that stopped early; `data` may be incomplete
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                warnings: Vec::new(),
            },
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.meta.warnings = warnings;
        self
    }
}

/// Format data as pretty-printed JSON inside the `{data, meta}` envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

/// Like [`format_json`], recording incomplete listings in `meta.warnings`
pub fn format_json_with_warnings<T: Serialize + ?Sized>(
    data: &T,
    warnings: &[String],
) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data).with_warnings(warnings.to_vec());
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Clone)]
    struct TestItem {
        repo: String,
        permission: String,
    }

    #[test]
    fn test_json_output_new() {
        let data = vec!["acme", "octo-org"];
        let output = JsonOutput::new(data);

        assert_eq!(output.data, vec!["acme", "octo-org"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_basic() {
        let items = vec![TestItem {
            repo: "api".to_string(),
            permission: "push".to_string(),
        }];

        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"repo\": \"api\""));
        assert!(result.contains("\"permission\": \"push\""));
        assert!(result.contains("\"timestamp\""));
        assert!(result.contains("\"version\""));
    }

    #[test]
    fn test_warnings_omitted_when_empty() {
        let result = format_json(&vec!["api"]).unwrap();
        assert!(!result.contains("warnings"));
    }

    #[test]
    fn test_format_json_with_warnings() {
        let warnings = vec!["Repository listing stopped".to_string()];
        let result = format_json_with_warnings(&vec!["api"], &warnings).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["meta"]["warnings"][0], "Repository listing stopped");
    }

    #[test]
    fn test_format_json_empty_vec() {
        let items: Vec<TestItem> = vec![];
        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\": []"));
    }

    #[test]
    fn test_format_json_preserves_order() {
        let items = vec![
            TestItem {
                repo: "api".to_string(),
                permission: "push".to_string(),
            },
            TestItem {
                repo: "web".to_string(),
                permission: "admin".to_string(),
            },
        ];

        let result = format_json(&items).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["data"][1]["repo"], "web");
    }
}
