//! Shared HTTP client utilities
//!
//! A single lazily-initialized client gives connection pooling across calls
//! and one place to set the request timeout.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Default HTTP timeout for API requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("feira-rs/0.1")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

/// Strip markdown code fences from a JSON response
///
/// Some models wrap their JSON responses in markdown code blocks like:
/// ```json
/// {"key": "value"}
/// ```
///
/// This removes the surrounding fences (including an unterminated opening
/// fence) and returns the clean JSON content.
pub fn strip_markdown_json(content: &str) -> &str {
    let mut trimmed = content.trim();

    if let Some(stripped) = trimmed.strip_prefix("```json") {
        trimmed = stripped;
    } else if let Some(stripped) = trimmed.strip_prefix("```") {
        trimmed = stripped;
    }

    if let Some(stripped) = trimmed.strip_suffix("```") {
        trimmed = stripped;
    }

    trimmed.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_json_with_json_block() {
        let input = "```json\n{\"items\": []}\n```";
        assert_eq!(strip_markdown_json(input), r#"{"items": []}"#);
    }

    #[test]
    fn test_strip_markdown_json_with_plain_block() {
        let input = "```\n{\"items\": []}\n```";
        assert_eq!(strip_markdown_json(input), r#"{"items": []}"#);
    }

    #[test]
    fn test_strip_markdown_json_no_block() {
        let input = r#"{"items": []}"#;
        assert_eq!(strip_markdown_json(input), input);
    }

    #[test]
    fn test_strip_markdown_json_unterminated_fence() {
        let input = "```json\n{\"items\": []}";
        assert_eq!(strip_markdown_json(input), r#"{"items": []}"#);
    }

    #[test]
    fn test_strip_markdown_json_with_whitespace() {
        let input = "  ```json\n{\"items\": []}\n```  ";
        assert_eq!(strip_markdown_json(input), r#"{"items": []}"#);
    }

    #[test]
    fn test_get_client_returns_same_instance() {
        let client1 = get_client();
        let client2 = get_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
