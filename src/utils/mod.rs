//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Split a raw block of product codes into an ordered list.
///
/// Codes are separated by commas and/or newlines; entries are trimmed
/// and empty entries dropped. Order and duplicates are preserved.
pub fn split_codes(raw: &str) -> Vec<String> {
    raw.split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/products/6205").unwrap();
        assert_eq!(
            resolve_url(&base, "/img/6205.jpg"),
            "https://example.com/img/6205.jpg"
        );
        assert_eq!(
            resolve_url(&base, "https://cdn.example.com/x.jpg"),
            "https://cdn.example.com/x.jpg"
        );
    }

    #[test]
    fn test_split_codes_commas_and_newlines() {
        assert_eq!(
            split_codes("6205, 6206\n6207"),
            vec!["6205", "6206", "6207"]
        );
    }

    #[test]
    fn test_split_codes_crlf_and_empties() {
        assert_eq!(
            split_codes("6205,\r\n,, 6206 ,\n"),
            vec!["6205", "6206"]
        );
    }

    #[test]
    fn test_split_codes_preserves_order_and_duplicates() {
        assert_eq!(
            split_codes("b, a, b"),
            vec!["b", "a", "b"]
        );
    }

    #[test]
    fn test_split_codes_empty_input() {
        assert!(split_codes("").is_empty());
        assert!(split_codes(" \n , ").is_empty());
    }
}
