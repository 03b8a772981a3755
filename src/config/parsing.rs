// src/config/parsing.rs

use crate::errors::{Error, Result};
use byte_unit::Byte;
use std::collections::BTreeSet;
use std::str::FromStr;
use url::Url;

/// Flattens comma-separated values into trimmed, non-empty items.
///
/// Clap already splits on `,`, but builder callers may pass `"a,b"` directly.
pub(super) fn split_list(values: Vec<String>) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercases extensions and adds the leading `.` where it is missing.
pub(super) fn normalize_extensions(values: Vec<String>) -> BTreeSet<String> {
    split_list(values)
        .into_iter()
        .map(|ext| {
            let ext = ext.to_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}

/// Parses a chunk size such as `"1048576"`, `"512k"` or `"1MiB"`.
pub(super) fn parse_chunk_size(size: &str) -> Result<usize> {
    let bytes = Byte::from_str(size.trim())
        .map_err(|e| Error::Config(format!("Invalid chunk size '{}': {}", size, e)))?;
    usize::try_from(bytes.as_u128())
        .map_err(|_| Error::Config(format!("Chunk size '{}' is too large", size)))
}

/// Parses and checks the upload endpoint, returning it in normalized form.
pub(super) fn parse_endpoint(endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint)
        .map_err(|e| Error::Config(format!("Invalid endpoint URL '{}': {}", endpoint, e)))?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(url.into())
    } else {
        Err(Error::Config(format!(
            "Endpoint must use http or https, got '{}'",
            url.scheme()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        let items = split_list(vec!["a, b".to_string(), "c,,".to_string(), " ".to_string()]);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_extensions() {
        let exts = normalize_extensions(vec!["py,.RS".to_string(), "Go".to_string()]);
        assert_eq!(
            exts.into_iter().collect::<Vec<_>>(),
            vec![".go", ".py", ".rs"]
        );
    }

    #[test]
    fn test_parse_chunk_size() {
        assert_eq!(parse_chunk_size("1048576").unwrap(), 1_048_576);
        assert_eq!(parse_chunk_size("1MiB").unwrap(), 1_048_576);
        assert_eq!(parse_chunk_size("2KB").unwrap(), 2_000);
        assert!(parse_chunk_size("lots").is_err());
    }

    #[test]
    fn test_parse_endpoint() {
        assert!(parse_endpoint("http://localhost:4000/api/text").is_ok());
        assert!(parse_endpoint("https://example.com/upload").is_ok());
        assert!(matches!(
            parse_endpoint("ftp://example.com"),
            Err(Error::Config(_))
        ));
        assert!(parse_endpoint("not a url").is_err());
    }
}
