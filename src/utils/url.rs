// src/utils/url.rs

//! URL manipulation utilities.

/// Join a base URL and a relative path with exactly one separating slash.
///
/// # Examples
/// ```
/// use epaper_locator::utils::url::join;
///
/// assert_eq!(
///     join("https://example.com/editions/", "epaper-17-07-25.pdf"),
///     "https://example.com/editions/epaper-17-07-25.pdf"
/// );
/// ```
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_trailing_slash() {
        assert_eq!(
            join("https://example.com/", "file.pdf"),
            "https://example.com/file.pdf"
        );
    }

    #[test]
    fn test_join_no_trailing_slash() {
        assert_eq!(
            join("https://example.com", "file.pdf"),
            "https://example.com/file.pdf"
        );
    }

    #[test]
    fn test_join_leading_slash_on_path() {
        assert_eq!(
            join("https://example.com/", "/file.pdf"),
            "https://example.com/file.pdf"
        );
    }

    #[test]
    fn test_join_nested_base() {
        assert_eq!(
            join("https://example.com/a/b", "file.pdf"),
            "https://example.com/a/b/file.pdf"
        );
    }
}
