//! Field helpers for carousel items
//!
//! Provides the link, metadata and thumbnail rules applied to each item.

/// Origin prepended to relative item links
pub const BASE_URL: &str = "https://www.google.com";

/// Builds the absolute link for an item
///
/// The `href` is appended to `origin` verbatim. An empty `href` yields no link.
///
/// # Example
/// ```
/// use carousel_core::url::{build_link, BASE_URL};
/// let link = build_link(BASE_URL, "/search?q=starry+night");
/// assert_eq!(link.as_deref(), Some("https://www.google.com/search?q=starry+night"));
/// assert_eq!(build_link(BASE_URL, ""), None);
/// ```
pub fn build_link(origin: &str, href: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    Some(format!("{}{}", origin, href))
}

/// Splits a metadata string into its values
///
/// Pieces are trimmed and empty ones dropped, so an empty string gives an
/// empty list and a string without the delimiter gives a single value.
///
/// # Example
/// ```
/// use carousel_core::url::split_extensions;
/// assert_eq!(split_extensions("1889, Oil on canvas", ", "), vec!["1889", "Oil on canvas"]);
/// assert_eq!(split_extensions("1889", ", "), vec!["1889"]);
/// assert!(split_extensions("", ", ").is_empty());
/// ```
pub fn split_extensions(text: &str, delimiter: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![text.to_string()];
    }

    text.split(delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Picks the thumbnail URL from an image's lazy-load and fallback attributes
///
/// A non-empty lazy value wins; otherwise a non-empty fallback is used.
///
/// # Example
/// ```
/// use carousel_core::url::pick_thumbnail;
/// assert_eq!(pick_thumbnail(Some("thumb1.jpg"), Some("blank.gif")).as_deref(), Some("thumb1.jpg"));
/// assert_eq!(pick_thumbnail(Some(""), Some("blank.gif")).as_deref(), Some("blank.gif"));
/// assert_eq!(pick_thumbnail(None, None), None);
/// ```
pub fn pick_thumbnail(lazy: Option<&str>, fallback: Option<&str>) -> Option<String> {
    lazy.filter(|v| !v.is_empty())
        .or_else(|| fallback.filter(|v| !v.is_empty()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_link() {
        let link = build_link(BASE_URL, "/search?q=the+potato+eaters");
        assert_eq!(
            link,
            Some("https://www.google.com/search?q=the+potato+eaters".to_string())
        );
    }

    #[test]
    fn test_build_link_keeps_href_verbatim() {
        // No normalization: a missing leading slash is passed through as-is
        let link = build_link(BASE_URL, "search?q=x");
        assert_eq!(link, Some("https://www.google.comsearch?q=x".to_string()));
    }

    #[test]
    fn test_build_link_empty_href() {
        assert_eq!(build_link(BASE_URL, ""), None);
    }

    #[test]
    fn test_split_extensions_multiple() {
        assert_eq!(
            split_extensions("1888, Arles, France", ", "),
            vec!["1888", "Arles", "France"]
        );
    }

    #[test]
    fn test_split_extensions_trims_and_drops_empty() {
        assert_eq!(split_extensions("  1889,  , Saint-Rémy ", ", "), vec!["1889", "Saint-Rémy"]);
        assert!(split_extensions("   ", ", ").is_empty());
    }

    #[test]
    fn test_split_extensions_empty_delimiter() {
        assert_eq!(split_extensions("1889, 1890", ""), vec!["1889, 1890"]);
    }

    #[test]
    fn test_pick_thumbnail_prefers_lazy() {
        assert_eq!(
            pick_thumbnail(Some("https://img/lazy.jpg"), Some("data:image/gif;base64,R0lG")),
            Some("https://img/lazy.jpg".to_string())
        );
    }

    #[test]
    fn test_pick_thumbnail_fallback() {
        assert_eq!(pick_thumbnail(None, Some("src.jpg")), Some("src.jpg".to_string()));
        assert_eq!(pick_thumbnail(Some(""), Some("")), None);
    }

    proptest! {
        #[test]
        fn prop_link_is_origin_followed_by_href(href in "/[a-z0-9?=&+_/-]{0,40}") {
            let link = build_link(BASE_URL, &href).unwrap();
            prop_assert!(link.starts_with(BASE_URL));
            prop_assert_eq!(&link[BASE_URL.len()..], href.as_str());
        }

        #[test]
        fn prop_split_extensions_recovers_joined_values(
            values in proptest::collection::vec("[A-Za-z0-9][A-Za-z0-9 ]{0,10}[A-Za-z0-9]", 0..6)
        ) {
            let joined = values.join(", ");
            prop_assert_eq!(split_extensions(&joined, ", "), values);
        }
    }
}
