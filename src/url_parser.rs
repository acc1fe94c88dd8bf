//! Extraction of Drive file IDs from shareable links.

/// Extract the file ID from a shareable Drive link.
///
/// The links handed to this tool carry the ID in an `id=` query parameter,
/// e.g. `https://drive.google.com/open?id=<ID>` or
/// `https://drive.google.com/uc?export=download&id=<ID>`.
///
/// The URL must contain the `id=` marker exactly once; everything after the
/// marker is taken verbatim as the ID. Zero or multiple markers, or nothing
/// after the marker, yields `None` — an unsupported link shape is an
/// expected "nothing to fetch" outcome, not an error.
///
/// # Examples
///
/// ```
/// use deck_drive::url_parser::extract_file_id;
///
/// let id = extract_file_id("https://drive.google.com/open?id=1abc123");
/// assert_eq!(id.as_deref(), Some("1abc123"));
///
/// assert_eq!(extract_file_id("https://example.com/no-marker"), None);
/// ```
pub fn extract_file_id(url: &str) -> Option<String> {
    let mut parts = url.split("id=");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(id), None) if !id.is_empty() => Some(id.to_string()),
        _ => None,
    }
}
