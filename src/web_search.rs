use urlencoding::encode;

/// Build the browser URL for a search query. Empty queries yield `None` so
/// submitting a blank box is a no-op.
pub fn search_url(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        return None;
    }
    Some(format!("https://www.google.com/search?q={}", encode(q)))
}

/// Open the search results in the system browser. Returns `Ok(false)` for an
/// empty query.
pub fn open_search(query: &str) -> anyhow::Result<bool> {
    match search_url(query) {
        Some(url) => {
            open::that(&url)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
