//! Heuristic "does this page have results" check on saved search pages.
//!
//! Search engines render an empty result set as a normal 200 page, so the
//! only signal available is the page text itself. The phrase list covers the
//! English and Russian wordings seen across the supported engines.
//!
//! Classification fails open: if the saved file cannot be read back, the page
//! is treated as having results and is still surfaced. Wrongly suppressing a
//! real hit costs more than opening an empty page.

use std::path::Path;

use tracing::{debug, warn};

/// Phrases that mark an empty result page, matched case-insensitively in
/// listed order.
pub const NO_RESULT_PHRASES: &[&str] = &[
    "not found",
    "no results",
    "nothing matched",
    "nothing found",
    "no matches found",
    "0 results",
    "zero results",
    "couldn't find",
    "it seems we cannot find",
    "something's wrong here",
    "sorry, but nothing matched your search terms",
    "no results found",
    "no posts were found",
    "no search results were found here",
    "результаты не найдены",
    "it seems we can't find what you're looking for",
    "найдено 0 результатов",
];

/// Return the first no-results phrase contained in `content`, if any.
///
/// Matching is case-insensitive; `content` is lowercased once up front.
pub fn no_results_marker(content: &str) -> Option<&'static str> {
    let lowered = content.to_lowercase();
    NO_RESULT_PHRASES
        .iter()
        .find(|phrase| lowered.contains(*phrase))
        .copied()
}

/// Verdict for previously saved page text: `true` means "has results".
pub fn text_has_results(content: &str) -> bool {
    no_results_marker(content).is_none()
}

/// Read a saved page back and classify it.
///
/// Fail-open: a missing file or undecodable bytes yield `true` so the page
/// is surfaced rather than silently hidden.
pub async fn saved_page_has_results(path: &Path) -> bool {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => match no_results_marker(&content) {
            Some(phrase) => {
                debug!(path = %path.display(), phrase, "no-results marker found");
                false
            }
            None => true,
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not re-read saved page, surfacing it anyway");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn clean_page_has_results() {
        assert!(text_has_results("<html><body><ul><li>myapp 1.2 setup</li></ul></body></html>"));
    }

    #[test]
    fn marker_is_matched_case_insensitively() {
        assert!(!text_has_results("<p>No Results Found for your query</p>"));
    }

    #[test]
    fn russian_marker_suppresses() {
        assert!(!text_has_results("<div>Результаты не найдены</div>"));
    }

    #[test]
    fn first_matching_phrase_is_reported() {
        let content = "not found ... no results found";
        assert_eq!(no_results_marker(content), Some("not found"));
    }

    #[test]
    fn classification_is_idempotent() {
        let content = "<p>nothing matched your query</p>";
        assert_eq!(text_has_results(content), text_has_results(content));
    }

    #[tokio::test]
    async fn missing_file_fails_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let gone = dir.path().join("example.com.html");
        assert!(saved_page_has_results(&gone).await);
    }

    #[tokio::test]
    async fn undecodable_bytes_fail_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("example.com.html");
        let mut f = std::fs::File::create(&path).expect("create");
        f.write_all(&[0xff, 0xfe, 0x00, 0xc3]).expect("write");
        assert!(saved_page_has_results(&path).await);
    }

    #[tokio::test]
    async fn saved_no_results_page_suppresses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("example.com.html");
        std::fs::write(&path, "<html>Sorry, but nothing matched your search terms</html>")
            .expect("write");
        assert!(!saved_page_has_results(&path).await);
    }
}
