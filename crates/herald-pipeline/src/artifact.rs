use std::path::Path;

use herald_core::HeraldError;

/// Marker appended to a snapshot cut off at the character budget, so the
/// model knows the content is incomplete.
pub const TRUNCATION_MARKER: &str = "\n\n[TRUNCATED]\n";

/// Default character budget for the project snapshot.
pub const DEFAULT_SNAPSHOT_BUDGET: usize = 150_000;

/// Read a text artifact, replacing undecodable bytes instead of aborting.
///
/// CI-produced diffs and snapshots occasionally contain binary fragments;
/// encoding errors are fail-soft here, a missing file is not.
///
/// # Errors
///
/// Returns [`HeraldError::Io`] if the file cannot be read.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use herald_pipeline::artifact::read_lossy;
///
/// let diff = read_lossy(Path::new("pr.diff")).unwrap();
/// ```
pub fn read_lossy(path: &Path) -> Result<String, HeraldError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// True when the artifact is empty or whitespace-only.
///
/// An empty diff is not an error: the review pipeline exits cleanly with no
/// external calls.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Cap `text` at `budget` characters, appending [`TRUNCATION_MARKER`] if
/// anything was cut.
///
/// The budget counts `char`s, not bytes; content at or under budget passes
/// through unchanged.
///
/// # Examples
///
/// ```
/// use herald_pipeline::artifact::{truncate_to_budget, TRUNCATION_MARKER};
///
/// let capped = truncate_to_budget("abcdef", 3);
/// assert_eq!(capped, format!("abc{TRUNCATION_MARKER}"));
/// assert_eq!(truncate_to_budget("short", 100), "short");
/// ```
pub fn truncate_to_budget(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => {
            let mut capped = text[..cut].to_string();
            capped.push_str(TRUNCATION_MARKER);
            capped
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_utf8_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "+ line added").unwrap();
        let content = read_lossy(file.path()).unwrap();
        assert_eq!(content, "+ line added");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"diff \xff\xfe header").unwrap();
        let content = read_lossy(file.path()).unwrap();
        assert!(content.starts_with("diff "));
        assert!(content.ends_with(" header"));
        assert!(content.contains('\u{fffd}'));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = read_lossy(Path::new("/nonexistent/pr.diff"));
        assert!(matches!(result, Err(HeraldError::Io(_))));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t\n"));
        assert!(!is_blank("+ line added"));
    }

    #[test]
    fn truncation_keeps_exact_budget_prefix() {
        let text = "x".repeat(500);
        let capped = truncate_to_budget(&text, 100);
        assert!(capped.starts_with(&"x".repeat(100)));
        assert!(capped.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            capped.chars().count(),
            100 + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn content_at_budget_is_untouched() {
        let text = "y".repeat(100);
        assert_eq!(truncate_to_budget(&text, 100), text);
    }

    #[test]
    fn budget_counts_chars_not_bytes() {
        // Multi-byte chars: 10 snowmen are 30 bytes but 10 chars.
        let text = "\u{2603}".repeat(10);
        assert_eq!(truncate_to_budget(&text, 10), text);
        let capped = truncate_to_budget(&text, 5);
        assert_eq!(
            capped,
            format!("{}{TRUNCATION_MARKER}", "\u{2603}".repeat(5))
        );
    }
}
