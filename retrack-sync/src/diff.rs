//! Unified-diff rendering for dry-run output.

use std::path::Path;

use similar::TextDiff;

/// Render a unified diff of the original vs. patched workflow text.
///
/// Returns an empty string when the texts are identical.
pub fn unified_diff(original: &str, patched: &str, path: &Path) -> String {
    if original == patched {
        return String::new();
    }
    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());
    TextDiff::from_lines(original, patched)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn identical_texts_produce_no_diff() {
        let path = PathBuf::from(".github/workflows/sync-files.yml");
        assert_eq!(unified_diff("same\n", "same\n", &path), "");
    }

    #[test]
    fn changed_line_appears_with_headers() {
        let path = PathBuf::from(".github/workflows/sync-files.yml");
        let diff = unified_diff(
            "- source: a/x.yaml\n",
            "- source: a/x2.yaml\n",
            &path,
        );
        assert!(diff.contains("a/.github/workflows/sync-files.yml"));
        assert!(diff.contains("-- source: a/x.yaml"));
        assert!(diff.contains("+- source: a/x2.yaml"));
    }
}
