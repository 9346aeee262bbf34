//! Free-text cleanup for descriptions and system requirement blocks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Descriptions are cut to this many characters in the detail view.
pub const DESCRIPTION_LIMIT: usize = 500;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid blank regex"));

/// Clean an embedded-markup requirements block into display lines.
///
/// Strips tags, collapses runs of blank lines, and drops lines that are
/// whitespace only.
pub fn clean_requirements(raw: &str) -> Vec<String> {
    let stripped = TAG_RE.replace_all(raw, "");
    let collapsed = BLANK_RE.replace_all(&stripped, "\n");
    collapsed
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// First `DESCRIPTION_LIMIT` characters with a trailing ellipsis; shorter
/// text passes through untouched.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup_tags() {
        let raw = "<p><strong>Minimum:</strong></p><ul><li>OS: Windows 10</li></ul>";
        let lines = clean_requirements(raw);
        assert_eq!(lines, vec!["Minimum:OS: Windows 10"]);
    }

    #[test]
    fn test_collapses_blank_lines() {
        let raw = "Minimum:\n\n\nOS: Windows 10\n\nProcessor: i5";
        let lines = clean_requirements(raw);
        assert_eq!(lines, vec!["Minimum:", "OS: Windows 10", "Processor: i5"]);
    }

    #[test]
    fn test_whitespace_only_lines_dropped() {
        let raw = "OS: Windows 10\n   \nMemory: 8 GB";
        let lines = clean_requirements(raw);
        assert_eq!(lines, vec!["OS: Windows 10", "Memory: 8 GB"]);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(clean_requirements("").is_empty());
        assert!(clean_requirements("<br><br>").is_empty());
    }

    #[test]
    fn test_truncates_long_description() {
        let text = "x".repeat(600);
        let cut = truncate_description(&text);
        assert_eq!(cut.len(), DESCRIPTION_LIMIT + 3);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..DESCRIPTION_LIMIT], &text[..DESCRIPTION_LIMIT]);
    }

    #[test]
    fn test_short_description_untouched() {
        assert_eq!(truncate_description("short"), "short");
        let exact = "y".repeat(DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(&exact), exact);
    }
}
