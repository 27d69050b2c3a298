//! Line classification and cleanup.
//!
//! All helpers here are pure and work on borrowed slices. Comment markers are
//! recognised anywhere in a line, not only at its start, and there is no
//! escape for them: `url=http://host/#frag` loads as `http://host/`. The same
//! goes for the continuation marker, where the first backslash ends the
//! usable content. Both are kept as-is for compatibility with existing files.

/// Characters that start a comment.
pub const COMMENT_MARKERS: [char; 2] = ['#', '!'];

/// Character that continues a value onto the next line.
pub const CONTINUATION_MARKER: char = '\\';

/// Returns `true` if the trimmed line starts with a comment marker.
pub fn is_full_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKERS)
}

/// Returns `true` if the line carries content worth parsing.
pub fn is_line_valid(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !is_full_comment(line)
}

/// Returns `true` for blank lines and full-line comments.
pub fn is_blank_or_comment(line: &str) -> bool {
    !is_line_valid(line)
}

/// Position of the first comment marker, if any.
pub fn comment_index(line: &str) -> Option<usize> {
    line.find(COMMENT_MARKERS)
}

/// Position of the first continuation marker, if any.
pub fn continuation_index(line: &str) -> Option<usize> {
    line.find(CONTINUATION_MARKER)
}

/// Trim the line and cut it at the first comment marker.
///
/// The result is not trimmed again, so `a=1 # note` yields `a=1 `.
pub fn strip_trailing_comment(line: &str) -> &str {
    let line = line.trim();
    match comment_index(line) {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Trim the line and cut it at the first continuation marker.
///
/// Whitespace before the marker survives: `foo \` yields `foo `, which is
/// how a continued value gets a separating space.
pub fn strip_continuation(line: &str) -> &str {
    let line = line.trim();
    match continuation_index(line) {
        Some(index) => &line[..index],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_rejected() {
        assert!(is_blank_or_comment(""));
        assert!(is_blank_or_comment("   \t"));
        assert!(is_blank_or_comment("\r\n"));
    }

    #[test]
    fn full_comments_are_rejected() {
        assert!(is_blank_or_comment("# heading"));
        assert!(is_blank_or_comment("   ! bang comment"));
        assert!(is_full_comment("#"));
    }

    #[test]
    fn content_lines_are_valid() {
        assert!(is_line_valid("a=b"));
        assert!(is_line_valid("  notapair  "));
        assert!(!is_full_comment("a=b # trailing"));
    }

    #[test]
    fn strip_trailing_comment_cuts_mid_line() {
        assert_eq!(strip_trailing_comment("  a=1 # note"), "a=1 ");
        assert_eq!(strip_trailing_comment("a=1!bang"), "a=1");
        assert_eq!(strip_trailing_comment("url=http://host/#frag"), "url=http://host/");
        assert_eq!(strip_trailing_comment("  plain  "), "plain");
    }

    #[test]
    fn comment_index_finds_either_marker() {
        assert_eq!(comment_index("ab!c#d"), Some(2));
        assert_eq!(comment_index("ab#c!d"), Some(2));
        assert_eq!(comment_index("abc"), None);
    }

    #[test]
    fn continuation_index_finds_first_backslash() {
        assert_eq!(continuation_index(r"foo\"), Some(3));
        assert_eq!(continuation_index(r"C:\dir\file"), Some(2));
        assert_eq!(continuation_index("foo"), None);
    }

    #[test]
    fn strip_continuation_keeps_inner_whitespace() {
        assert_eq!(strip_continuation(r"  foo\  "), "foo");
        assert_eq!(strip_continuation(r"foo \"), "foo ");
        assert_eq!(strip_continuation("bar"), "bar");
    }
}
