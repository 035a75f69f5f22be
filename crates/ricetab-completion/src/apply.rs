//! Completion insertion formatting
//!
//! The model's completion continues the current line, so its first line
//! slots in verbatim; every following line is shifted right by the
//! indentation of the insertion point so the block lands aligned with the
//! surrounding code. Relative indentation inside the completion is
//! preserved.

/// Reformat a completion for insertion at a point indented by `indent` columns
///
/// The first line is untouched; every subsequent line gains `indent` leading
/// spaces. A single-line completion comes back unchanged.
pub fn reindent(completion: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut lines = completion.split('\n');
    let mut out = String::with_capacity(completion.len() + indent * 4);

    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.push_str(&pad);
        out.push_str(line);
    }

    out
}

/// Leading-whitespace width of the line containing `cursor`
///
/// Counts whitespace characters from the start of the line, the way editors
/// report the current indentation level.
pub fn leading_indent(text: &str, cursor: usize) -> usize {
    let mut end = cursor.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }

    let line_start = text[..end].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..]
        .chars()
        .take_while(|c| c.is_whitespace() && *c != '\n')
        .count()
}

/// Resolve a completion choice against the "none selected" sentinel
///
/// `None`, or an index past the candidate list, selects nothing: no text is
/// produced and the document stays untouched. A valid index yields the
/// candidate reindented for the insertion point.
pub fn select_completion(
    candidates: &[String],
    selected: Option<usize>,
    indent: usize,
) -> Option<String> {
    let index = selected?;
    let completion = candidates.get(index)?;
    Some(reindent(completion, indent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindent_prefixes_continuation_lines() {
        assert_eq!(reindent("foo\nbar", 4), "foo\n    bar");
    }

    #[test]
    fn test_reindent_single_line_is_identity() {
        assert_eq!(reindent("foo", 8), "foo");
    }

    #[test]
    fn test_reindent_zero_width_is_identity() {
        assert_eq!(reindent("foo\nbar\nbaz", 0), "foo\nbar\nbaz");
    }

    #[test]
    fn test_reindent_preserves_relative_indentation() {
        let completion = "if x:\n    y()\nz()";
        assert_eq!(reindent(completion, 2), "if x:\n      y()\n  z()");
    }

    #[test]
    fn test_reindent_empty_completion() {
        assert_eq!(reindent("", 4), "");
    }

    #[test]
    fn test_leading_indent_counts_whitespace() {
        let text = "def f():\n    return 1";
        let cursor = text.len();
        assert_eq!(leading_indent(text, cursor), 4);
    }

    #[test]
    fn test_leading_indent_unindented_line() {
        assert_eq!(leading_indent("top level", 5), 0);
    }

    #[test]
    fn test_leading_indent_first_line() {
        assert_eq!(leading_indent("  indented first", 10), 2);
    }

    #[test]
    fn test_leading_indent_counts_full_line_even_before_cursor() {
        // The cursor sits inside the leading whitespace; the whole line's
        // indentation still counts
        let text = "x\n        y";
        assert_eq!(leading_indent(text, 4), 8);
    }

    #[test]
    fn test_select_completion_applies_indent() {
        let candidates = vec!["foo\nbar".to_string()];
        let inserted = select_completion(&candidates, Some(0), 4);
        assert_eq!(inserted.as_deref(), Some("foo\n    bar"));
    }

    #[test]
    fn test_select_completion_none_sentinel_inserts_nothing() {
        let candidates = vec!["foo".to_string()];
        assert_eq!(select_completion(&candidates, None, 4), None);
    }

    #[test]
    fn test_select_completion_out_of_range_inserts_nothing() {
        let candidates = vec!["foo".to_string()];
        assert_eq!(select_completion(&candidates, Some(3), 4), None);
    }

    #[test]
    fn test_select_completion_empty_candidates() {
        assert_eq!(select_completion(&[], Some(0), 4), None);
    }
}
