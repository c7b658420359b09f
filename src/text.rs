//! Text Helpers
//!
//! Presentation-side cleanup for API-supplied descriptions.

/// Drop `<...>` tag sequences; an unterminated tag swallows the rest.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Tag-strip then cut to at most `max` characters, trimming trailing
/// whitespace and appending an ellipsis when shortened.
pub fn truncate(input: &str, max: usize) -> String {
    let clean = strip_tags(input);
    if clean.chars().count() <= max {
        return clean;
    }
    let cut: String = clean.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(strip_tags("a <b>bold</b> move"), "a bold move");
        assert_eq!(strip_tags("no tags"), "no tags");
        assert_eq!(strip_tags("broken <tag"), "broken ");
    }

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate("short", 160), "short");
    }

    #[test]
    fn long_text_cut_with_ellipsis() {
        let long = "word ".repeat(50);
        let cut = truncate(&long, 12);
        assert_eq!(cut, "word word wo…");
    }

    #[test]
    fn cut_point_whitespace_trimmed() {
        assert_eq!(truncate("abcd efgh", 5), "abcd…");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(truncate("ééééé", 5), "ééééé");
        assert_eq!(truncate("éééééé", 5), "ééééé…");
    }
}
