//! Correctness oracle.
//!
//! Before annotated output is trusted, the plain-mode rendering of the
//! program is compared against an independent reference rendering
//! supplied by an external collaborator. Both
//! sides receive the identical whitespace-normalization pass and are
//! then byte-compared; the first divergence is reported with bounded
//! context windows so the failing generator can be localized.

/// Characters of context reported around the first divergence.
const CONTEXT_WINDOW: usize = 100;

/// First point of divergence between two renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    /// Byte offset of the first differing character.
    pub position: usize,
    /// Up to [`CONTEXT_WINDOW`] characters of the expected side.
    pub expected: String,
    /// Up to [`CONTEXT_WINDOW`] characters of the found side.
    pub found: String,
}

/// Compare two strings and report the first divergence, if any.
pub fn find_difference(expected: &str, found: &str) -> Option<Diff> {
    let mismatch = expected
        .as_bytes()
        .iter()
        .zip(found.as_bytes())
        .position(|(a, b)| a != b)
        .or_else(|| {
            if expected.len() != found.len() {
                Some(expected.len().min(found.len()))
            } else {
                None
            }
        })?;

    Some(Diff {
        position: mismatch,
        expected: window(expected, mismatch),
        found: window(found, mismatch),
    })
}

fn window(text: &str, position: usize) -> String {
    let start = floor_char_boundary(text, position);
    let end = floor_char_boundary(text, (position + CONTEXT_WINDOW).min(text.len()));
    text[start..end].to_string()
}

fn floor_char_boundary(text: &str, mut pos: usize) -> usize {
    pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Whitespace-normalize source text for comparison.
///
/// All whitespace outside string and template literals is removed; a
/// single space survives only where deleting it would merge two word
/// tokens (`return x`, `typeof a`). Both renderings get this identical
/// pass, so any surviving difference is structural, not cosmetic.
pub fn normalize(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut chars = code.chars().peekable();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' | '`' => {
                quote = Some(ch);
                out.push(ch);
            }
            c if c.is_whitespace() => {
                // Collapse the whole run, then decide whether a separator
                // is required between the surrounding tokens.
                while chars.peek().is_some_and(|next| next.is_whitespace()) {
                    chars.next();
                }
                let prev_word = out.chars().last().is_some_and(is_word_char);
                let next_word = chars.peek().copied().is_some_and(is_word_char);
                if prev_word && next_word {
                    out.push(' ');
                }
            }
            c => out.push(c),
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_no_difference() {
        assert_eq!(find_difference("var a = 1;", "var a = 1;"), None);
    }

    #[test]
    fn reports_exact_offset_and_windows() {
        let expected = "var a = 1;";
        let found = "var a = 2;";
        let diff = find_difference(expected, found).unwrap();
        assert_eq!(diff.position, 8);
        assert_eq!(diff.expected, "1;");
        assert_eq!(diff.found, "2;");
    }

    #[test]
    fn prefix_mismatch_points_past_the_shorter_side() {
        let diff = find_difference("var a;", "var a; var b;").unwrap();
        assert_eq!(diff.position, 6);
        assert_eq!(diff.expected, "");
        assert_eq!(diff.found, " var b;");
    }

    #[test]
    fn normalization_erases_formatting_but_not_strings() {
        assert_eq!(normalize("var  a =\n 1;"), "var a=1;");
        assert_eq!(normalize("var a = ' spaced  out ';"), "var a=' spaced  out ';");
        assert_eq!(normalize("return x"), "return x");
        assert_eq!(normalize("a + b"), "a+b");
    }
}
