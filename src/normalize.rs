//! Text normalization for extracted blocks and titles.
//!
//! Markup is removed lexically, fullwidth ASCII variants are folded to
//! halfwidth, box-drawing rules are dropped and a small fixed set of named
//! entities is decoded. Everything else (numeric references, unknown names)
//! is left untouched.

use std::borrow::Cow;

use crate::patterns::{ENTITY, NEWLINE_INDENT, SPACE_TAB_RUN, TAG, TITLE};

/// Named entities decoded by [`strip_tags`].
const CHARACTER_REFERENCES: [(&str, &str); 6] = [
    ("nbsp", " "),
    ("lt", "<"),
    ("gt", ">"),
    ("amp", "&"),
    ("laquo", "\u{ab}"),
    ("raquo", "\u{bb}"),
];

/// Offset between the fullwidth forms block (U+FF01..) and ASCII (0x21..).
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Removes tags and normalizes the remaining text.
///
/// Steps, in order: drop `<...>` tags, fold fullwidth symbols, digits and
/// letters to ASCII, remove box-drawing characters, map U+3000 to a space,
/// decode the six known entities, collapse runs of spaces/tabs and collapse
/// a newline plus any following whitespace to a single newline.
///
/// # Examples
///
/// ```
/// use extractcontent::normalize::strip_tags;
///
/// assert_eq!(strip_tags("<b>A</b>&nbsp;&amp;B"), "A &B");
/// assert_eq!(strip_tags("\u{FF21}\u{FF22}\u{FF43}"), "ABc");
/// ```
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let text = TAG.replace_all(html, "");
    let text = fold_wide_characters(&text);
    let text = ENTITY.replace_all(&text, |caps: &regex::Captures<'_>| {
        lookup_entity(&caps[1]).map_or_else(|| caps[0].to_string(), str::to_string)
    });
    let text = SPACE_TAB_RUN.replace_all(&text, " ");
    NEWLINE_INDENT.replace_all(&text, "\n").into_owned()
}

/// Extracts the document title from the first `<title>` element.
///
/// Returns an empty string when there is no title element.
#[must_use]
pub fn extract_title(html: &str) -> String {
    TITLE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or_else(String::new, |m| strip_tags(m.as_str()))
}

/// True if the block has no text once tags and `&nbsp;` are removed.
#[must_use]
pub fn has_only_tags(block: &str) -> bool {
    let text = TAG.replace_all(block, "");
    text.replace("&nbsp;", "").trim().is_empty()
}

fn lookup_entity(name: &str) -> Option<&'static str> {
    CHARACTER_REFERENCES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, decoded)| *decoded)
}

fn fold_wide_characters(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_folding) {
        return Cow::Borrowed(text);
    }

    let folded = text
        .chars()
        .filter_map(|c| match c {
            // Fullwidth symbols, digits and A-Z, then a-z.
            '\u{FF01}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
                char::from_u32(u32::from(c) - FULLWIDTH_OFFSET)
            }
            '\u{2500}'..='\u{257F}' => None,
            '\u{3000}' => Some(' '),
            _ => Some(c),
        })
        .collect();
    Cow::Owned(folded)
}

fn needs_folding(c: char) -> bool {
    matches!(
        c,
        '\u{FF01}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' | '\u{2500}'..='\u{257F}' | '\u{3000}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(strip_tags("<p class=\"a\">Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn strip_tags_decodes_known_entities() {
        assert_eq!(strip_tags("A&nbsp;&amp;B"), "A &B");
        assert_eq!(strip_tags("&lt;tag&gt;"), "<tag>");
        assert_eq!(strip_tags("&laquo;quote&raquo;"), "\u{ab}quote\u{bb}");
    }

    #[test]
    fn strip_tags_keeps_unknown_entities() {
        assert_eq!(strip_tags("&copy; 2024 &#169;"), "&copy; 2024 &#169;");
        assert_eq!(strip_tags("fish & chips; please"), "fish & chips; please");
    }

    #[test]
    fn strip_tags_folds_fullwidth_ascii() {
        assert_eq!(strip_tags("\u{FF21}"), "A");
        assert_eq!(strip_tags("\u{FF10}\u{FF19}"), "09");
        assert_eq!(strip_tags("\u{FF01}\u{FF1F}"), "!?");
        assert_eq!(strip_tags("\u{FF41}\u{FF5A}"), "az");
    }

    #[test]
    fn strip_tags_removes_box_drawing_and_wide_space() {
        assert_eq!(strip_tags("\u{2500}\u{2501}title\u{257F}"), "title");
        assert_eq!(strip_tags("a\u{3000}b"), "a b");
    }

    #[test]
    fn fullwidth_ampersand_becomes_entity_start() {
        assert_eq!(strip_tags("\u{FF06}amp;"), "&");
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("a  \t b"), "a b");
        assert_eq!(strip_tags("line one\n   \n\tline two"), "line one\nline two");
    }

    #[test]
    fn strip_tags_is_fixed_point_on_plain_text() {
        let plain = "Already clean text.\nSecond line with one space.";
        assert_eq!(strip_tags(plain), plain);
        assert_eq!(strip_tags(&strip_tags(plain)), plain);
    }

    #[test]
    fn extract_title_strips_inner_markup() {
        let html = "<html><head><title> My <b>Page</b>&amp;Co </title></head></html>";
        assert_eq!(extract_title(html), "My Page&Co");
    }

    #[test]
    fn extract_title_missing_is_empty() {
        assert_eq!(extract_title("<html><body>No title</body></html>"), "");
    }

    #[test]
    fn has_only_tags_ignores_nbsp() {
        assert!(has_only_tags("<br/>&nbsp;<img src=\"x.png\">  "));
        assert!(has_only_tags(""));
        assert!(!has_only_tags("<p>x</p>"));
    }
}
