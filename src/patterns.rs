//! Compiled regex patterns for lexical content extraction.
//!
//! All patterns are compiled once at first use using `LazyLock` and are
//! immutable afterwards. They are grouped by the pipeline stage that reads
//! them.
//!
//! Whitespace classes are ASCII-only (`(?-u:\s)`) throughout. Unicode
//! whitespace such as U+3000 is handled by the text normalizer instead, so
//! block lengths and trimming stay stable for CJK pages.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Document-level Patterns
// =============================================================================

/// Frameset documents and meta-refresh redirects carry no body of their own.
pub static FRAME_OR_REDIRECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)</frameset>|<meta(?-u:\s)+http-equiv(?-u:\s)*=(?-u:\s)*["']?refresh["']?[^>]*url"#,
    )
    .expect("FRAME_OR_REDIRECT regex")
});

/// End of the document head.
pub static HEAD_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head(?-u:\s)*>").expect("HEAD_END regex"));

/// The `<title>` element. Group 1 is the inner text without surrounding whitespace.
pub static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(?-u:\s)*(.*?)(?-u:\s)*</title(?-u:\s)*>").expect("TITLE regex")
});

// =============================================================================
// Google AdSense Section Targeting
// =============================================================================

/// A section the publisher asked ad targeting to ignore.
pub static AD_SECTION_IGNORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--(?-u:\s)*google_ad_section_start\(weight=ignore\)(?-u:\s)*-->.*?<!--(?-u:\s)*google_ad_section_end.*?-->",
    )
    .expect("AD_SECTION_IGNORE regex")
});

/// Any section-start marker.
pub static AD_SECTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--(?-u:\s)*google_ad_section_start[^>]*-->").expect("AD_SECTION_START regex")
});

/// A whole start..end section, markers included.
pub static AD_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--(?-u:\s)*google_ad_section_start[^>]*-->.*?<!--(?-u:\s)*google_ad_section_end.*?-->",
    )
    .expect("AD_SECTION regex")
});

// =============================================================================
// Noise Patterns
// =============================================================================

/// Decorative symbols: curly quotes, arrows, geometric shapes and stars.
pub static STRAY_SYMBOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{2018}-\x{201D}\x{2190}-\x{2193}\x{25A0}-\x{25BD}\x{25C6}-\x{25EF}\x{2605}\x{2606}]")
        .expect("STRAY_SYMBOLS regex")
});

/// Opening tag of an element removed together with its content.
///
/// The `regex` crate has no backreferences, so the matching close tag is
/// looked up separately with [`noise_element_close`].
pub static NOISE_ELEMENT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(script|style|select|noscript)[^>]*>").expect("NOISE_ELEMENT_OPEN regex")
});

static SCRIPT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</script(?-u:\s)*>").expect("SCRIPT_CLOSE regex"));
static STYLE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</style(?-u:\s)*>").expect("STYLE_CLOSE regex"));
static SELECT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</select(?-u:\s)*>").expect("SELECT_CLOSE regex"));
static NOSCRIPT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</noscript(?-u:\s)*>").expect("NOSCRIPT_CLOSE regex"));

/// Closing tag for an element name captured by [`NOISE_ELEMENT_OPEN`].
#[must_use]
pub fn noise_element_close(name: &str) -> Option<&'static Regex> {
    match name.to_ascii_lowercase().as_str() {
        "script" => Some(&SCRIPT_CLOSE),
        "style" => Some(&STYLE_CLOSE),
        "select" => Some(&SELECT_CLOSE),
        "noscript" => Some(&NOSCRIPT_CLOSE),
        _ => None,
    }
}

pub static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT regex"));

/// SGML declarations such as `<!DOCTYPE ...>`.
pub static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<![A-Za-z].*?>").expect("DECLARATION regex"));

/// Embedded slideshow widget, removed with its content.
pub static SLIDE_WIDGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<div(?-u:\s)[^>]*class(?-u:\s)*=(?-u:\s)*["']?alpslab-slide["']?[^>]*>.*?</div(?-u:\s)*>"#,
    )
    .expect("SLIDE_WIDGET regex")
});

/// Opening tag of a "read more" wrapper. Only the tag goes; the content stays.
pub static MORE_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<div(?-u:\s)[^>]*(?:id|class)(?-u:\s)*=(?-u:\s)*["']?[^\t\n\x0B\x0C\r ]*more[^\t\n\x0B\x0C\r ]*["']?[^>]*>"#,
    )
    .expect("MORE_WRAPPER regex")
});

// =============================================================================
// Block Structure Patterns
// =============================================================================

/// Headings without attributes. Group 1 is the whole element, group 2 the trimmed text.
pub static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<h[0-9](?-u:\s)*>(?-u:\s)*(.*?)(?-u:\s)*</h[0-9](?-u:\s)*>)")
        .expect("HEADING regex")
});

/// Block delimiters: container tags and templated "posted"/plugin paragraphs.
pub static BLOCK_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)</?(?:div|center|td)[^>]*>|<p(?-u:\s)*[^>]*class(?-u:\s)*=(?-u:\s)*["']?(?:posted|plugin-[A-Za-z0-9_]+)["']?[^>]*>"#,
    )
    .expect("BLOCK_DELIMITER regex")
});

// =============================================================================
// Link and List Patterns
// =============================================================================

/// An anchor element with its content.
pub static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<a(?-u:\s)[^>]*>.*?</a(?-u:\s)*>").expect("LINK regex")
});

pub static FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<form(?-u:\s)[^>]*>.*?</form(?-u:\s)*>").expect("FORM regex")
});

/// First list region of any kind. Group 1 is the inner content.
pub static LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:ul|dl|ol)(.+?)</(?:ul|dl|ol)>").expect("LIST regex")
});

/// Unordered and definition lists, removed when measuring text outside a list.
pub static UNORDERED_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:ul|dl)(.+?)</(?:ul|dl)>").expect("UNORDERED_LIST regex")
});

pub static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li[^>]*>").expect("LIST_ITEM regex"));

/// An anchor with an `href`, quoted or bare.
pub static HREF_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<a(?-u:\s)+href=(?:"[^"'\t\n\x0B\x0C\r ]+"|'[^"'\t\n\x0B\x0C\r ]+'|[^"'\t\n\x0B\x0C\r ]+)"#,
    )
    .expect("HREF_LINK regex")
});

/// Amazon associate links (tracking id ending in `-22`).
pub static AFFILIATE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)amazon[a-z0-9./\-?&]+-22").expect("AFFILIATE_LINK regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("TAG regex"));

/// Any `&...;` sequence. Group 1 is the entity name.
pub static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(.*?);").expect("ENTITY regex"));

pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s)+").expect("WHITESPACE_RUN regex"));

pub static SPACE_TAB_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("SPACE_TAB_RUN regex"));

/// A newline and any whitespace that follows it.
pub static NEWLINE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?-u:\s)*").expect("NEWLINE_INDENT regex"));

// =============================================================================
// Scoring Defaults
// =============================================================================

/// Sentence punctuation, Japanese and Latin. Default for `Options::punctuations`.
pub static PUNCTUATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([、。，．！？]|\.[^A-Za-z0-9]|,[^0-9]|!|\?)").expect("PUNCTUATIONS regex")
});

/// Footer and legal boilerplate phrases. Default for `Options::waste_expressions`.
pub static WASTE_EXPRESSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Copyright|All Rights Reserved").expect("WASTE_EXPRESSIONS regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_or_redirect_matches_frameset_and_refresh() {
        assert!(FRAME_OR_REDIRECT.is_match("<html></FRAMESET></html>"));
        assert!(FRAME_OR_REDIRECT.is_match(
            r#"<meta http-equiv="Refresh" content="0; URL=http://example.com/">"#
        ));
        assert!(!FRAME_OR_REDIRECT
            .is_match(r#"<meta http-equiv="content-type" content="text/html">"#));
    }

    #[test]
    fn title_captures_trimmed_inner_text() {
        let caps = TITLE.captures("<TITLE lang=en>\n  Hello page \n</title >").expect("title");
        assert_eq!(&caps[1], "Hello page");
    }

    #[test]
    fn noise_element_close_is_per_element() {
        let close = noise_element_close("SCRIPT").expect("script closer");
        assert!(close.is_match("</Script >"));
        assert!(!close.is_match("</style>"));
        assert!(noise_element_close("div").is_none());
    }

    #[test]
    fn block_delimiter_matches_containers_and_posted_paragraphs() {
        assert!(BLOCK_DELIMITER.is_match("<div class=\"x\">"));
        assert!(BLOCK_DELIMITER.is_match("</TD>"));
        assert!(BLOCK_DELIMITER.is_match("<p class=\"posted\">"));
        assert!(BLOCK_DELIMITER.is_match("<p class='plugin-related'>"));
        assert!(!BLOCK_DELIMITER.is_match("<p class=\"lead\">"));
        assert!(!BLOCK_DELIMITER.is_match("<span>"));
    }

    #[test]
    fn href_link_requires_balanced_quotes() {
        assert!(HREF_LINK.is_match(r#"<a href="/home">"#));
        assert!(HREF_LINK.is_match("<a href='/home'>"));
        assert!(HREF_LINK.is_match("<a href=/home>"));
        assert!(!HREF_LINK.is_match(r#"<a href="/home'>"#));
        assert!(!HREF_LINK.is_match(r#"<a name="top">"#));
    }

    #[test]
    fn affiliate_link_matches_associate_tag() {
        assert!(AFFILIATE_LINK.is_match("http://www.amazon.co.jp/exec/obidos/ASIN/4774/myshop-22"));
        assert!(!AFFILIATE_LINK.is_match("http://www.amazon.com/dp/B000"));
    }

    #[test]
    fn more_wrapper_matches_only_opening_tag() {
        let html = r#"<div class="entry-more" id="m">Body</div>"#;
        let m = MORE_WRAPPER.find(html).expect("more wrapper");
        assert_eq!(m.as_str(), r#"<div class="entry-more" id="m">"#);
    }

    #[test]
    fn punctuations_count_sentence_marks() {
        let text = "Hello, world. Is it 1,000? Yes! 3.14 is pi。";
        assert_eq!(PUNCTUATIONS.find_iter(text).count(), 5);
    }

    #[test]
    fn waste_expressions_are_case_insensitive() {
        assert_eq!(WASTE_EXPRESSIONS.find_iter("COPYRIGHT 2024. all rights reserved").count(), 2);
    }

    #[test]
    fn stray_symbols_cover_quotes_and_shapes() {
        assert_eq!(STRAY_SYMBOLS.replace_all("\u{201C}a\u{201D} \u{25A0}\u{2605}b", ""), "a b");
    }
}
