//! HTML preprocessing before segmentation.
//!
//! Everything here works on the raw markup string: detecting documents that
//! have no body of their own, separating the head, honouring AdSense section
//! markers, removing noise elements and demoting headings that repeat the
//! page title.

use std::borrow::Cow;

use crate::normalize::extract_title;
use crate::patterns::{
    noise_element_close, AD_SECTION, AD_SECTION_IGNORE, AD_SECTION_START, COMMENT, DECLARATION,
    FRAME_OR_REDIRECT, HEADING, HEAD_END, MORE_WRAPPER, NOISE_ELEMENT_OPEN, SLIDE_WIDGET,
    STRAY_SYMBOLS,
};

/// Minimum heading length (in characters) considered for title demotion.
const MIN_TITLE_HEADING_LEN: usize = 3;

/// True for framesets and meta-refresh redirects.
#[must_use]
pub fn is_frame_or_redirect(html: &str) -> bool {
    FRAME_OR_REDIRECT.is_match(html)
}

/// Splits off the document head.
///
/// Returns the title and the part of the document to analyse. The title is
/// taken from everything before the first `</head>`; analysis continues after
/// it. Without a head end marker the whole document is used for both.
#[must_use]
pub fn split_head(html: &str) -> (String, &str) {
    match HEAD_END.find(html) {
        Some(head_end) => (extract_title(&html[..head_end.start()]), &html[head_end.end()..]),
        None => (extract_title(html), html),
    }
}

/// Applies Google AdSense section targeting markers.
///
/// Sections marked `weight=ignore` are removed. If any section start marker
/// remains afterwards, only the marked sections are kept, joined by newlines.
#[must_use]
pub fn apply_ad_sections(html: &str) -> Cow<'_, str> {
    let html = AD_SECTION_IGNORE.replace_all(html, "");
    if !AD_SECTION_START.is_match(&html) {
        return html;
    }

    let sections: Vec<&str> = AD_SECTION.find_iter(&html).map(|m| m.as_str()).collect();
    log::trace!("keeping {} ad-targeted section(s)", sections.len());
    Cow::Owned(sections.join("\n"))
}

/// Removes markup that never carries article text.
///
/// In order: decorative symbols, script/style/select/noscript elements with
/// their content, comments, SGML declarations, slideshow widgets and the
/// opening tag of "more" wrappers.
#[must_use]
pub fn eliminate_useless_tags(html: &str) -> String {
    let html = STRAY_SYMBOLS.replace_all(html, "");
    let html = remove_noise_elements(&html);
    let html = COMMENT.replace_all(&html, "");
    let html = DECLARATION.replace_all(&html, "");
    let html = SLIDE_WIDGET.replace_all(&html, "");
    MORE_WRAPPER.replace_all(&html, "").into_owned()
}

/// Removes `<script>`, `<style>`, `<select>` and `<noscript>` elements.
///
/// An opening tag without a matching close tag is kept as-is and scanning
/// resumes right after its `<`.
fn remove_noise_elements(html: &str) -> Cow<'_, str> {
    let mut out: Option<String> = None;
    let mut copied_to = 0;
    let mut search_from = 0;

    while let Some(caps) = NOISE_ELEMENT_OPEN.captures_at(html, search_from) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let close = noise_element_close(name.as_str()).and_then(|re| re.find_at(html, open.end()));

        match close {
            Some(close) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(html.len()));
                buf.push_str(&html[copied_to..open.start()]);
                copied_to = close.end();
                search_from = close.end();
            }
            // '<' is one byte, so start + 1 is a char boundary.
            None => search_from = open.start() + 1,
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&html[copied_to..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(html),
    }
}

/// Demotes headings that repeat the page title to plain blocks.
///
/// A heading whose text has at least three characters and occurs inside
/// `title` becomes `<div>text</div>`; all other headings are left alone.
#[must_use]
pub fn normalize_headings<'a>(html: &'a str, title: &str) -> Cow<'a, str> {
    HEADING.replace_all(html, |caps: &regex::Captures<'_>| {
        let text = &caps[2];
        if text.chars().count() >= MIN_TITLE_HEADING_LEN && title.contains(text) {
            format!("<div>{text}</div>")
        } else {
            caps[1].to_string()
        }
    })
}
