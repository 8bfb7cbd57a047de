use extractcontent::{analyze, ExtractResult};
use std::time::{Duration, Instant};

const PARAGRAPH: &str = "A paragraph long enough to be kept as the article body. It has commas, \
                         full stops, and more than eighty characters of plain text.";

#[test]
fn empty_input_yields_empty_result() {
    let result = analyze("");
    assert!(result.is_empty());
    assert_eq!(result, ExtractResult::default());
}

#[test]
fn unclosed_tags_do_not_panic() {
    let html = format!("<p>text<div>{PARAGRAPH}");
    assert_eq!(analyze(&html).content_text, PARAGRAPH);
}

#[test]
fn invalid_nesting_does_not_panic() {
    let result = analyze("<p><div></p></div><td><center></td>");
    assert!(result.content_text.is_empty());
}

#[test]
fn broken_attributes_do_not_panic() {
    let result = analyze("<div class=\"test id=broken>");
    assert!(result.content_text.is_empty());
}

#[test]
fn incomplete_entities_are_kept_as_text() {
    // The unterminated `&amp` runs up to the next `;`, so `&lt;` is swallowed with it.
    let html = format!("<div>&amp text &lt; {PARAGRAPH}</div>");
    let result = analyze(&html);
    assert!(result.content_text.starts_with("&amp text &lt; A paragraph"));
}

#[test]
fn unclosed_script_is_kept_as_text() {
    let html = format!("<script>var a = 1;<div>{PARAGRAPH}</div>");
    assert_eq!(analyze(&html).content_text, PARAGRAPH);
}

#[test]
fn unterminated_comment_does_not_swallow_body() {
    let html = format!("<div>{PARAGRAPH}</div><!-- never closed");
    assert_eq!(analyze(&html).content_text, PARAGRAPH);
}

#[test]
fn unterminated_title_is_ignored() {
    let html =
        format!("<html><head><title>Broken</head><body><div>{PARAGRAPH}</div></body></html>");
    let result = analyze(&html);
    assert_eq!(result.title, "");
    assert_eq!(result.content_text, PARAGRAPH);
}

#[test]
fn plain_text_without_markup_is_one_block() {
    assert_eq!(analyze(PARAGRAPH).content_text, PARAGRAPH);
}

#[test]
fn multibyte_text_is_counted_by_characters() {
    // 40 CJK characters: 120 bytes but only 40 characters, below the minimum.
    let html = format!("<div>{}</div>", "漢字".repeat(20));
    assert_eq!(analyze(&html).content_text, "");
}

#[test]
fn large_document_completes_quickly() {
    let block = format!("<div><a href=\"/x\">nav</a></div><div>{PARAGRAPH}</div>");
    let html = block.repeat(2_000);

    let start = Instant::now();
    let result = analyze(&html);
    assert!(start.elapsed() < Duration::from_secs(10));
    assert!(result.content_text.starts_with(PARAGRAPH));
}
