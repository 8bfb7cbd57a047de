//! Core content extraction pipeline.
//!
//! Preprocess the markup, segment it into blocks, score and cluster the
//! blocks, then normalize the winning cluster's text.

use crate::cluster::ClusterScan;
use crate::html_processing::{
    apply_ad_sections, eliminate_useless_tags, is_frame_or_redirect, normalize_headings,
    split_head,
};
use crate::normalize::extract_title;
use crate::options::Options;
use crate::result::ExtractResult;
use crate::segment::split_blocks;

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options) -> ExtractResult {
    log::trace!("starting content extraction ({} bytes)", html.len());

    if is_frame_or_redirect(html) {
        log::debug!("frameset or redirect page, no body to extract");
        return ExtractResult {
            content_text: String::new(),
            title: extract_title(html),
        };
    }

    let (title, body) = split_head(html);
    let body = apply_ad_sections(body);
    let body = eliminate_useless_tags(&body);
    let body = normalize_headings(&body, &title);

    let mut scan = ClusterScan::new(options);
    for block in split_blocks(&body) {
        scan.push(block);
    }
    let best = scan.finish();

    log::trace!(
        "selected cluster of {} block(s), score {:.3}",
        best.blocks.len(),
        best.score
    );

    ExtractResult {
        content_text: best.text(),
        title,
    }
}
