//! Block segmentation.
//!
//! The preprocessed markup is cut at container boundaries (`div`, `center`,
//! `td`) and at templated "posted"/plugin paragraphs. Each piece is a
//! candidate block for scoring.

use crate::normalize::has_only_tags;
use crate::patterns::BLOCK_DELIMITER;

/// Splits `html` into trimmed, non-empty blocks that contain some text.
///
/// Pieces made only of tags and `&nbsp;` are dropped here so they never
/// reach the scorer.
pub fn split_blocks(html: &str) -> impl Iterator<Item = &str> {
    BLOCK_DELIMITER
        .split(html)
        .filter(|piece| !piece.is_empty())
        .map(str::trim)
        .filter(|block| !has_only_tags(block))
}
