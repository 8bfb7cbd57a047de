//! Link density testing for blocks.
//!
//! A block is only worth scoring for the text that is *not* inside links.
//! Blocks whose visible text is dominated by anchors, and blocks that are
//! essentially a list of links (navigation, archives, tag clouds), are
//! reduced to no usable text at all.

use crate::normalize::strip_tags;
use crate::patterns::{FORM, HREF_LINK, LINK, LIST, LIST_ITEM, TAG, UNORDERED_LIST, WHITESPACE_RUN};

/// Characters of non-link text required per removed anchor.
const CHARS_PER_LINK: usize = 20;

/// Base divisor for the outside-list text allowance.
const LIST_TEXT_DIVISOR: usize = 45;

/// Returns the block's text with links and forms removed.
///
/// The result is empty when the remaining text is shorter than 20
/// characters per removed link, or when the block is a link list, so such
/// blocks fall below any minimum-length filter.
#[must_use]
pub fn eliminate_link(block: &str) -> String {
    let link_count = count_links(block);
    let notlinked = LINK.replace_all(block, "");
    let notlinked = FORM.replace_all(&notlinked, "");
    let notlinked = strip_tags(&notlinked);

    if notlinked.chars().count() < CHARS_PER_LINK * link_count || is_link_list(block) {
        return String::new();
    }
    notlinked
}

/// True if the block is mostly a list of links.
///
/// The first `ul`/`dl`/`ol` region is inspected. Text outside unordered and
/// definition lists must be short relative to the whole block; the
/// allowance grows with the share of list items that contain a link.
/// A block without any list is never a link list.
#[must_use]
pub fn is_link_list(block: &str) -> bool {
    let Some(list) = LIST.captures(block).and_then(|caps| caps.get(1)) else {
        return false;
    };

    let outside = UNORDERED_LIST.replace_all(block, "");
    let outside = TAG.replace_all(&outside, "");
    let outside = WHITESPACE_RUN.replace_all(&outside, " ");
    let outside_len = outside.chars().count();
    let block_len = block.chars().count();

    let items: Vec<&str> = LIST_ITEM.split(list.as_str()).skip(1).collect();
    let limit = match evaluate_list(&items) {
        Some(rate) => block_len as f64 / (LIST_TEXT_DIVISOR as f64 / rate),
        // No items: the divisor stays integral and the allowance is floored.
        None => (block_len / LIST_TEXT_DIVISOR) as f64,
    };

    outside_len as f64 <= limit
}

/// Rates how link-like a list is: `9 * (linked / total)^2 + 1`.
///
/// Returns `None` when there are no list items.
#[must_use]
pub fn evaluate_list(items: &[&str]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let hits = items.iter().filter(|item| HREF_LINK.is_match(item)).count();
    let ratio = hits as f64 / items.len() as f64;
    Some(9.0 * ratio.powi(2) + 1.0)
}

/// Number of anchor elements in the block.
#[must_use]
pub fn count_links(block: &str) -> usize {
    LINK.find_iter(block).count()
}
