//! Per-block scoring.
//!
//! A block's base score is the length of its non-link text plus a bonus per
//! punctuation mark. Blocks mentioning footer boilerplate or carrying
//! affiliate links are penalised geometrically.

use crate::options::Options;
use crate::patterns::AFFILIATE_LINK;

/// Multiplier applied once per unit of waste rate.
pub const WASTE_PENALTY_BASE: f64 = 0.72;

/// Length plus weighted punctuation of a block's non-link text.
///
/// Positional decay and penalties are applied by the caller.
#[must_use]
pub fn text_score(notlinked: &str, options: &Options) -> f64 {
    let length = notlinked.chars().count();
    let punctuation = options.punctuations.find_iter(notlinked).count();
    length as f64 + punctuation as f64 * options.punctuation_weight
}

/// How boilerplate-like a block is.
///
/// Each waste expression counts one, each affiliate link counts a half.
#[must_use]
pub fn waste_rate(block: &str, options: &Options) -> f64 {
    let waste = options.waste_expressions.find_iter(block).count();
    let affiliate = AFFILIATE_LINK.find_iter(block).count();
    waste as f64 + affiliate as f64 / 2.0
}

/// Score multiplier for a waste rate; `1.0` when there is no waste.
#[must_use]
pub fn waste_penalty(rate: f64) -> f64 {
    if rate > 0.0 {
        WASTE_PENALTY_BASE.powf(rate)
    } else {
        1.0
    }
}
