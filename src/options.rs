//! Configuration options for content extraction.
//!
//! `Options` holds the scoring parameters for one analysis. Defaults are
//! fixed constants; callers change any subset with struct update syntax or
//! with an [`OptionOverrides`] overlay, which always produces a fresh value
//! and never touches the defaults it was applied to.

use regex::Regex;

use crate::error::Result;
use crate::patterns::{PUNCTUATIONS, WASTE_EXPRESSIONS};

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use extractcontent::Options;
///
/// let options = Options {
///     threshold: 60.0,
///     min_length: 40,
///     ..Options::default()
/// };
/// assert_eq!(options.decay_factor, 0.73);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Score a block (or cluster continuation) must exceed to count as body text.
    ///
    /// Default: `100.0`
    pub threshold: f64,

    /// Minimum length, in characters, of a block's non-link text for it to be scored.
    ///
    /// Default: `80`
    pub min_length: usize,

    /// Positional decay applied after every scored block, in `(0, 1)`.
    ///
    /// Smaller values favour blocks near the top of the document.
    ///
    /// Default: `0.73`
    pub decay_factor: f64,

    /// Continuity factor, greater than 1.
    ///
    /// Larger values make it harder for a block to continue the current cluster
    /// after a gap.
    ///
    /// Default: `1.62`
    pub continuous_factor: f64,

    /// Score added per punctuation mark in a block's non-link text.
    ///
    /// Default: `10.0`
    pub punctuation_weight: f64,

    /// Pattern counting punctuation marks.
    ///
    /// Default: Japanese `、。，．！？` plus `.`, `,`, `!` and `?` in sentence position.
    pub punctuations: Regex,

    /// Pattern flagging footer and legal boilerplate; each hit penalises the block.
    ///
    /// Default: `Copyright|All Rights Reserved`, case-insensitive.
    pub waste_expressions: Regex,

    /// Log every scored block at debug level.
    ///
    /// Default: `false`
    pub debug: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            min_length: 80,
            decay_factor: 0.73,
            continuous_factor: 1.62,
            punctuation_weight: 10.0,
            punctuations: PUNCTUATIONS.clone(),
            waste_expressions: WASTE_EXPRESSIONS.clone(),
            debug: false,
        }
    }
}

impl Options {
    /// Replaces the punctuation pattern with a compiled `pattern`.
    pub fn with_punctuations(mut self, pattern: &str) -> Result<Self> {
        self.punctuations = Regex::new(pattern)?;
        Ok(self)
    }

    /// Replaces the waste expression pattern with a compiled `pattern`.
    pub fn with_waste_expressions(mut self, pattern: &str) -> Result<Self> {
        self.waste_expressions = Regex::new(pattern)?;
        Ok(self)
    }
}

/// A partial set of options layered over a base [`Options`] value.
///
/// Unset fields keep the base value.
///
/// # Example
///
/// ```rust
/// use extractcontent::{OptionOverrides, Options};
///
/// let defaults = Options::default();
/// let overrides = OptionOverrides {
///     min_length: Some(20),
///     ..OptionOverrides::default()
/// };
/// let effective = overrides.apply_to(&defaults);
/// assert_eq!(effective.min_length, 20);
/// assert_eq!(defaults.min_length, 80);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub threshold: Option<f64>,
    pub min_length: Option<usize>,
    pub decay_factor: Option<f64>,
    pub continuous_factor: Option<f64>,
    pub punctuation_weight: Option<f64>,
    pub punctuations: Option<Regex>,
    pub waste_expressions: Option<Regex>,
    pub debug: Option<bool>,
}

impl OptionOverrides {
    /// Builds a new `Options` from `base` with every set field replaced.
    #[must_use]
    pub fn apply_to(&self, base: &Options) -> Options {
        Options {
            threshold: self.threshold.unwrap_or(base.threshold),
            min_length: self.min_length.unwrap_or(base.min_length),
            decay_factor: self.decay_factor.unwrap_or(base.decay_factor),
            continuous_factor: self.continuous_factor.unwrap_or(base.continuous_factor),
            punctuation_weight: self.punctuation_weight.unwrap_or(base.punctuation_weight),
            punctuations: self
                .punctuations
                .clone()
                .unwrap_or_else(|| base.punctuations.clone()),
            waste_expressions: self
                .waste_expressions
                .clone()
                .unwrap_or_else(|| base.waste_expressions.clone()),
            debug: self.debug.unwrap_or(base.debug),
        }
    }

    /// True if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.threshold.is_none()
            && self.min_length.is_none()
            && self.decay_factor.is_none()
            && self.continuous_factor.is_none()
            && self.punctuation_weight.is_none()
            && self.punctuations.is_none()
            && self.waste_expressions.is_none()
            && self.debug.is_none()
    }
}
