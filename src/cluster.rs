//! Block clustering.
//!
//! Blocks are fed in document order to a [`ClusterScan`], which keeps the
//! positional decay, the continuity weight and the cluster being built. A
//! good block right after another good block extends the current cluster;
//! a good block after a gap starts a new one. When the scan finishes, the
//! cluster with the highest aggregate score is the article body.

use crate::link_density::eliminate_link;
use crate::normalize::strip_tags;
use crate::options::Options;
use crate::scoring::{text_score, waste_penalty, waste_rate};

/// Characters of block text shown in the debug trace.
const DEBUG_PREVIEW_CHARS: usize = 100;

/// A run of accepted blocks and its aggregate score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cluster<'h> {
    pub blocks: Vec<&'h str>,
    pub score: f64,
}

impl Cluster<'_> {
    /// The cluster's blocks joined by newlines, still as markup.
    #[must_use]
    pub fn html(&self) -> String {
        self.blocks.join("\n")
    }

    /// The cluster's normalized text.
    #[must_use]
    pub fn text(&self) -> String {
        strip_tags(&self.html())
    }
}

/// What a scan did with one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockVerdict {
    /// Non-link text shorter than `min_length`; not scored.
    TooShort,
    /// Appended to the current cluster with this continuity-adjusted score.
    Extended(f64),
    /// Closed the current cluster and started a new one with this score.
    Restarted(f64),
    /// Scored but below the threshold.
    Dropped,
}

/// Scan state threaded through the block sequence.
#[derive(Debug)]
pub struct ClusterScan<'h, 'o> {
    options: &'o Options,
    factor: f64,
    continuous: f64,
    current: Cluster<'h>,
    closed: Vec<Cluster<'h>>,
}

impl<'h, 'o> ClusterScan<'h, 'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            factor: 1.0,
            continuous: 1.0,
            current: Cluster::default(),
            closed: Vec::new(),
        }
    }

    /// Current positional decay multiplier.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Current continuity multiplier.
    #[must_use]
    pub fn continuous(&self) -> f64 {
        self.continuous
    }

    /// The cluster being built.
    #[must_use]
    pub fn current(&self) -> &Cluster<'h> {
        &self.current
    }

    /// Clusters closed so far, in document order.
    #[must_use]
    pub fn closed(&self) -> &[Cluster<'h>] {
        &self.closed
    }

    /// Scores one block and updates the scan state.
    pub fn push(&mut self, block: &'h str) -> BlockVerdict {
        let options = self.options;

        if !self.current.blocks.is_empty() {
            self.continuous /= options.continuous_factor;
        }

        let notlinked = eliminate_link(block);
        let notlinked_len = notlinked.chars().count();
        if notlinked_len < options.min_length {
            return BlockVerdict::TooShort;
        }

        let mut score = text_score(&notlinked, options) * self.factor;
        self.factor *= options.decay_factor;

        let rate = waste_rate(block, options);
        if rate > 0.0 {
            score *= waste_penalty(rate);
        }
        let adjusted = score * self.continuous;

        if options.debug {
            let preview: String = strip_tags(block).chars().take(DEBUG_PREVIEW_CHARS).collect();
            log::debug!(
                "----- {score:.6}*{:.6}={adjusted:.6} {notlinked_len}\n{preview}",
                self.continuous
            );
        }

        if adjusted > options.threshold {
            self.current.blocks.push(block);
            self.current.score += adjusted;
            self.continuous = options.continuous_factor;
            BlockVerdict::Extended(adjusted)
        } else if score > options.threshold {
            let finished = std::mem::replace(
                &mut self.current,
                Cluster {
                    blocks: vec![block],
                    score,
                },
            );
            self.closed.push(finished);
            self.continuous = options.continuous_factor;
            BlockVerdict::Restarted(score)
        } else {
            BlockVerdict::Dropped
        }
    }

    /// Closes the last cluster and returns the best one.
    ///
    /// The last cluster is closed even when empty. On equal scores the
    /// earliest cluster wins.
    #[must_use]
    pub fn finish(mut self) -> Cluster<'h> {
        self.closed.push(self.current);
        log::trace!("selecting among {} cluster(s)", self.closed.len());

        let mut clusters = self.closed.into_iter();
        let mut best = clusters.next().unwrap_or_default();
        for cluster in clusters {
            if cluster.score > best.score {
                best = cluster;
            }
        }
        best
    }
}
