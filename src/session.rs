//! Session - accumulation of scored reviews within one study sitting
//!
//! A [`Session`] folds individual [`Review`]s into per-item
//! [`SessionStatistics`]: the most recent score and a sticky lapse flag.
//! The scheduler consumes the finished session in one pass; the session
//! itself is transient and never persisted across sittings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::sm2::SUCCESS_THRESHOLD;

// ============================================================================
// REVIEW
// ============================================================================

/// One scored recall event for an item.
///
/// Scores are nominally 0-5 (SM-2 quality grades), but the crate performs no
/// range validation: out-of-range scores propagate through the formulas
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// The item that was reviewed.
    pub item: ItemId,
    /// How well it was recalled, 0 (blackout) to 5 (perfect).
    pub score: i32,
}

impl Review {
    /// Create a review of the given item with the given score.
    pub fn new(item: ItemId, score: i32) -> Self {
        Self { item, score }
    }
}

// ============================================================================
// SESSION STATISTICS
// ============================================================================

/// Rollup of all reviews of one item within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatistics {
    /// True once any review of the item scored below the success threshold.
    /// Sticky: never reverts to false within the same session.
    pub lapsed_during_session: bool,
    /// Score of the item's latest review in the session.
    pub most_recent_score: i32,
}

impl SessionStatistics {
    /// Construct statistics directly, e.g. when driving
    /// [`Scheduler::update_item_interval`](crate::Scheduler::update_item_interval)
    /// without a full session.
    pub fn new(lapsed_during_session: bool, most_recent_score: i32) -> Self {
        Self {
            lapsed_during_session,
            most_recent_score,
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// One study sitting: a mapping from item to its accumulated statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    statistics: HashMap<ItemId, SessionStatistics>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a review into the session.
    ///
    /// Lazily creates the statistics entry for the item, overwrites the most
    /// recent score, and latches the lapse flag if the score fell below the
    /// success threshold. The same item may be reviewed any number of times
    /// within one session.
    pub fn apply_review(&mut self, review: Review) {
        let stats = self.statistics.entry(review.item).or_default();
        stats.most_recent_score = review.score;
        if review.score < SUCCESS_THRESHOLD {
            stats.lapsed_during_session = true;
        }
    }

    /// Read-only view of the accumulated per-item statistics.
    pub fn item_statistics(&self) -> &HashMap<ItemId, SessionStatistics> {
        &self.statistics
    }

    /// Statistics for a single item, if it was reviewed this session.
    pub fn statistics_for(&self, item: ItemId) -> Option<&SessionStatistics> {
        self.statistics.get(&item)
    }

    /// Number of distinct items reviewed this session.
    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    /// Whether no reviews have been applied yet.
    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
