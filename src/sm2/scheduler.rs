//! Scheduler - applies session outcomes to the working set of items

use std::collections::HashMap;

use crate::clock::{Clock, SystemClock};
use crate::item::{Item, ItemId};
use crate::session::{Session, SessionStatistics};

use super::algorithm::{due_offset, grown_interval, is_successful, next_easiness_factor};

/// Classic SM-2 bootstrap ladder: first success waits one day, second waits
/// six. Process-wide immutable data, consulted beneath any caller-supplied
/// override table.
pub const DEFAULT_CONSECUTIVE_CORRECT_INTERVALS: [(u32, f64); 2] = [(1, 1.0), (2, 6.0)];

/// Owns the scheduling configuration and the working set of items, and
/// folds finished [`Session`]s into them.
///
/// Long-lived and application-scoped. Single-threaded by design: the working
/// set and per-item state are plain mutable data with no internal locking.
#[derive(Debug)]
pub struct Scheduler {
    /// Caller-supplied streak-length -> fixed interval overrides, consulted
    /// before [`DEFAULT_CONSECUTIVE_CORRECT_INTERVALS`].
    interval_overrides: HashMap<u32, f64>,
    /// Working set, keyed by item id.
    items: HashMap<ItemId, Item>,
    clock: Box<dyn Clock>,
}

impl Scheduler {
    /// Scheduler on the system clock with no interval overrides.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Scheduler on an injected clock, for deterministic replay.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            interval_overrides: HashMap::new(),
            items: HashMap::new(),
            clock,
        }
    }

    /// Builder-style override table, e.g.
    /// `Scheduler::new().with_intervals([(1, 1.0), (2, 2.0)].into())`.
    pub fn with_intervals(mut self, overrides: HashMap<u32, f64>) -> Self {
        self.interval_overrides = overrides;
        self
    }

    /// The current override table.
    pub fn interval_overrides(&self) -> &HashMap<u32, f64> {
        &self.interval_overrides
    }

    /// Replace the override table. Takes effect for all subsequent sessions.
    pub fn set_interval_overrides(&mut self, overrides: HashMap<u32, f64>) {
        self.interval_overrides = overrides;
    }

    // ========================================================================
    // WORKING SET
    // ========================================================================

    /// Insert an item into the working set.
    ///
    /// Idempotent per id: re-adding an already-present item keeps the
    /// existing entry, and the set grows exactly once per distinct id.
    pub fn add_item(&mut self, item: Item) {
        self.items.entry(item.id).or_insert(item);
    }

    /// The item with the given id, if present.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// All items in the working set, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of items in the working set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the working set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // SESSION APPLICATION
    // ========================================================================

    /// Fold a finished session into the working set.
    ///
    /// For each item the session touched: update its interval, streak, and
    /// easiness factor from the session statistics, then project the new due
    /// date from the injected clock. Items referenced by the session but not
    /// present in the working set are skipped with a warning.
    ///
    /// Not transactional: if the caller drops out partway, already-processed
    /// items keep their new state.
    pub fn apply_session(&mut self, session: &Session) {
        for (id, statistics) in session.item_statistics() {
            let Some(mut item) = self.items.remove(id) else {
                tracing::warn!(item = %id, "session references an item outside the working set");
                continue;
            };
            self.update_item_interval(&mut item, statistics);
            self.update_item_schedule(&mut item);
            self.items.insert(*id, item);
        }
    }

    /// Apply one session's statistics to an item's interval, streak, and
    /// easiness factor.
    ///
    /// Three branches, in priority order:
    ///
    /// 1. The item lapsed during the session but its most recent review
    ///    succeeded: restart the short-interval ladder (streak 1) without
    ///    touching the easiness factor.
    /// 2. The most recent review failed: interval and streak drop to zero,
    ///    easiness factor untouched.
    /// 3. The review succeeded with no lapse: extend the streak, update the
    ///    easiness factor, and take the fixed ladder interval for the new
    ///    streak length, or grow the previous interval multiplicatively once
    ///    the ladder runs out.
    pub fn update_item_interval(&self, item: &mut Item, statistics: &SessionStatistics) {
        if statistics.lapsed_during_session && is_successful(statistics.most_recent_score) {
            item.consecutive_correct = 1;
            // lookup(1) is always defined via the default ladder
            item.interval = self
                .consecutive_correct_interval(1)
                .unwrap_or(DEFAULT_CONSECUTIVE_CORRECT_INTERVALS[0].1);
            tracing::debug!(item = %item.id, interval = item.interval, "lapse recovered, ladder restarted");
        } else if !is_successful(statistics.most_recent_score) {
            item.interval = 0.0;
            item.consecutive_correct = 0;
            tracing::debug!(item = %item.id, score = statistics.most_recent_score, "review failed, interval reset");
        } else {
            item.consecutive_correct += 1;
            item.easiness_factor =
                next_easiness_factor(item.easiness_factor, statistics.most_recent_score);
            item.interval = self
                .consecutive_correct_interval(item.consecutive_correct)
                .unwrap_or_else(|| grown_interval(item.interval, item.easiness_factor));
            tracing::debug!(
                item = %item.id,
                streak = item.consecutive_correct,
                easiness_factor = item.easiness_factor,
                interval = item.interval,
                "review succeeded"
            );
        }
    }

    /// Project the item's due date from its interval and the current instant.
    ///
    /// The interval splits into whole days plus the fractional remainder
    /// rounded to hours: an interval of 1.5 due-dates one day twelve hours
    /// out.
    pub fn update_item_schedule(&self, item: &mut Item) {
        item.due_date = Some(self.clock.now() + due_offset(item.interval));
    }

    /// Fixed interval for a streak length: the override table first, then
    /// the SM-2 default ladder, else `None` (multiplicative growth applies).
    pub fn consecutive_correct_interval(&self, consecutive_correct: u32) -> Option<f64> {
        self.interval_overrides
            .get(&consecutive_correct)
            .copied()
            .or_else(|| {
                DEFAULT_CONSECUTIVE_CORRECT_INTERVALS
                    .iter()
                    .find(|(streak, _)| *streak == consecutive_correct)
                    .map(|(_, interval)| *interval)
            })
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
