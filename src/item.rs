//! Item - per-card learning state
//!
//! An [`Item`] carries everything the recurrence needs to schedule the next
//! review: the success streak, the easiness factor, the current interval,
//! and the projected due date. Content (front/back, media, decks) lives in
//! the owning application; this crate only sees the scheduling state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sm2::DEFAULT_EASINESS_FACTOR;

// ============================================================================
// ITEM ID
// ============================================================================

/// Stable handle for an item.
///
/// All set and map membership in the crate is keyed on the id, never on the
/// item's field values, so two items that happen to share scheduling state
/// remain distinct.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh unique id (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ITEM
// ============================================================================

/// Scheduling state for one memorized item.
///
/// Mutated exclusively by the scheduler; the observable outputs are
/// `consecutive_correct`, `easiness_factor`, `interval`, and `due_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable unique identifier.
    pub id: ItemId,
    /// Successful reviews in a row since the last reset.
    pub consecutive_correct: u32,
    /// SM-2 easiness factor; kept at or above 1.3 by the scheduler.
    pub easiness_factor: f64,
    /// Days until the next review; fractional intervals are allowed.
    pub interval: f64,
    /// When the item next becomes eligible for review. `None` until the
    /// item has been scheduled at least once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// When the item was last reviewed. Maintained by the owning
    /// application, never written by the scheduler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Item {
    /// Create a new item with a generated id and SM-2 defaults.
    pub fn new() -> Self {
        Self::with_id(ItemId::new())
    }

    /// Create an item with a caller-supplied id, e.g. when rehydrating
    /// persisted state.
    pub fn with_id(id: ItemId) -> Self {
        Self {
            id,
            consecutive_correct: 0,
            easiness_factor: DEFAULT_EASINESS_FACTOR,
            interval: 0.0,
            due_date: None,
            last_reviewed: None,
        }
    }

    /// Whether the item is due at the given instant. An item that has never
    /// been scheduled is always due.
    pub fn is_due_at(&self, instant: DateTime<Utc>) -> bool {
        self.due_date.map(|due| due <= instant).unwrap_or(true)
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_items_get_unique_ids() {
        let a = Item::new();
        let b = Item::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_item_has_sm2_defaults() {
        let item = Item::new();
        assert_eq!(item.consecutive_correct, 0);
        assert_eq!(item.easiness_factor, DEFAULT_EASINESS_FACTOR);
        assert_eq!(item.interval, 0.0);
        assert!(item.due_date.is_none());
        assert!(item.last_reviewed.is_none());
    }

    #[test]
    fn unscheduled_item_is_always_due() {
        let item = Item::new();
        assert!(item.is_due_at(Utc::now()));
    }

    #[test]
    fn scheduled_item_is_due_once_the_instant_passes() {
        let now = Utc::now();
        let mut item = Item::new();
        item.due_date = Some(now + Duration::days(1));

        assert!(!item.is_due_at(now));
        assert!(item.is_due_at(now + Duration::days(1)));
        assert!(item.is_due_at(now + Duration::days(2)));
    }

    #[test]
    fn serde_roundtrip_omits_unset_dates() {
        let item = Item::new();
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("dueDate"));
        assert!(!json.contains("lastReviewed"));

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert_eq!(back.easiness_factor, item.easiness_factor);
        assert!(back.due_date.is_none());
    }
}
