//! # sm2-scheduler
//!
//! Spaced-repetition scheduling in the SM-2 family: given scored recall
//! events for memorized items, compute each item's next review interval,
//! easiness factor, and due date.
//!
//! - **Item**: per-card scheduling state (streak, easiness factor, interval,
//!   due date), mutated only by the scheduler
//! - **Session**: folds scored [`Review`]s into per-item statistics with a
//!   sticky lapse flag, so a mid-session stumble followed by eventual success
//!   restarts the short-interval ladder without an ease penalty
//! - **Scheduler**: the SM-2 recurrence plus due-date projection, with a
//!   configurable streak-to-interval override table
//! - **Clock**: injectable current-instant capability for deterministic
//!   replay
//!
//! Persistence, card content, and notification delivery belong to the host
//! application; this crate is a purely in-process computational core.
//!
//! ## Quick start
//!
//! ```rust
//! use sm2_scheduler::{Item, Review, Scheduler, Session};
//!
//! let mut scheduler = Scheduler::new();
//! let item = Item::new();
//! let id = item.id;
//! scheduler.add_item(item);
//!
//! // One study sitting: the item was recalled perfectly.
//! let mut session = Session::new();
//! session.apply_review(Review::new(id, 5));
//! scheduler.apply_session(&session);
//!
//! let item = scheduler.item(id).unwrap();
//! assert_eq!(item.interval, 1.0); // first rung of the SM-2 ladder
//! assert!(item.due_date.is_some());
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod clock;
pub mod item;
pub mod session;
pub mod sm2;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use clock::{Clock, ManualClock, SystemClock};
pub use item::{Item, ItemId};
pub use session::{Review, Session, SessionStatistics};
pub use sm2::{
    Scheduler, DEFAULT_CONSECUTIVE_CORRECT_INTERVALS, DEFAULT_EASINESS_FACTOR,
    MIN_EASINESS_FACTOR, SUCCESS_THRESHOLD,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Clock, Item, ItemId, ManualClock, Review, Scheduler, Session, SessionStatistics,
        SystemClock,
    };
}
