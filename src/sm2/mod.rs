//! SM-2 scheduling core
//!
//! The classic SuperMemo-2 recurrence: each item carries an easiness factor
//! (>= 1.3) and a review interval; successful reviews climb a fixed
//! short-interval ladder (1 day, then 6) before growing multiplicatively by
//! the easiness factor, and failures reset the ladder.
//!
//! Reference: <https://www.supermemo.com/en/blog/application-of-a-computer-to-improve-the-results-obtained-in-working-with-the-supermemo-method>

mod algorithm;
mod scheduler;

pub use algorithm::{
    due_offset,
    grown_interval,
    is_successful,
    next_easiness_factor,
    DEFAULT_EASINESS_FACTOR,
    MIN_EASINESS_FACTOR,
    SUCCESS_THRESHOLD,
};

pub use scheduler::{Scheduler, DEFAULT_CONSECUTIVE_CORRECT_INTERVALS};
