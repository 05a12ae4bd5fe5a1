//! Clock - the injectable current-instant capability
//!
//! The scheduler never reads the wall clock directly. It consumes time
//! through the [`Clock`] trait, so sessions can be replayed deterministically
//! and tests can pin or step the instant they run at.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

/// Source of the current instant.
///
/// Object-safe so the scheduler can hold any implementation behind a
/// `Box<dyn Clock>`.
pub trait Clock: fmt::Debug {
    /// The current instant, in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation backed by [`Utc::now`].
///
/// The only place in the crate that touches the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Handles are cheap clones sharing one instant: keep one handle, give
/// another to the scheduler, then [`set`](ManualClock::set) or
/// [`advance`](ManualClock::advance) between sessions to replay history.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock pinned at the given instant.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Pin the clock to a new instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    /// Move the clock forward (or backward, with a negative duration).
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_tracks_utc_now() {
        let clock = SystemClock;
        let before = Utc::now();
        let observed = clock.now();
        let after = Utc::now();
        assert!(before <= observed && observed <= after);
    }

    #[test]
    fn manual_clock_stays_pinned() {
        let instant = Utc::now();
        let clock = ManualClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn manual_clock_handles_share_state() {
        let instant = Utc::now();
        let clock = ManualClock::new(instant);
        let handle = clock.clone();

        clock.advance(Duration::hours(6));
        assert_eq!(handle.now(), instant + Duration::hours(6));

        handle.set(instant);
        assert_eq!(clock.now(), instant);
    }
}
