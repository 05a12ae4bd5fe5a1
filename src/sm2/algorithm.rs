//! Pure SM-2 recurrence functions
//!
//! The formulas, free of any scheduler state, so they can be tested and
//! benchmarked in isolation:
//!
//! - Easiness factor update: `EF' = max(1.3, EF + (0.1 - (5-q)(0.08 + (5-q)0.02)))`
//! - Interval growth: `I' = round(I * EF')` once the fixed ladder is exhausted
//! - Due-date offset: whole days plus the fractional remainder rounded to hours

use chrono::Duration;

/// Floor for the easiness factor. SM-2 never lets an item's EF drop below
/// this, no matter how poorly it is scored.
pub const MIN_EASINESS_FACTOR: f64 = 1.3;

/// Easiness factor assigned to freshly created items.
pub const DEFAULT_EASINESS_FACTOR: f64 = 2.5;

/// Lowest score that counts as a successful recall. Scores below this mark
/// a lapse.
pub const SUCCESS_THRESHOLD: i32 = 3;

/// Whether a score counts as a successful recall.
pub fn is_successful(score: i32) -> bool {
    score >= SUCCESS_THRESHOLD
}

/// Updated easiness factor after a successful review with the given score.
///
/// Applies the SM-2 quality adjustment and clamps at
/// [`MIN_EASINESS_FACTOR`]. Out-of-range scores are not rejected; they flow
/// through the polynomial unchanged.
pub fn next_easiness_factor(easiness_factor: f64, score: i32) -> f64 {
    let miss = (5 - score) as f64;
    let adjusted = easiness_factor + (0.1 - miss * (0.08 + miss * 0.02));
    adjusted.max(MIN_EASINESS_FACTOR)
}

/// Next interval once the fixed ladder has no entry for the streak length.
///
/// Rounds half-up to a whole day, which intentionally discards any sub-day
/// fractional carry from the previous interval.
pub fn grown_interval(previous_interval: f64, easiness_factor: f64) -> f64 {
    (previous_interval * easiness_factor).round()
}

/// Offset from "now" to the due date for a possibly fractional interval.
///
/// The interval splits into whole days plus the fractional remainder
/// expressed in rounded hours, so an interval of 1.5 materializes as
/// 1 day 12 hours. Hour rounding can shift the due time by up to roughly
/// thirty minutes from the exact real-valued interval; accepted, bounded
/// drift.
pub fn due_offset(interval: f64) -> Duration {
    let whole_days = interval.floor();
    let hours = ((interval - whole_days) * 24.0).round();
    Duration::days(whole_days as i64) + Duration::hours(hours as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_score_raises_easiness_factor() {
        let ef = next_easiness_factor(2.5, 5);
        assert!((ef - 2.6).abs() < 1e-9);
    }

    #[test]
    fn score_four_leaves_easiness_factor_unchanged() {
        let ef = next_easiness_factor(2.5, 4);
        assert!((ef - 2.5).abs() < 1e-9);
    }

    #[test]
    fn score_three_lowers_easiness_factor() {
        let ef = next_easiness_factor(2.5, 3);
        assert!((ef - 2.36).abs() < 1e-9);
    }

    #[test]
    fn easiness_factor_never_drops_below_floor() {
        for score in 0..=5 {
            let ef = next_easiness_factor(MIN_EASINESS_FACTOR, score);
            assert!(ef >= MIN_EASINESS_FACTOR, "score {score} broke the floor");
        }
    }

    #[test]
    fn success_threshold_splits_scores() {
        assert!(!is_successful(2));
        assert!(is_successful(3));
        assert!(is_successful(5));
    }

    #[test]
    fn grown_interval_rounds_half_up() {
        assert_eq!(grown_interval(6.0, 2.8), 17.0);
        assert_eq!(grown_interval(17.0, 2.9), 49.0);
        assert_eq!(grown_interval(1.0, 2.5), 3.0);
    }

    #[test]
    fn due_offset_splits_days_and_hours() {
        assert_eq!(due_offset(1.0), Duration::days(1));
        assert_eq!(due_offset(1.5), Duration::days(1) + Duration::hours(12));
        assert_eq!(due_offset(0.25), Duration::hours(6));
        assert_eq!(due_offset(0.0), Duration::zero());
    }
}
