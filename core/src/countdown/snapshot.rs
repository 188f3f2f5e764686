//! Remaining-time decomposition
//!
//! `compute` is the pure core of the countdown: one subtraction, then floor
//! division into days, hours, minutes and seconds.

use time::OffsetDateTime;

const MS_PER_SECOND: i128 = 1_000;
const MS_PER_MINUTE: i128 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i128 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i128 = 24 * MS_PER_HOUR;

/// Remaining time until the target, as produced by a single tick.
///
/// While `reached` is false the four fields recombine to the whole seconds
/// left. Once reached they are all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountdownSnapshot {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub reached: bool,
}

impl CountdownSnapshot {
    /// The terminal snapshot: everything pinned to zero.
    pub const REACHED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        reached: true,
    };

    /// Whole seconds represented by the four fields
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    fn from_millis(remaining_ms: i128) -> Self {
        let days = remaining_ms / MS_PER_DAY;
        let rest = remaining_ms % MS_PER_DAY;
        let hours = rest / MS_PER_HOUR;
        let rest = rest % MS_PER_HOUR;
        let minutes = rest / MS_PER_MINUTE;
        let rest = rest % MS_PER_MINUTE;
        let seconds = rest / MS_PER_SECOND;

        Self {
            // OffsetDateTime spans at most ~20k years, so days fits easily
            days: days as u64,
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            reached: false,
        }
    }
}

/// Compute the snapshot for `now` against `target`.
///
/// Total over all inputs. Any non-positive remaining duration yields
/// [`CountdownSnapshot::REACHED`]; a positive remainder below one second counts
/// as still running with all fields zero.
pub fn compute(now: OffsetDateTime, target: OffsetDateTime) -> CountdownSnapshot {
    let remaining = target - now;
    if !remaining.is_positive() {
        return CountdownSnapshot::REACHED;
    }
    CountdownSnapshot::from_millis(remaining.whole_milliseconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::datetime;

    fn launch() -> OffsetDateTime {
        datetime!(2025-12-21 19:00:00 +05:30)
    }

    #[test]
    fn decomposes_into_units() {
        let offset = Duration::days(1)
            + Duration::hours(2)
            + Duration::minutes(3)
            + Duration::seconds(4);
        let snapshot = compute(launch() - offset, launch());
        assert_eq!(
            snapshot,
            CountdownSnapshot {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4,
                reached: false,
            }
        );
    }

    #[test]
    fn exact_target_is_reached() {
        assert_eq!(compute(launch(), launch()), CountdownSnapshot::REACHED);
    }

    #[test]
    fn far_past_target_never_goes_negative() {
        let snapshot = compute(launch() + Duration::days(10_000), launch());
        assert_eq!(snapshot, CountdownSnapshot::REACHED);
    }

    #[test]
    fn partial_seconds_are_floored() {
        let now = launch() - Duration::milliseconds(59_999);
        let snapshot = compute(now, launch());
        assert!(!snapshot.reached);
        assert_eq!((snapshot.minutes, snapshot.seconds), (0, 59));

        let now = launch() - Duration::milliseconds(1);
        let snapshot = compute(now, launch());
        assert!(!snapshot.reached);
        assert_eq!(snapshot.total_seconds(), 0);
    }

    #[test]
    fn observer_offset_does_not_matter() {
        // Same instant expressed in UTC and in IST
        let now_utc = datetime!(2025-12-21 12:30:00 UTC);
        let now_ist = datetime!(2025-12-21 18:00:00 +05:30);
        assert_eq!(compute(now_utc, launch()), compute(now_ist, launch()));
        assert_eq!(compute(now_utc, launch()).hours, 1);
    }

    #[test]
    fn recombines_to_floor_of_remaining_seconds() {
        // Sweep a spread of offsets including unit boundaries
        let offsets_ms: [i64; 12] = [
            1,
            999,
            1_000,
            59_999,
            60_000,
            3_599_999,
            3_600_000,
            86_399_999,
            86_400_000,
            90_061_001,
            1_234_567_890,
            864_000_000_000,
        ];
        for ms in offsets_ms {
            let now = launch() - Duration::milliseconds(ms);
            let snapshot = compute(now, launch());
            assert!(!snapshot.reached, "{ms}ms should still be counting");
            assert_eq!(snapshot.total_seconds(), (ms / 1000) as u64, "{ms}ms");
            assert!(snapshot.hours < 24);
            assert!(snapshot.minutes < 60);
            assert!(snapshot.seconds < 60);
        }
    }

    #[test]
    fn compute_is_pure() {
        let now = launch() - Duration::hours(5);
        assert_eq!(compute(now, launch()), compute(now, launch()));
    }
}
