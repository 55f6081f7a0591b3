use chrono::{DateTime, Utc};
use crate::config::MAX_BUYERS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Whole units remaining until `deadline`. All zero once it has passed.
pub fn time_left(deadline: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let total = deadline.signed_duration_since(now).num_seconds();
    if total <= 0 {
        return TimeLeft::default();
    }
    TimeLeft {
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
    }
}

pub fn remaining_slots(buyers: u32) -> u32 {
    MAX_BUYERS.saturating_sub(buyers)
}

/// Share of the slots already sold, as a CSS width percentage.
pub fn sold_percent(buyers: u32) -> f64 {
    f64::from(buyers.min(MAX_BUYERS)) / f64::from(MAX_BUYERS) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_747_969_200 + secs, 0).unwrap()
    }

    #[test]
    fn splits_remaining_time_into_units() {
        let deadline = at(0);
        let now = deadline - Duration::days(2) - Duration::hours(3) - Duration::minutes(4) - Duration::seconds(5);
        assert_eq!(
            time_left(deadline, now),
            TimeLeft { days: 2, hours: 3, minutes: 4, seconds: 5 }
        );
    }

    #[test]
    fn partial_seconds_round_down() {
        let deadline = at(0);
        let now = deadline - Duration::milliseconds(1_999);
        assert_eq!(time_left(deadline, now).seconds, 1);
        let now = deadline - Duration::milliseconds(400);
        assert_eq!(time_left(deadline, now), TimeLeft::default());
    }

    #[test]
    fn reached_or_passed_deadline_is_all_zero() {
        assert_eq!(time_left(at(0), at(0)), TimeLeft::default());
        assert_eq!(time_left(at(0), at(1)), TimeLeft::default());
        assert_eq!(time_left(at(0), at(86_400 * 365)), TimeLeft::default());
    }

    #[test]
    fn remaining_slots_floor_at_zero() {
        assert_eq!(remaining_slots(0), 100);
        assert_eq!(remaining_slots(37), 63);
        assert_eq!(remaining_slots(100), 0);
        assert_eq!(remaining_slots(150), 0);
    }

    #[test]
    fn sold_percent_is_capped() {
        assert_eq!(sold_percent(0), 0.0);
        assert_eq!(sold_percent(25), 25.0);
        assert_eq!(sold_percent(100), 100.0);
        assert_eq!(sold_percent(250), 100.0);
    }
}
