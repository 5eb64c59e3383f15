//! Timestamp value object for immutable points in time.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment, truncated to the
    /// microsecond precision Postgres `TIMESTAMPTZ` stores.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(6))
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn now_is_not_before_an_earlier_instant() {
        let earlier = Timestamp::from_datetime(Utc::now() - Duration::seconds(5));
        let now = Timestamp::now();
        assert!(earlier.is_before(&now));
        assert!(!now.is_before(&earlier));
    }

    #[test]
    fn now_has_microsecond_precision() {
        for _ in 0..100 {
            let nanos = Timestamp::now().as_datetime().timestamp_subsec_nanos();
            assert_eq!(nanos % 1_000, 0);
        }
    }

    #[test]
    fn round_trips_inner_datetime() {
        let dt = Utc::now();
        assert_eq!(Timestamp::from(dt).as_datetime(), &dt);
    }
}
