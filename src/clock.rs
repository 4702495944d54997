//! Sources of the current instant, and the timestamp shapes accepted by
//! [`Duration::between`](crate::Duration::between) and friends.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

/// Provides the current instant as milliseconds since the unix epoch.
///
/// [`Duration::since`](crate::Duration::since) and [`Duration::until`](crate::Duration::until)
/// read the [`SystemClock`]. Their `_on` variants accept any clock, which is how
/// tests pin the current instant. Plain functions returning `i64` are clocks too.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// The wall clock of the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        trace!(now, "read system clock");
        now
    }
}

/// A clock that is stuck at the given epoch milliseconds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// A point in time that can be expressed as milliseconds since the unix epoch.
///
/// Plain integers are epoch milliseconds, so unsuffixed literals work:
/// `Duration::between(1_000, 4_000)`.
pub trait Timestamp {
    fn epoch_millis(&self) -> f64;
}

impl Timestamp for i64 {
    fn epoch_millis(&self) -> f64 {
        *self as f64
    }
}

impl Timestamp for i32 {
    fn epoch_millis(&self) -> f64 {
        f64::from(*self)
    }
}

impl Timestamp for u32 {
    fn epoch_millis(&self) -> f64 {
        f64::from(*self)
    }
}

impl Timestamp for u64 {
    fn epoch_millis(&self) -> f64 {
        *self as f64
    }
}

impl Timestamp for f64 {
    fn epoch_millis(&self) -> f64 {
        *self
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn epoch_millis(&self) -> f64 {
        self.timestamp_millis() as f64
    }
}

/// Naive datetimes are taken to be in UTC.
impl Timestamp for NaiveDateTime {
    fn epoch_millis(&self) -> f64 {
        Utc.from_utc_datetime(self).timestamp_millis() as f64
    }
}

impl Timestamp for SystemTime {
    fn epoch_millis(&self) -> f64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_millis() as f64,
            Err(before) => -(before.duration().as_millis() as f64),
        }
    }
}

impl<T: Timestamp + ?Sized> Timestamp for &T {
    fn epoch_millis(&self) -> f64 {
        (**self).epoch_millis()
    }
}
