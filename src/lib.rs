//! An immutable, signed duration with millisecond resolution.
//!
//! ```
//! use timespan::{Duration, Time, TimeUnit};
//!
//! let lunch = Duration::of(Time { minutes: 45.0, ..Time::default() });
//! assert!(lunch.is_less_than(Duration::ONE_HOUR));
//! assert_eq!(lunch.ceil_for(TimeUnit::Hours), Duration::ONE_HOUR);
//! assert_eq!(Duration::between(1_000, 4_000).seconds(), 3.0);
//! ```

pub use crate::clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use crate::error::{Error, Result};
pub use crate::hacks::DurationInMilliseconds;
pub use crate::time::Time;
pub use crate::unit::TimeUnit;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::trace;

mod clock;
mod error;
/// Whole millisecond storage and chrono conversions
mod hacks;
mod time;
mod unit;


/// A span of time in milliseconds.
///
/// Constructing from a number rounds it to the nearest millisecond, with ties
/// away from zero. [`multiply_by`](Duration::multiply_by) and
/// [`divide_by`](Duration::divide_by) do not round, so their result may carry
/// a fraction of a millisecond until the next rounding operation.
///
/// NaN and infinite inputs are not rejected. They produce a duration with
/// non-finite milliseconds that carries through all further arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "f64", into = "f64")
)]
pub struct Duration {
    millis: f64,
}

impl Duration {
    pub const ZERO: Duration = Duration { millis: 0.0 };
    pub const ONE_WEEK: Duration = Duration {
        millis: 604_800_000.0,
    };
    pub const ONE_DAY: Duration = Duration {
        millis: 86_400_000.0,
    };
    pub const ONE_HOUR: Duration = Duration {
        millis: 3_600_000.0,
    };
    pub const HALF_HOUR: Duration = Duration {
        millis: 1_800_000.0,
    };
    pub const FIVE_MINUTES: Duration = Duration { millis: 300_000.0 };
    pub const ONE_MINUTE: Duration = Duration { millis: 60_000.0 };
    pub const HALF_MINUTE: Duration = Duration { millis: 30_000.0 };
    pub const ONE_SECOND: Duration = Duration { millis: 1_000.0 };

    /// Creates a duration from a number of milliseconds, another duration,
    /// a [`Time`] record or a `(TimeUnit, f64)` pair.
    pub fn of(props: impl Into<Duration>) -> Self {
        props.into()
    }

    /// Rounds `millis` to the nearest integer.
    pub fn from_millis(millis: f64) -> Self {
        Self {
            millis: millis.round(),
        }
    }

    /// The duration from `past` until now, according to the system clock.
    pub fn since(past: impl Timestamp) -> Self {
        Self::since_on(&SystemClock, past)
    }

    /// The duration from now until `future`, according to the system clock.
    pub fn until(future: impl Timestamp) -> Self {
        Self::until_on(&SystemClock, future)
    }

    pub fn since_on<C: Clock + ?Sized>(clock: &C, past: impl Timestamp) -> Self {
        Self::between(past, clock.now_millis())
    }

    pub fn until_on<C: Clock + ?Sized>(clock: &C, future: impl Timestamp) -> Self {
        Self::between(clock.now_millis(), future)
    }

    /// `future - past`. Negative if `future` lies before `past`.
    pub fn between(past: impl Timestamp, future: impl Timestamp) -> Self {
        let future = Self::from_millis(future.epoch_millis());
        let duration = future.minus(past.epoch_millis());
        trace!(millis = duration.millis, "duration between");
        duration
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }

    pub fn seconds(&self) -> f64 {
        self.as_unit(TimeUnit::Seconds)
    }

    pub fn minutes(&self) -> f64 {
        self.as_unit(TimeUnit::Minutes)
    }

    pub fn hours(&self) -> f64 {
        self.as_unit(TimeUnit::Hours)
    }

    pub fn days(&self) -> f64 {
        self.as_unit(TimeUnit::Days)
    }

    /// The whole duration expressed in `unit`, including any fraction.
    pub fn as_unit(&self, unit: TimeUnit) -> f64 {
        unit.of_millis(self.millis)
    }

    pub fn is_negative(&self) -> bool {
        self.millis < 0.0
    }

    /// True for zero as well.
    pub fn is_positive(&self) -> bool {
        !self.is_negative()
    }

    pub fn is_equal_to(&self, other: impl Into<Duration>) -> bool {
        self.millis == other.into().millis
    }

    pub fn is_greater_than(&self, other: impl Into<Duration>) -> bool {
        self.millis > other.into().millis
    }

    pub fn is_less_than(&self, other: impl Into<Duration>) -> bool {
        self.millis < other.into().millis
    }

    /// Scales the duration without rounding.
    pub fn multiply_by(&self, factor: f64) -> Self {
        Self {
            millis: self.millis * factor,
        }
    }

    /// Scales the duration without rounding.
    ///
    /// ```
    /// # use timespan::Duration;
    /// assert_eq!(Duration::of(1).divide_by(2.0).millis(), 0.5);
    /// ```
    pub fn divide_by(&self, factor: f64) -> Self {
        Self {
            millis: self.millis / factor,
        }
    }

    pub fn plus(&self, other: impl Into<Duration>) -> Self {
        Self::from_millis(self.millis + other.into().millis)
    }

    pub fn minus(&self, other: impl Into<Duration>) -> Self {
        Self::from_millis(self.millis - other.into().millis)
    }

    pub fn negate(&self) -> Self {
        Self::from_millis(-self.millis)
    }

    pub fn as_absolute(&self) -> Self {
        Self::from_millis(self.millis.abs())
    }

    /// Rounds the magnitude down to a whole number of `unit`.
    ///
    /// The result is rebuilt from that count alone, so `floor_for(TimeUnit::Hours)`
    /// of one day and 23.5 hours is 47 hours.
    pub fn floor_for(&self, unit: TimeUnit) -> Self {
        self.round_magnitude(unit, f64::floor)
    }

    /// Rounds the magnitude to the nearest whole number of `unit`, ties away from zero.
    pub fn round_for(&self, unit: TimeUnit) -> Self {
        self.round_magnitude(unit, f64::round)
    }

    /// Rounds the magnitude up to a whole number of `unit`.
    pub fn ceil_for(&self, unit: TimeUnit) -> Self {
        self.round_magnitude(unit, f64::ceil)
    }

    fn round_magnitude(&self, unit: TimeUnit, round: fn(f64) -> f64) -> Self {
        let count = round(self.as_unit(unit).abs());
        let count = if self.is_negative() { -count } else { count };
        Self::of(Time::of(unit, count))
    }

    /// Converts to whole milliseconds in a [`chrono::Duration`].
    ///
    /// Returns `None` if the duration is not finite or exceeds chrono's range.
    pub fn to_chrono(&self) -> Option<chrono::Duration> {
        let millis = self.millis.round();
        if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
            return None;
        }
        chrono::Duration::try_milliseconds(millis as i64)
    }
}

impl From<f64> for Duration {
    fn from(millis: f64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<f32> for Duration {
    fn from(millis: f32) -> Self {
        Self::from_millis(millis.into())
    }
}

impl From<i64> for Duration {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis as f64)
    }
}

impl From<i32> for Duration {
    fn from(millis: i32) -> Self {
        Self::from_millis(millis.into())
    }
}

impl From<u32> for Duration {
    fn from(millis: u32) -> Self {
        Self::from_millis(millis.into())
    }
}

impl From<Duration> for f64 {
    fn from(duration: Duration) -> Self {
        duration.millis
    }
}

impl From<&Duration> for Duration {
    fn from(duration: &Duration) -> Self {
        *duration
    }
}

impl From<Time> for Duration {
    fn from(time: Time) -> Self {
        Self::from_millis(time.total_millis())
    }
}

impl From<&Time> for Duration {
    fn from(time: &Time) -> Self {
        Self::from_millis(time.total_millis())
    }
}

impl From<(TimeUnit, f64)> for Duration {
    fn from((unit, value): (TimeUnit, f64)) -> Self {
        Time::of(unit, value).into()
    }
}

impl From<chrono::Duration> for Duration {
    fn from(duration: chrono::Duration) -> Self {
        Self::of(duration.num_milliseconds())
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        self.plus(rhs)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self.minus(rhs)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        self.negate()
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: f64) -> Duration {
        self.multiply_by(rhs)
    }
}

impl Div<f64> for Duration {
    type Output = Duration;

    fn div(self, rhs: f64) -> Duration {
        self.divide_by(rhs)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, |sum, duration| sum.plus(duration))
    }
}
