use crate::TimeUnit;

/// A duration given as separate unit fields.
///
/// Fields that are not set default to zero, so any subset can be given:
///
/// ```
/// use timespan::{Duration, Time};
///
/// let duration = Duration::of(Time {
///     hours: 1.0,
///     minutes: 30.0,
///     ..Time::default()
/// });
/// assert_eq!(duration.minutes(), 90.0);
/// ```
///
/// Fields may be negative or fractional. They are combined into a single
/// millisecond count which is rounded once, see [`Time::total_millis`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Time {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub millis: f64,
}

impl Time {
    /// A record with only the field for `unit` set.
    pub fn of(unit: TimeUnit, value: f64) -> Self {
        let mut time = Self::default();
        match unit {
            TimeUnit::Days => time.days = value,
            TimeUnit::Hours => time.hours = value,
            TimeUnit::Minutes => time.minutes = value,
            TimeUnit::Seconds => time.seconds = value,
            TimeUnit::Millis => time.millis = value,
        }
        time
    }

    /// The weighted sum of all fields in milliseconds, not yet rounded.
    pub fn total_millis(&self) -> f64 {
        let hours = self.hours + 24.0 * self.days;
        let minutes = self.minutes + 60.0 * hours;
        let seconds = self.seconds + 60.0 * minutes;
        self.millis + 1000.0 * seconds
    }
}
