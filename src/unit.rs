use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A granularity a [`Duration`](crate::Duration) can be expressed in or rounded to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
}

impl TimeUnit {
    /// All units, from largest to smallest.
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
        TimeUnit::Millis,
    ];

    /// The number of milliseconds in one of this unit.
    pub const fn millis(self) -> i64 {
        match self {
            TimeUnit::Days => 86_400_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Seconds => 1_000,
            TimeUnit::Millis => 1,
        }
    }

    /// The next smaller unit in the conversion chain, and how many of it make one of this unit.
    pub const fn smaller(self) -> Option<(TimeUnit, f64)> {
        match self {
            TimeUnit::Days => Some((TimeUnit::Hours, 24.0)),
            TimeUnit::Hours => Some((TimeUnit::Minutes, 60.0)),
            TimeUnit::Minutes => Some((TimeUnit::Seconds, 60.0)),
            TimeUnit::Seconds => Some((TimeUnit::Millis, 1000.0)),
            TimeUnit::Millis => None,
        }
    }

    /// Converts a number of milliseconds into this unit.
    ///
    /// The value is divided step by step along the chain
    /// `millis -> seconds -> minutes -> hours -> days`, stopping at this unit.
    /// The result is not truncated.
    pub fn of_millis(self, millis: f64) -> f64 {
        match self.smaller() {
            None => millis,
            Some((smaller, factor)) => smaller.of_millis(millis) / factor,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Millis => "millis",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| Error::UnknownTimeUnit(s.to_owned()))
    }
}
