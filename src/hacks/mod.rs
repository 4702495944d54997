use crate::Duration;

/// A whole number of milliseconds for embedding durations in serialised structs.
///
/// [`Duration`] may hold fractional or non-finite milliseconds, which most
/// storage formats cannot represent faithfully. This rounds on the way in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DurationInMilliseconds {
    duration: i64,
}

impl DurationInMilliseconds {
    pub fn milliseconds(self) -> i64 {
        self.duration
    }
}

impl From<i64> for DurationInMilliseconds {
    fn from(duration: i64) -> Self {
        Self { duration }
    }
}

/// Non-finite durations become zero, out of range ones saturate.
impl From<Duration> for DurationInMilliseconds {
    fn from(duration: Duration) -> Self {
        // `as` saturates and maps NaN to 0
        Self {
            duration: duration.millis().round() as i64,
        }
    }
}

impl From<DurationInMilliseconds> for Duration {
    fn from(duration: DurationInMilliseconds) -> Self {
        Self::of(duration.duration)
    }
}

impl From<chrono::Duration> for DurationInMilliseconds {
    fn from(duration: chrono::Duration) -> Self {
        Self {
            duration: duration.num_milliseconds(),
        }
    }
}

impl From<DurationInMilliseconds> for chrono::Duration {
    fn from(duration: DurationInMilliseconds) -> Self {
        Self::milliseconds(duration.duration)
    }
}
