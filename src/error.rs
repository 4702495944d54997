use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown time unit '{0}', expected one of days, hours, minutes, seconds or millis")]
    UnknownTimeUnit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
