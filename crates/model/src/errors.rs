use calendar::CalendarError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid variant index: {0}, expected 1..=6")]
    InvalidVariant(i64),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    MalformedDate,
    InvalidVariant,
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::InvalidVariant(_) => ErrorKind::InvalidVariant,
            ReportError::Calendar(CalendarError::OutOfRange(_)) => ErrorKind::OutOfRange,
            ReportError::Calendar(CalendarError::MalformedDate(_)) => ErrorKind::MalformedDate,
        }
    }
}
