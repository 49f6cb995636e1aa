pub use chrono;

mod jalali;
mod text;

pub use jalali::{
    days_in_month, from_julian_day, is_leap_year, julian_day, to_gregorian, to_jalali,
    JalaliDate, MAX_YEAR, MIN_YEAR,
};
pub use text::{epoch, format_jalali_text, gregorian_from_text, jalali_text, parse_jalali_text};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Date is outside of the supported range: {0}")]
    OutOfRange(String),
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),
}
