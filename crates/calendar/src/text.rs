use std::str::FromStr;

use chrono::NaiveDate;

use crate::{to_gregorian, to_jalali, CalendarError, JalaliDate};

/// Date stored for programs that were saved without a date (1970-01-01).
pub fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Parses `"Y/M/D"`. Blank input means "no date" and yields `None`.
pub fn parse_jalali_text(text: &str) -> Result<Option<JalaliDate>, CalendarError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let malformed = || CalendarError::MalformedDate(text.to_owned());
    let parts = text.split('/').collect::<Vec<_>>();
    let [year, month, day] = parts.as_slice() else {
        return Err(malformed());
    };
    let year = year.parse::<i32>().map_err(|_| malformed())?;
    let month = month.parse::<u32>().map_err(|_| malformed())?;
    let day = day.parse::<u32>().map_err(|_| malformed())?;
    JalaliDate::new(year, month, day).map(Some)
}

/// Converts user supplied jalali text to the stored gregorian date.
/// Blank input maps to [`epoch`].
pub fn gregorian_from_text(text: &str) -> Result<NaiveDate, CalendarError> {
    match parse_jalali_text(text)? {
        Some(date) => to_gregorian(date),
        None => Ok(epoch()),
    }
}

pub fn format_jalali_text(date: JalaliDate) -> String {
    date.to_string()
}

pub fn jalali_text(date: NaiveDate) -> Result<String, CalendarError> {
    to_jalali(date).map(format_jalali_text)
}

impl FromStr for JalaliDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_jalali_text(s)?.ok_or_else(|| CalendarError::MalformedDate(s.to_owned()))
    }
}

impl TryFrom<String> for JalaliDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JalaliDate> for String {
    fn from(date: JalaliDate) -> Self {
        format_jalali_text(date)
    }
}
