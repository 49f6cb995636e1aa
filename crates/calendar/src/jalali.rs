use std::fmt;

use chrono::{Datelike as _, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::CalendarError;

/// Jalali years at which the 33-year leap cycle restarts.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Years before the first break follow the plain 33-year arithmetic rule.
/// Both rules put Nowruz of this year on the same day.
const FIRST_BREAK: i32 = BREAKS[0];

/// Year holding 0001-01-01. Its Nowruz is 0000-03-21.
pub const MIN_YEAR: i32 = -621;
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Julian day number of chrono's day zero (0000-12-31).
const JDN_OFFSET: i64 = 1_721_425;

/// Base of the arithmetic Nowruz formula, in julian days.
const ARITHMETIC_EPOCH: i64 = 1_948_320;

/// A date of the solar Hijri calendar. Always holds a valid date inside
/// `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<JalaliDate, CalendarError> {
        check_year(year)?;
        let last_day = days_in_month(year, month)?;
        if day == 0 || day > last_day {
            return Err(CalendarError::MalformedDate(format!(
                "{}/{}/{}",
                year, month, day
            )));
        }
        Ok(JalaliDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// 1-based position of the day inside its year.
    pub fn day_of_year(&self) -> u32 {
        if self.month <= 6 {
            (self.month - 1) * 31 + self.day
        } else {
            186 + (self.month - 7) * 30 + self.day
        }
    }

    pub fn julian_day(&self) -> Result<i64, CalendarError> {
        Ok(nowruz_julian_day(self.year)? + self.day_of_year() as i64 - 1)
    }

    pub fn from_julian_day(jdn: i64) -> Result<JalaliDate, CalendarError> {
        let gregorian = from_julian_day(jdn)?;
        let out_of_range = || CalendarError::OutOfRange(format!("gregorian date {}", gregorian));

        let mut year = gregorian.year() - 621;
        if year > MAX_YEAR || jdn < nowruz_julian_day(year).map_err(|_| out_of_range())? {
            year -= 1;
        }
        let nowruz = nowruz_julian_day(year).map_err(|_| out_of_range())?;

        let offset = (jdn - nowruz) as u32;
        let (month, day) = if offset < 186 {
            (1 + offset / 31, offset % 31 + 1)
        } else {
            let offset = offset - 186;
            (7 + offset / 30, offset % 30 + 1)
        };

        if month > 12 || day > days_in_month(year, month)? {
            return Err(out_of_range());
        }
        Ok(JalaliDate { year, month, day })
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

pub fn julian_day(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + JDN_OFFSET
}

pub fn from_julian_day(jdn: i64) -> Result<NaiveDate, CalendarError> {
    i32::try_from(jdn - JDN_OFFSET)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| CalendarError::OutOfRange(format!("julian day {}", jdn)))
}

pub fn to_jalali(date: NaiveDate) -> Result<JalaliDate, CalendarError> {
    JalaliDate::from_julian_day(julian_day(date)).map_err(|err| {
        warn!("Failed to convert {} to jalali: {}", date, err);
        err
    })
}

pub fn to_gregorian(date: JalaliDate) -> Result<NaiveDate, CalendarError> {
    from_julian_day(date.julian_day()?)
}

pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    check_year(year)?;
    if year < FIRST_BREAK {
        Ok((25 * year + 11).rem_euclid(33) < 8)
    } else {
        Ok(year_info(year).leap)
    }
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 => Ok(if is_leap_year(year)? { 30 } else { 29 }),
        _ => Err(CalendarError::MalformedDate(format!("month {} of {}", month, year))),
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::OutOfRange(format!("jalali year {}", year)))
    }
}

struct YearInfo {
    gregorian_year: i32,
    /// Day of March on which the year starts.
    march_day: u32,
    leap: bool,
}

/// Break table arithmetic. Only valid for `FIRST_BREAK..=MAX_YEAR`.
fn year_info(year: i32) -> YearInfo {
    let gregorian_year = year + 621;
    let mut jalali_leaps = -14;
    let mut cycle_start = BREAKS[0];
    let mut jump = 0;
    for &cycle_end in &BREAKS[1..] {
        jump = cycle_end - cycle_start;
        if year < cycle_end {
            break;
        }
        jalali_leaps += jump / 33 * 8 + jump % 33 / 4;
        cycle_start = cycle_end;
    }

    let mut n = year - cycle_start;
    jalali_leaps += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        jalali_leaps += 1;
    }

    let gregorian_leaps = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = (20 + jalali_leaps - gregorian_leaps) as u32;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let leap = ((n + 1) % 33 - 1) % 4 == 0;

    YearInfo {
        gregorian_year,
        march_day,
        leap,
    }
}

fn nowruz_julian_day(year: i32) -> Result<i64, CalendarError> {
    check_year(year)?;
    if year < FIRST_BREAK {
        let year = year as i64;
        return Ok(ARITHMETIC_EPOCH + 365 * (year - 1) + (8 * year + 21).div_euclid(33));
    }

    let info = year_info(year);
    NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march_day)
        .map(julian_day)
        .ok_or_else(|| CalendarError::OutOfRange(format!("jalali year {}", year)))
}
