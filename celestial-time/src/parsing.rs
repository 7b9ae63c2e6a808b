//! ISO 8601 date-time parsing and formatting.
//!
//! Accepted input forms:
//!
//! | Form | Example |
//! |------|---------|
//! | `T` separator | `2010-09-10T12:00:00` |
//! | space separator | `2010-09-10 12:00:00` |
//! | fractional seconds | `2010-09-10T12:00:00.250` |
//! | trailing `Z` | `2010-09-10T12:00:00Z` |
//! | date only (midnight) | `2010-09-10` |
//!
//! Output is always `YYYY-MM-DDTHH:MM:SS.sss`.

use crate::constants::MAX_ISO8601_LENGTH;
use crate::julian::CalendarDate;
use crate::{JulianDate, TimeError, TimeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl ParsedDateTime {
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

fn digits(field: &str, name: &str, widths: &[usize]) -> TimeResult<u32> {
    if !widths.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::parse(format!("Invalid {}: '{}'", name, field)));
    }
    field
        .parse::<u32>()
        .map_err(|_| TimeError::parse(format!("Invalid {}: '{}'", name, field)))
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::parse("Input too long"));
    }
    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = match s.find(&['T', ' '][..]) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let date: Vec<&str> = date_part.split('-').collect();
    if date.len() != 3 {
        return Err(TimeError::parse(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }
    let year = digits(date[0], "year", &[4])? as i32;
    let month = digits(date[1], "month", &[1, 2])? as u8;
    let day = digits(date[2], "day", &[1, 2])? as u8;

    if !(1..=12).contains(&month) {
        return Err(TimeError::parse(format!("Month out of range: {}", month)));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(TimeError::parse(format!(
            "Day out of range: {}-{:02}-{:02}",
            year, month, day
        )));
    }

    let (hour, minute, second) = match time_part {
        None => (0, 0, 0.0),
        Some(time_part) => parse_time(time_part)?,
    };

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn parse_time(time_part: &str) -> TimeResult<(u8, u8, f64)> {
    let time: Vec<&str> = time_part.split(':').collect();
    if time.len() != 3 {
        return Err(TimeError::parse(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time_part
        )));
    }
    let hour = digits(time[0], "hour", &[1, 2])? as u8;
    let minute = digits(time[1], "minute", &[1, 2])? as u8;

    let (whole, frac) = match time[2].split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (time[2], None),
    };
    let mut second = digits(whole, "second", &[1, 2])? as f64;
    if let Some(frac) = frac {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::parse(format!(
                "Invalid fractional seconds: '{}'",
                time[2]
            )));
        }
        let value: f64 = format!("0.{}", frac)
            .parse()
            .map_err(|_| TimeError::parse(format!("Invalid fractional seconds: '{}'", frac)))?;
        second += value;
    }

    if hour > 23 {
        return Err(TimeError::parse(format!("Hour out of range: {}", hour)));
    }
    if minute > 59 {
        return Err(TimeError::parse(format!("Minute out of range: {}", minute)));
    }
    if second >= 61.0 {
        return Err(TimeError::parse(format!("Second out of range: {}", second)));
    }

    Ok((hour, minute, second))
}

pub fn format_iso8601(date: &CalendarDate) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
        date.year,
        date.month,
        date.day,
        date.hour(),
        date.minute(),
        date.second(),
        date.millisecond()
    )
}
