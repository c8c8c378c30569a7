//! Unlock stamps as rendered on badge pages, e.g. `Unlocked Mar 5, 2015 @ 2:40pm`.
//! Stamps from the current year omit the year (`Unlocked Mar 5 @ 2:40pm`),
//! and some locales put the day first (`5 Mar, 2015 @ 2:40pm`).

use super::text::squash_ws;
use crate::error::{ProfileError, Result};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MONTH_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<mon>[a-z]+)\.?\s+(?P<day>\d{1,2}),?(?:\s+(?P<year>\d{4}))?\s*@\s*(?P<hour>\d{1,2}):(?P<min>\d{2})\s*(?P<ampm>[ap]m)$",
    )
    .unwrap()
});

static DAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<day>\d{1,2})\s+(?P<mon>[a-z]+)\.?,?(?:\s+(?P<year>\d{4}))?\s*@\s*(?P<hour>\d{1,2}):(?P<min>\d{2})\s*(?P<ampm>[ap]m)$",
    )
    .unwrap()
});

static LAST_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})\D*$").unwrap());

const ADDED_ON_FORMATS: [&str; 5] = ["%d %B, %Y", "%B %d, %Y", "%d %B %Y", "%B %d %Y", "%Y-%m-%d"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub year: Option<i32>,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Stamp {
    /// Epoch milliseconds (UTC), using `default_year` when the stamp has none.
    pub fn to_millis(&self, default_year: i32) -> Result<i64> {
        self.millis_in_year(self.year.unwrap_or(default_year))
    }

    /// Epoch milliseconds (UTC) with the stamp's own year replaced by `year`.
    pub fn millis_in_year(&self, year: i32) -> Result<i64> {
        let date = NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or_else(|| {
            ProfileError::Parse(format!("invalid date {year}-{}-{}", self.month, self.day))
        })?;
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).ok_or_else(|| {
            ProfileError::Parse(format!("invalid time {}:{}", self.hour, self.minute))
        })?;
        Ok(date.and_time(time).and_utc().timestamp_millis())
    }
}

pub fn parse_stamp(text: &str) -> Result<Stamp> {
    let text = squash_ws(text);
    let text = text.strip_prefix("Unlocked ").unwrap_or(text.as_str());

    let caps = MONTH_FIRST
        .captures(text)
        .or_else(|| DAY_FIRST.captures(text))
        .ok_or_else(|| ProfileError::Parse(format!("unrecognized stamp '{text}'")))?;

    let month = month_number(&caps["mon"])
        .ok_or_else(|| ProfileError::Parse(format!("unknown month in '{text}'")))?;
    let hour = twelve_to_24(number(&caps, "hour")?, &caps["ampm"])
        .ok_or_else(|| ProfileError::Parse(format!("invalid hour in '{text}'")))?;

    Ok(Stamp {
        year: caps
            .name("year")
            .map(|y| y.as_str().parse())
            .transpose()
            .map_err(|_| ProfileError::Parse(format!("invalid year in '{text}'")))?,
        month,
        day: number(&caps, "day")?,
        hour,
        minute: number(&caps, "min")?,
    })
}

/// Last four-digit year in a sentence such as "Member since 12 March, 2012."
pub fn trailing_year(text: &str) -> Option<i32> {
    LAST_YEAR
        .captures(text.trim())
        .and_then(|caps| caps[1].parse().ok())
}

/// Lenient parse of wishlist "added on" dates.
pub fn parse_added_on(text: &str) -> Option<NaiveDate> {
    let text = squash_ws(text);
    ADDED_ON_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&text, format).ok())
}

fn number(caps: &Captures, name: &str) -> Result<u32> {
    caps[name]
        .parse()
        .map_err(|_| ProfileError::Parse(format!("invalid {name} '{}'", &caps[name])))
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn twelve_to_24(hour: u32, ampm: &str) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let pm = ampm.eq_ignore_ascii_case("pm");
    Some(hour % 12 + if pm { 12 } else { 0 })
}
