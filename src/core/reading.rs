//! Wall-clock snapshot in the display time zone.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};

use crate::core::error::ClockError;

/// Hour, minute and second in local display time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockReading {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockReading {
    /// `None` when any field is out of range.
    #[must_use]
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        (hour < 24 && minute < 60 && second < 60).then_some(Self {
            hour,
            minute,
            second,
        })
    }

    /// `HH:MM:SS`
    #[must_use]
    pub fn digital(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// One frame's worth of date and time, already shifted to the target offset.
#[derive(Clone, Copy, Debug)]
pub struct LocalTime(DateTime<FixedOffset>);

impl LocalTime {
    #[must_use]
    pub fn reading(&self) -> ClockReading {
        // chrono keeps these in range; leap seconds report as :59
        ClockReading {
            hour: self.0.hour() as u8,
            minute: self.0.minute() as u8,
            second: self.0.second().min(59) as u8,
        }
    }

    /// `2026年10月18日 (日)`
    #[must_use]
    pub fn date_line(&self) -> String {
        format!(
            "{}年{}月{}日 ({})",
            self.0.year(),
            self.0.month(),
            self.0.day(),
            weekday_glyph(self.0.weekday())
        )
    }
}

fn weekday_glyph(w: Weekday) -> char {
    match w {
        Weekday::Mon => '月',
        Weekday::Tue => '火',
        Weekday::Wed => '水',
        Weekday::Thu => '木',
        Weekday::Fri => '金',
        Weekday::Sat => '土',
        Weekday::Sun => '日',
    }
}

/// Reads UTC and shifts it by a fixed offset.
#[derive(Clone, Copy, Debug)]
pub struct TimeSource {
    offset: FixedOffset,
}

impl TimeSource {
    /// `hours` may be fractional (India is +5.5).
    pub fn new(hours: f64) -> Result<Self, ClockError> {
        let offset_secs = (hours * 3600.0).round() as i32;
        FixedOffset::east_opt(offset_secs)
            .map(|offset| Self { offset })
            .ok_or(ClockError::TimeZone { offset_secs })
    }

    #[must_use]
    pub fn now(&self) -> LocalTime {
        self.at(Utc::now())
    }

    #[must_use]
    pub fn at(&self, utc: DateTime<Utc>) -> LocalTime {
        LocalTime(utc.with_timezone(&self.offset))
    }
}
