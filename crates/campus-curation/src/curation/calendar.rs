//! Maps wall-clock time onto the day, season and time-of-day keys the engine
//! matches against.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use super::domain::{DayKey, Season, TimeContext};
use super::tips::TipContext;

const DAY_STARTS_AT: u32 = 6;
const NIGHT_STARTS_AT: u32 = 18;

impl DayKey {
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Mon,
            Weekday::Tue => Self::Tue,
            Weekday::Wed => Self::Wed,
            Weekday::Thu => Self::Thu,
            Weekday::Fri => Self::Fri,
            Weekday::Sat => Self::Sat,
            Weekday::Sun => Self::Sun,
        }
    }
}

impl Season {
    /// Meteorological season for the northern hemisphere.
    pub fn for_date(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }
}

impl TimeContext {
    pub fn for_time(time: NaiveTime) -> Self {
        if (DAY_STARTS_AT..NIGHT_STARTS_AT).contains(&time.hour()) {
            Self::Day
        } else {
            Self::Night
        }
    }
}

impl TipContext {
    /// Fully specified context for a moment in local time.
    pub fn at(moment: NaiveDateTime) -> Self {
        Self {
            season: Some(Season::for_date(moment.date())),
            day_of_week: Some(DayKey::from_weekday(moment.weekday())),
            time_context: Some(TimeContext::for_time(moment.time())),
        }
    }
}

/// Day key for `now`, defaulting to the current local time.
pub fn resolve_day_key(now: Option<NaiveDateTime>) -> DayKey {
    let moment = now.unwrap_or_else(|| Local::now().naive_local());
    DayKey::from_weekday(moment.weekday())
}
