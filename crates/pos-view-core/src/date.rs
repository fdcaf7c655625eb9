//! # Date Display
//!
//! Header date shown on the top navigation, formatted once at mount.
//!
//! Thai long form: day, full month name, Buddhist-era year
//! (Gregorian + 543), e.g. `18 ตุลาคม 2569`.

use chrono::{DateTime, Datelike, Locale, TimeZone};

/// Offset between the Gregorian and Buddhist-era year numbers.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Formats a date in Thai long form.
pub fn format_thai_long_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let day_month = at.format_localized("%-d %B", Locale::th_TH);
    format!("{} {}", day_month, at.year() + BUDDHIST_ERA_OFFSET)
}
