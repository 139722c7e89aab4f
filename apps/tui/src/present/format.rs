use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Separator between the offset phrase and the place name
pub const LOCATION_SEPARATOR: &str = " of ";

/// Offset phrase used when a location has no separator
pub const NEAR_THE: &str = "Near the";

const DATE_PATTERN: &str = "%b %-d, %Y";
// 12-hour clock so the AM/PM marker is meaningful
const TIME_PATTERN: &str = "%-I:%M %p";

/// Splits `"5km NW of Smithville"` into `("5km NW of ", "Smithville")`.
///
/// Only the first separator counts. Without one the whole string is the
/// place and the offset is [`NEAR_THE`].
pub fn split_location(location: &str) -> (String, String) {
    location.split_once(LOCATION_SEPARATOR).map_or_else(
        || (NEAR_THE.to_string(), location.to_string()),
        |(offset, place)| (format!("{offset}{LOCATION_SEPARATOR}"), place.to_string()),
    )
}

/// Magnitude with exactly one decimal place
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude:.1}")
}

/// `"Mar 5, 2024"` in the local time zone
pub fn format_date(epoch_millis: i64) -> String {
    format_date_in(&Local, epoch_millis)
}

/// `"3:05 PM"` in the local time zone
pub fn format_time(epoch_millis: i64) -> String {
    format_time_in(&Local, epoch_millis)
}

pub fn format_date_in<Tz>(tz: &Tz, epoch_millis: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(tz, epoch_millis, DATE_PATTERN)
}

pub fn format_time_in<Tz>(tz: &Tz, epoch_millis: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(tz, epoch_millis, TIME_PATTERN)
}

// Out-of-range timestamps render as an empty string.
fn format_in<Tz>(tz: &Tz, epoch_millis: i64, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Utc.timestamp_millis_opt(epoch_millis)
        .single()
        .map(|utc: DateTime<Utc>| utc.with_timezone(tz))
        .map_or_else(String::new, |zoned| zoned.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const MARCH_5_2024_1505_UTC: i64 = 1_709_651_100_000;

    #[test]
    fn test_split_at_separator_keeps_it_in_offset() {
        assert_eq!(
            split_location("5km NW of Smithville"),
            ("5km NW of ".to_string(), "Smithville".to_string())
        );
    }

    #[test]
    fn test_split_uses_first_separator_only() {
        assert_eq!(
            split_location("10km N of Isle of Man"),
            ("10km N of ".to_string(), "Isle of Man".to_string())
        );
    }

    #[test]
    fn test_split_without_separator_falls_back() {
        assert_eq!(
            split_location("Near Nowhere"),
            ("Near the".to_string(), "Near Nowhere".to_string())
        );
        assert_eq!(split_location(""), (NEAR_THE.to_string(), String::new()));
    }

    #[test]
    fn test_magnitude_has_one_decimal() {
        assert_eq!(format_magnitude(6.0), "6.0");
        assert_eq!(format_magnitude(7.04), "7.0");
        assert_eq!(format_magnitude(4.96), "5.0");
    }

    #[test]
    fn test_date_and_time_patterns_in_utc() {
        assert_eq!(format_date_in(&Utc, MARCH_5_2024_1505_UTC), "Mar 5, 2024");
        assert_eq!(format_time_in(&Utc, MARCH_5_2024_1505_UTC), "3:05 PM");
    }

    #[test]
    fn test_midnight_renders_as_twelve_am() {
        assert_eq!(format_date_in(&Utc, 1000), "Jan 1, 1970");
        assert_eq!(format_time_in(&Utc, 1000), "12:00 AM");
    }

    #[test]
    fn test_date_and_time_share_the_same_zone() -> Result<(), Box<dyn std::error::Error>> {
        let tokyo = FixedOffset::east_opt(9 * 3600).ok_or("bad offset")?;

        assert_eq!(format_date_in(&tokyo, MARCH_5_2024_1505_UTC), "Mar 6, 2024");
        assert_eq!(format_time_in(&tokyo, MARCH_5_2024_1505_UTC), "12:05 AM");

        Ok(())
    }

    #[test]
    fn test_out_of_range_timestamp_is_blank() {
        assert_eq!(format_date_in(&Utc, i64::MAX), "");
        assert_eq!(format_time_in(&Utc, i64::MIN), "");
    }
}
