use crate::domain::Earthquake;
use crate::present::color::MagnitudeColor;
use crate::present::format::{format_date, format_magnitude, format_time, split_location};
use serde::Serialize;

/// Display values for one list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuakeRow {
    pub magnitude: String,
    pub badge: MagnitudeColor,
    pub offset: String,
    pub place: String,
    pub date: String,
    pub time: String,
    pub url: String,
}

impl QuakeRow {
    pub fn from_earthquake(quake: &Earthquake) -> Self {
        Self::build(quake, format_date, format_time)
    }

    /// Like [`QuakeRow::from_earthquake`] with caller-supplied date/time formatters.
    pub fn build(
        quake: &Earthquake,
        date: impl Fn(i64) -> String,
        time: impl Fn(i64) -> String,
    ) -> Self {
        let (offset, place) = split_location(quake.location());

        Self {
            magnitude: format_magnitude(quake.magnitude()),
            badge: MagnitudeColor::for_magnitude(quake.magnitude()),
            offset,
            place,
            date: date(quake.time_millis()),
            time: time(quake.time_millis()),
            url: quake.url().to_string(),
        }
    }

    /// One line for plain-text output
    pub fn to_line(&self) -> String {
        format!(
            "{} | {} | {} | {} | {} | {}",
            self.magnitude,
            self.offset.trim_end(),
            self.place,
            self.date,
            self.time,
            self.url
        )
    }
}
