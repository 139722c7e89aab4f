// Presentation helpers for quake_report
// Everything here is pure: records in, display values out

pub mod color;
pub mod format;
pub mod row;

pub use color::MagnitudeColor;
pub use format::{
    format_date, format_date_in, format_magnitude, format_time, format_time_in, split_location,
    NEAR_THE,
};
pub use row::QuakeRow;
