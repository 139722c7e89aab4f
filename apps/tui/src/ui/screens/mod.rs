pub mod help;
pub mod quakes;
