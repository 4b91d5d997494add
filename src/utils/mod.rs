pub mod colors;
pub mod date;
pub mod table;
pub mod time;

pub use time::{Instant, format_duration, same_date};
