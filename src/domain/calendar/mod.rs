// src/domain/calendar/mod.rs
pub mod value_objects;
pub mod weekday;

pub use value_objects::{CalendarDate, Day, Month, Year};
pub use weekday::WeekdayIndex;
