// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod clock;
pub mod sink;
pub mod time;

pub use clock::{CalendarAnswers, ScriptedClock, SteppingClock};
pub use sink::{CapturingSink, FailingSink, SharedBuffer};
pub use time::{standard_date, standard_plan};
