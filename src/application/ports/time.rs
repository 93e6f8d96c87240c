// src/application/ports/time.rs
use crate::domain::{
    calendar::{CalendarDate, Month, WeekdayIndex, Year},
    tick::{Tick, TickResolution},
};
use async_trait::async_trait;

/// Real-time clock facility queried by the verification sequence.
///
/// Every query is infallible for validated input. Implementations own the
/// calendar math and the scheduling of the suspension.
#[async_trait]
pub trait ClockProvider: Send + Sync {
    /// Current value of the monotonic tick counter.
    fn current_tick(&self) -> Tick;

    fn tick_resolution(&self) -> TickResolution;

    /// Suspends the calling task for `micros` microseconds.
    async fn delay_micros(&self, micros: u64);

    fn days_in_month(&self, year: Year, month: Month) -> u32;

    fn day_of_week(&self, date: CalendarDate) -> WeekdayIndex;

    fn is_leap_year(&self, year: Year) -> bool;
}
