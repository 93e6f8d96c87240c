// src/infrastructure/time.rs
use crate::application::ports::time::ClockProvider;
use crate::domain::{
    calendar::{CalendarDate, Month, WeekdayIndex, Year},
    tick::{Tick, TickResolution},
};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::time::{Duration, Instant};

/// Clock backed by the host: a monotonic microsecond counter starting at
/// construction, tokio for the suspension and chrono for calendar queries.
#[derive(Clone, Debug)]
pub struct SystemClockProvider {
    origin: Instant,
}

impl SystemClockProvider {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClockProvider for SystemClockProvider {
    fn current_tick(&self) -> Tick {
        let micros = self.origin.elapsed().as_micros();
        Tick(u64::try_from(micros).unwrap_or(u64::MAX))
    }

    fn tick_resolution(&self) -> TickResolution {
        TickResolution::MICROSECONDS
    }

    async fn delay_micros(&self, micros: u64) {
        tokio::time::sleep(Duration::from_micros(micros)).await;
    }

    fn days_in_month(&self, year: Year, month: Month) -> u32 {
        let (next_year, next_month) = if month.get() == 12 {
            (year.get() + 1, 1)
        } else {
            (year.get(), month.get() + 1)
        };
        NaiveDate::from_ymd_opt(year.get(), month.get(), 1)
            .zip(NaiveDate::from_ymd_opt(next_year, next_month, 1))
            .and_then(|(first, next)| u32::try_from((next - first).num_days()).ok())
            .unwrap_or_default()
    }

    fn day_of_week(&self, date: CalendarDate) -> WeekdayIndex {
        date.as_naive().weekday().into()
    }

    fn is_leap_year(&self, year: Year) -> bool {
        NaiveDate::from_ymd_opt(year.get(), 2, 29).is_some()
    }
}
