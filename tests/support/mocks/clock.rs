// tests/support/mocks/clock.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use rtc_probe::application::ports::time::ClockProvider;
use rtc_probe::domain::calendar::{CalendarDate, Month, WeekdayIndex, Year};
use rtc_probe::domain::tick::{Tick, TickResolution};

/// Fixed answers for the calendar queries.
#[derive(Clone, Copy, Debug)]
pub struct CalendarAnswers {
    pub days: u32,
    pub weekday: WeekdayIndex,
    pub leap_year: bool,
}

impl Default for CalendarAnswers {
    fn default() -> Self {
        Self {
            days: 30,
            weekday: WeekdayIndex::TUESDAY,
            leap_year: false,
        }
    }
}

/// Tick counter that only moves when `delay_micros` is called, by exactly
/// the requested delay plus `extra_us`.
pub struct SteppingClock {
    now: AtomicU64,
    resolution: TickResolution,
    extra_us: u64,
    answers: CalendarAnswers,
    delays: Mutex<Vec<u64>>,
}

impl SteppingClock {
    pub fn new(resolution: TickResolution) -> Self {
        Self {
            now: AtomicU64::new(1_000),
            resolution,
            extra_us: 0,
            answers: CalendarAnswers::default(),
            delays: Mutex::new(Vec::new()),
        }
    }

    pub fn microseconds() -> Self {
        Self::new(TickResolution::MICROSECONDS)
    }

    pub fn with_extra_us(mut self, extra_us: u64) -> Self {
        self.extra_us = extra_us;
        self
    }

    pub fn with_answers(mut self, answers: CalendarAnswers) -> Self {
        self.answers = answers;
        self
    }

    pub fn delays(&self) -> Vec<u64> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClockProvider for SteppingClock {
    fn current_tick(&self) -> Tick {
        Tick(self.now.load(Ordering::SeqCst))
    }

    fn tick_resolution(&self) -> TickResolution {
        self.resolution
    }

    async fn delay_micros(&self, micros: u64) {
        self.delays.lock().unwrap().push(micros);
        let ticks = (micros + self.extra_us) * self.resolution.ticks_per_second() / 1_000_000;
        self.now.fetch_add(ticks, Ordering::SeqCst);
    }

    fn days_in_month(&self, _year: Year, _month: Month) -> u32 {
        self.answers.days
    }

    fn day_of_week(&self, _date: CalendarDate) -> WeekdayIndex {
        self.answers.weekday
    }

    fn is_leap_year(&self, _year: Year) -> bool {
        self.answers.leap_year
    }
}

/// Returns the scripted tick values in order; the delay does nothing.
pub struct ScriptedClock {
    ticks: Mutex<VecDeque<u64>>,
    answers: CalendarAnswers,
}

impl ScriptedClock {
    pub fn new(ticks: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ticks: Mutex::new(ticks.into_iter().collect()),
            answers: CalendarAnswers::default(),
        }
    }
}

#[async_trait]
impl ClockProvider for ScriptedClock {
    fn current_tick(&self) -> Tick {
        Tick(self.ticks.lock().unwrap().pop_front().expect("ran out of scripted ticks"))
    }

    fn tick_resolution(&self) -> TickResolution {
        TickResolution::MICROSECONDS
    }

    async fn delay_micros(&self, _micros: u64) {}

    fn days_in_month(&self, _year: Year, _month: Month) -> u32 {
        self.answers.days
    }

    fn day_of_week(&self, _date: CalendarDate) -> WeekdayIndex {
        self.answers.weekday
    }

    fn is_leap_year(&self, _year: Year) -> bool {
        self.answers.leap_year
    }
}
