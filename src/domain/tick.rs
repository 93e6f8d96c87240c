// src/domain/tick.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Raw value of a monotonic tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick(pub u64);

impl Tick {
    /// Ticks elapsed since `earlier`. A counter that went backwards yields 0.
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl From<Tick> for u64 {
    fn from(value: Tick) -> Self {
        value.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickResolution(u64);

impl TickResolution {
    pub const MICROSECONDS: Self = Self(MICROS_PER_SECOND);

    pub fn new(ticks_per_second: u64) -> DomainResult<Self> {
        if ticks_per_second == 0 {
            return Err(DomainError::Validation(
                "tick resolution must be non-zero".into(),
            ));
        }
        Ok(Self(ticks_per_second))
    }

    pub fn ticks_per_second(self) -> u64 {
        self.0
    }

    /// Converts a tick count to whole microseconds, rounding down.
    pub fn ticks_to_micros(self, ticks: u64) -> u64 {
        let micros = u128::from(ticks) * u128::from(MICROS_PER_SECOND) / u128::from(self.0);
        u64::try_from(micros).unwrap_or(u64::MAX)
    }
}
