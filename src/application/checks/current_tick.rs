// src/application/checks/current_tick.rs
use super::VerificationSequence;
use crate::application::{
    dto::{CheckRecord, TickCheck},
    error::ApplicationResult,
};

pub struct CheckCurrentTickQuery {
    pub delay_us: u64,
}

impl VerificationSequence {
    /// Reads the tick counter on both sides of a suspension and checks that
    /// at least `delay_us` microseconds of ticks elapsed.
    pub async fn check_current_tick(
        &self,
        query: CheckCurrentTickQuery,
    ) -> ApplicationResult<TickCheck> {
        tracing::info!(delay_us = query.delay_us, "checking current tick");

        let resolution = self.clock.tick_resolution();
        let start = self.clock.current_tick();
        self.clock.delay_micros(query.delay_us).await;
        let end = self.clock.current_tick();

        let elapsed_us = resolution.ticks_to_micros(end.since(start));
        let check = TickCheck {
            passed: elapsed_us >= query.delay_us,
            delay_us: query.delay_us,
            elapsed_us,
            start_tick: start.into(),
            end_tick: end.into(),
        };

        if check.passed {
            tracing::debug!(elapsed_us, start = %start, end = %end, "tick delta covers delay");
        } else {
            tracing::warn!(
                elapsed_us,
                delay_us = query.delay_us,
                start = %start,
                end = %end,
                "tick delta shorter than delay"
            );
        }

        self.sink.emit(&CheckRecord::CurrentTick(check))?;
        Ok(check)
    }
}
