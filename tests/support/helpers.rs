// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::CapturingSink;
use rtc_probe::application::checks::VerificationSequence;
use rtc_probe::application::ports::{output::DiagnosticSink, time::ClockProvider};

/// Wires a sequence to `clock` and a fresh capturing sink.
pub fn sequence_with<C>(clock: Arc<C>) -> (VerificationSequence, Arc<CapturingSink>)
where
    C: ClockProvider + 'static,
{
    let sink = Arc::new(CapturingSink::default());
    let clock: Arc<dyn ClockProvider> = clock;
    let sink_port: Arc<dyn DiagnosticSink> = Arc::clone(&sink) as Arc<dyn DiagnosticSink>;
    (VerificationSequence::new(clock, sink_port), sink)
}
