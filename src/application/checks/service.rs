// src/application/checks/service.rs
use std::sync::Arc;

use crate::application::ports::{ClockProviderPort, DiagnosticSinkPort};

/// Runs the clock checks against a clock provider and reports each result
/// to a diagnostic sink.
pub struct VerificationSequence {
    pub(super) clock: Arc<ClockProviderPort>,
    pub(super) sink: Arc<DiagnosticSinkPort>,
}

impl VerificationSequence {
    pub fn new(clock: Arc<ClockProviderPort>, sink: Arc<DiagnosticSinkPort>) -> Self {
        Self { clock, sink }
    }
}
