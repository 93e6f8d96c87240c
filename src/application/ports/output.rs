// src/application/ports/output.rs
use crate::application::{dto::CheckRecord, error::ApplicationResult};

/// Destination for the result line of each check.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, record: &CheckRecord) -> ApplicationResult<()>;
}
