// src/application/ports/mod.rs
pub mod output;
pub mod time;

pub type ClockProviderPort = dyn time::ClockProvider;
pub type DiagnosticSinkPort = dyn output::DiagnosticSink;
