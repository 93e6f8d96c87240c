use anyhow::Result;
use rtc_probe::{
    application::{
        checks::VerificationSequence,
        ports::{output::DiagnosticSink, time::ClockProvider},
    },
    config::ProbeConfig,
    infrastructure::{console::ConsoleSink, time::SystemClockProvider},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    match bootstrap().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            tracing::error!(error = %err, "fatal error");
            eprintln!("fatal error: {err}");
            std::process::exit(1);
        }
    }
}

/// Runs the verification sequence once. Returns whether the run succeeded
/// under the configured strictness.
async fn bootstrap() -> Result<bool> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ProbeConfig::from_env()?;
    tracing::debug!(
        plan = ?config.plan(),
        strict = config.strict(),
        output = %config.output_format(),
        "configuration loaded"
    );

    let clock: Arc<dyn ClockProvider> = Arc::new(SystemClockProvider::new());
    let sink: Arc<dyn DiagnosticSink> = Arc::new(ConsoleSink::stdout(config.output_format()));
    let sequence = VerificationSequence::new(Arc::clone(&clock), Arc::clone(&sink));

    let report = sequence.run(config.plan()).await?;
    let succeeded = report.succeeded(config.strict());
    if !succeeded {
        tracing::error!(mismatches = ?report.mismatches(), "strict verification failed");
    }

    Ok(succeeded)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
