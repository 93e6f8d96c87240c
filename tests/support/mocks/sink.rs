// tests/support/mocks/sink.rs
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use rtc_probe::application::dto::CheckRecord;
use rtc_probe::application::error::{ApplicationError, ApplicationResult};
use rtc_probe::application::ports::output::DiagnosticSink;

/// Records every emitted check.
#[derive(Default)]
pub struct CapturingSink {
    records: Mutex<Vec<CheckRecord>>,
}

impl CapturingSink {
    pub fn records(&self) -> Vec<CheckRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Text-mode rendering of everything captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(CheckRecord::raw_value).collect()
    }
}

impl DiagnosticSink for CapturingSink {
    fn emit(&self, record: &CheckRecord) -> ApplicationResult<()> {
        self.records.lock().unwrap().push(*record);
        Ok(())
    }
}

pub struct FailingSink;

impl DiagnosticSink for FailingSink {
    fn emit(&self, _record: &CheckRecord) -> ApplicationResult<()> {
        Err(ApplicationError::output("sink closed"))
    }
}

/// Cloneable in-memory writer for driving `ConsoleSink` in tests.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("utf-8 output")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
