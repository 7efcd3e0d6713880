//! In-process capture of `log` records.
//!
//! The capture is a process-wide logger installed on first use. Tests run
//! in parallel, so each test filters the shared stream by something unique
//! to it (a model name, a footer) and takes only its own records.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// One captured log record.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Logger that keeps every record in memory.
pub struct LogCapture {
    records: Mutex<Vec<CapturedRecord>>,
}

static CAPTURE: LogCapture = LogCapture {
    records: Mutex::new(Vec::new()),
};

static INSTALL: Once = Once::new();

/// Install the capture as the global logger (once) and return it.
///
/// If another logger was installed first, nothing is captured.
pub fn log_capture() -> &'static LogCapture {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    &CAPTURE
}

impl LogCapture {
    /// Remove and return the records matching `keep`, in emission order.
    pub fn take_matching(&self, keep: impl Fn(&CapturedRecord) -> bool) -> Vec<CapturedRecord> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let (taken, rest): (Vec<_>, Vec<_>) = records.drain(..).partition(|r| keep(r));
        *records = rest;
        taken
    }
}

impl Log for LogCapture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let captured = CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(captured);
    }

    fn flush(&self) {}
}
