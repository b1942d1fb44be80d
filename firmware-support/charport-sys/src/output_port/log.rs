// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
use crate::output_port::{ByteSink, OutputPort};

// The logger renders through core::fmt because ufmt formatting is not
// compatible with (dependencies of) the log crate.
use core::fmt::Write;
use log::LevelFilter;

/// A global logger instance to be used with the `log` crate.
///
/// Use `set_sink` to install the [`OutputPort`] to be used for logging.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `PortLogger` is `Send` and `Sync`, the underlying
/// [`OutputPort`] is not `Send` or `Sync`.
pub static mut LOGGER: PortLogger<OutputPort> = PortLogger::new();

/// Renders `log` records to a [`ByteSink`].
///
/// Instead of making a new logger, use `set_sink` on the [`struct@LOGGER`]
/// instance.
pub struct PortLogger<S> {
    sink: Option<S>,
    pub display_level: LevelFilter,
    pub display_source: LevelFilter,
}

impl<S: ByteSink> PortLogger<S> {
    pub const fn new() -> PortLogger<S> {
        PortLogger {
            sink: None,
            display_level: LevelFilter::Trace,
            display_source: LevelFilter::Trace,
        }
    }

    /// Install the sink that records are rendered to.
    pub fn set_sink(&mut self, sink: S) {
        self.sink = Some(sink);
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Render one record to the installed sink.
    ///
    /// Panics if no sink has been installed.
    pub fn write_record(&mut self, record: &log::Record) {
        let sink = match self.sink.as_mut() {
            Some(sink) => sink,
            None => panic!("Logger not set"),
        };

        let mut out = SinkWriter(sink);
        if record.level() <= self.display_level {
            write!(out, "{} | ", record.level()).unwrap();
        }
        if record.level() <= self.display_source {
            write!(
                out,
                "{}:{} - ",
                record.file().unwrap_or("<unknown>"),
                record.line().unwrap_or(0)
            )
            .unwrap();
        }
        writeln!(out, "{}", record.args()).unwrap();
    }
}

struct SinkWriter<'a, S>(&'a mut S);

impl<S: ByteSink> Write for SinkWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.0.write_byte(b);
        }
        Ok(())
    }
}

impl log::Log for PortLogger<OutputPort> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            // SAFETY: single thread of execution; only the global logger is
            // ever wired into the `log` facade.
            unsafe {
                (*core::ptr::addr_of_mut!(LOGGER)).write_record(record);
            }
        }
    }

    fn flush(&self) {}
}

unsafe impl<S> core::marker::Send for PortLogger<S> {}
unsafe impl<S> core::marker::Sync for PortLogger<S> {}
