use std::io::{self, Stderr, Stdout, Write};

/// Process output for the command line wrapper. Codes go to stdout,
/// messages about failures go to stderr.
pub struct OtpWriter<O = Stdout, E = Stderr> {
    pub out: O,
    pub err: E,
}

impl OtpWriter {
    pub fn new() -> Self {
        OtpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for OtpWriter {
    fn default() -> Self {
        OtpWriter::new()
    }
}

impl<O: Write, E: Write> OtpWriter<O, E> {
    pub fn with_streams(out: O, err: E) -> Self {
        OtpWriter { out, err }
    }
}

pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);
}

// Write failures are logged, not surfaced.
impl<O: Write, E: Write> OutErr for OtpWriter<O, E> {
    fn write_err(&mut self, s: &str) {
        let result = self
            .err
            .write_all(s.as_bytes())
            .and_then(|_| self.err.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write to stderr");
        }
    }

    fn write(&mut self, s: &str) {
        let result = self
            .out
            .write_all(s.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write to stdout");
        }
    }
}
