//! Output surfaces for rendered sink lines.
use std::io::{self, Write};

/// Destination for rendered log lines.
pub trait LineWriter: Send + Sync {
    /// Writes one line, followed by a newline.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter;

impl LineWriter for StdoutWriter {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// Keeps lines in memory; used by tests to observe what the sink printed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryWriter {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemoryWriter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl LineWriter for MemoryWriter {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
