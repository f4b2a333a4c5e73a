//! Buffered TSV output for verification reports.
//!
//! Uses itoa for integer formatting to avoid allocation per line.

use crate::error::VerifyError;
use std::io::{BufWriter, Write};

/// Buffer size for ReportWriter (64KB default).
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Tab-separated report writer.
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new ReportWriter with default 64KB buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new ReportWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write a text field.
    #[inline]
    pub fn write_str(&mut self, field: &str) -> Result<(), VerifyError> {
        self.writer.write_all(field.as_bytes())?;
        Ok(())
    }

    /// Write an integer field.
    #[inline]
    pub fn write_usize(&mut self, value: usize) -> Result<(), VerifyError> {
        self.writer
            .write_all(self.itoa_buf.format(value).as_bytes())?;
        Ok(())
    }

    /// Write a tab character.
    #[inline]
    pub fn write_tab(&mut self) -> Result<(), VerifyError> {
        self.writer.write_all(b"\t")?;
        Ok(())
    }

    /// Write a newline character.
    #[inline]
    pub fn write_newline(&mut self) -> Result<(), VerifyError> {
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush the buffer.
    pub fn flush(&mut self) -> Result<(), VerifyError> {
        self.writer.flush()?;
        Ok(())
    }
}
