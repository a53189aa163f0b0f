use anyhow::Result;
use std::io::{self, Stdout, Write};

/// Line-oriented output sink for scan progress and reports.
pub struct Writer<W: Write> {
    out: W,
}

impl Writer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Writer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write(&mut self, content: &str) -> Result<()> {
        writeln!(self.out, "{}", content)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
