use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;

pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            None => Self::Stdout,
            Some(path) => Self::File(path),
        }
    }

    /// Stdout gets a trailing newline, a file gets the bare result.
    pub fn write(&self, result: &str) -> anyhow::Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", result)
                    .and_then(|_| stdout.flush())
                    .context("failed to write output to stdout")
            }
            Self::File(path) => fs::write(path, result)
                .with_context(|| format!("failed to write output to {}", path.display())),
        }
    }
}
