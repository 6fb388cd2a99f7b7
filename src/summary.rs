use crate::error::ScanError;
use crate::types::ScanResult;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_SUMMARY_LOG: &str = "log.txt";

/// Append-only log holding one summary line per scan pass
#[derive(Debug)]
pub struct SummaryLog {
    path: PathBuf,
    file: File,
}

impl SummaryLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| ScanError::SummaryLog { path: path.clone(), source })?;

        log::debug!("[summary] opened: path={}", path.display());
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&mut self, result: &ScanResult) -> Result<(), ScanError> {
        writeln!(self.file, "{}\n", summary_line(result))
            .and_then(|_| self.file.flush())
            .map_err(|source| ScanError::SummaryLog { path: self.path.clone(), source })
    }
}

pub fn summary_line(result: &ScanResult) -> String {
    format!("{} has these ports open: {}", result.address, result.open_ports_display())
}
