//! Diagnostic log for troubleshooting, separate from the scan summary log.

use eyre::{Result, WrapErr, eyre};
use log::{LevelFilter, Record};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_DIR_ENV: &str = "PORTSCAN_LOG_DIR";
const LOG_FILE_NAME: &str = "portscan.log";

/// Route `log` records to the diagnostic log file. Returns the file's path.
pub fn init_logging() -> Result<PathBuf> {
    let log_path = get_log_file_path()?;
    let file = open_log_file(&log_path)?;
    let level = parse_level(std::env::var("RUST_LOG").ok().as_deref());

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}", format_record(record)))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("Logger already initialized")?;

    log::info!("[logging] initialized: path={} level={}", log_path.display(), level);
    Ok(log_path)
}

/// `$PORTSCAN_LOG_DIR/portscan.log`, or the platform log location
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(log_dir(std::env::var_os(LOG_DIR_ENV))?.join(LOG_FILE_NAME))
}

fn log_dir(dir_override: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = dir_override.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|home| home.join("Library/Logs/portscan"))
            .ok_or_else(|| eyre!("Could not find home directory"))
    } else {
        dirs::data_local_dir()
            .map(|data| data.join("portscan").join("logs"))
            .ok_or_else(|| eyre!("Could not find local data directory"))
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))
}

fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] {} - {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// `RUST_LOG` as a single level; module filters fall back to INFO
fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_default_log_dir() {
        let dir = log_dir(None).unwrap();
        assert!(dir.to_string_lossy().contains("portscan"));
        assert_eq!(log_dir(Some(OsString::new())).unwrap(), dir);
    }

    #[test]
    fn test_log_dir_override() {
        let dir = log_dir(Some(OsString::from("/tmp/portscan-logs"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/portscan-logs"));
    }

    #[test]
    fn test_log_file_name() {
        let path = get_log_file_path().unwrap();
        assert!(path.to_string_lossy().ends_with("portscan.log"));
    }

    #[test]
    fn test_open_log_file_creates_directories() {
        let dir = std::env::temp_dir().join(format!("portscan-logging-{}", std::process::id()));
        let path = dir.join("nested").join(LOG_FILE_NAME);

        open_log_file(&path).unwrap();
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("portscan::session")
                .args(format_args!("pass_failed: target=example.invalid"))
                .build(),
        );
        assert!(line.ends_with("[WARN] portscan::session - pass_failed: target=example.invalid"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("portscan=debug")), LevelFilter::Info);
    }
}
