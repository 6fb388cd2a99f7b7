//! Where raw targets and preset selections come from: a target list file
//! or interactive prompts.

use crate::error::ScanError;
use crate::pretty::CLEAR_SCREEN;
use crate::scan::Preset;
use crate::types::ResolvedAddress;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub const DEFAULT_TARGET_LIST: &str = "input.txt";

/// Read one target per line, skipping blank lines
pub fn read_targets(path: impl AsRef<Path>) -> Result<Vec<String>, ScanError> {
    let path = path.as_ref();
    let input_error = |source: io::Error| ScanError::Input { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(input_error)?;
    let targets = parse_targets(BufReader::new(file)).map_err(input_error)?;

    log::debug!("[input] read_targets: path={} count={}", path.display(), targets.len());
    Ok(targets)
}

pub fn parse_targets(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let target = line.trim();
        if !target.is_empty() {
            targets.push(target.to_string());
        }
    }
    Ok(targets)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Single,
    File,
}

/// Interactive menus over any reader/writer pair
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), true)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self { reader, writer, clear_screen }
    }

    /// Anything other than `2` selects a single target
    pub fn input_mode(&mut self) -> io::Result<InputMode> {
        self.clear()?;
        writeln!(self.writer, "Do you want to scan a single target or a file with multiple targets?\n")?;
        writeln!(self.writer, "[1] Single target")?;
        writeln!(self.writer, "[2] Multiple targets from a file")?;
        writeln!(self.writer)?;

        Ok(match self.read_line()?.trim() {
            "2" => InputMode::File,
            _ => InputMode::Single,
        })
    }

    pub fn target(&mut self) -> io::Result<String> {
        self.clear()?;
        writeln!(self.writer, "Enter the IP address, domain or URL to scan:")?;
        writeln!(self.writer)?;
        Ok(self.read_line()?.trim().to_string())
    }

    pub fn preset(&mut self, address: &ResolvedAddress) -> Result<Preset, ScanError> {
        let selector = self.preset_selector(address).map_err(|source| ScanError::Input {
            path: "<stdin>".into(),
            source,
        })?;
        selector.parse()
    }

    fn preset_selector(&mut self, address: &ResolvedAddress) -> io::Result<String> {
        self.clear()?;
        writeln!(self.writer, "\nWhat group of ports do you want to scan for {}?\n", address)?;
        writeln!(self.writer, "[1] Every port (SLOW)")?;
        writeln!(self.writer, "[2] Basic ports")?;
        writeln!(self.writer, "[3] Web ports")?;
        writeln!(self.writer)?;
        self.read_line()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.writer, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.writer.flush()?;
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::net::{IpAddr, Ipv4Addr};

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn test_parse_targets_skips_blank_lines() {
        let input = "example.com\n\n  https://example.org/path  \r\n203.0.113.5\n   \n";
        let targets = parse_targets(Cursor::new(input)).unwrap();
        assert_eq!(targets, vec!["example.com", "https://example.org/path", "203.0.113.5"]);
    }

    #[test]
    fn test_read_targets_from_file() {
        let path = std::env::temp_dir().join(format!("portscan-targets-{}.txt", std::process::id()));
        fs::write(&path, "127.0.0.1\nlocalhost\n").unwrap();

        let targets = read_targets(&path).unwrap();
        assert_eq!(targets, vec!["127.0.0.1", "localhost"]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_targets_missing_file() {
        let err = read_targets("/nonexistent/portscan/input.txt").unwrap_err();
        assert!(matches!(err, ScanError::Input { .. }));
    }

    #[test]
    fn test_input_mode_menu() {
        assert_eq!(prompter("2\n").input_mode().unwrap(), InputMode::File);
        assert_eq!(prompter("1\n").input_mode().unwrap(), InputMode::Single);
        assert_eq!(prompter("banana\n").input_mode().unwrap(), InputMode::Single);
        assert_eq!(prompter("").input_mode().unwrap(), InputMode::Single);
    }

    #[test]
    fn test_target_prompt() {
        let mut prompter = prompter("  https://example.com/login \n");
        assert_eq!(prompter.target().unwrap(), "https://example.com/login");

        let shown = String::from_utf8(prompter.writer).unwrap();
        assert!(shown.contains("Enter the IP address, domain or URL to scan:"));
    }

    #[test]
    fn test_preset_prompt() {
        let address = ResolvedAddress::new(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 5)));

        let mut menu = prompter("3\n");
        assert_eq!(menu.preset(&address).unwrap(), Preset::Web);
        let shown = String::from_utf8(menu.writer).unwrap();
        assert!(shown.contains("What group of ports do you want to scan for 203.0.113.5?"));
        assert!(shown.contains("[1] Every port (SLOW)"));

        let err = prompter("9\n").preset(&address).unwrap_err();
        assert!(matches!(err, ScanError::InvalidPreset(_)));
    }

    #[test]
    fn test_clear_screen_written_when_enabled() {
        let mut prompter = Prompter::new(Cursor::new(b"1\n".to_vec()), Vec::new(), true);
        prompter.input_mode().unwrap();
        assert!(String::from_utf8(prompter.writer).unwrap().starts_with(CLEAR_SCREEN));
    }
}
