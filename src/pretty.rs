use crate::error::ScanError;
use crate::reporter::Reporter;
use crate::types::{ResolvedAddress, ScanResult};
use colored::Colorize;
use std::io::{self, Write};

pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

pub fn clear_console() {
    print!("{}", CLEAR_SCREEN);
    let _ = io::stdout().flush();
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub fn format_elapsed(result: &ScanResult) -> String {
    format!("{:.2}", result.elapsed.as_secs_f64())
}

/// Colored terminal output for a scan pass
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn scan_started(&mut self, address: &ResolvedAddress, _port_count: usize) {
        println!("{}", format!("\nScanning ports on IP address {}...", address).yellow());
    }

    fn port_open(&mut self, port: u16) {
        println!("{}", format!("\nPort {} is open.", port).green());
    }

    fn scan_finished(&mut self, result: &ScanResult) {
        println!("{}", format!("\nFinished scan | Took {} seconds", format_elapsed(result)).green());
    }

    fn pass_failed(&mut self, target: &str, error: &ScanError) {
        print_error(&format!("Skipping {}: {}", target, error));
    }
}
