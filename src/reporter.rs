use crate::error::ScanError;
use crate::types::{ResolvedAddress, ScanResult};

/// Receives live progress from a scan pass.
///
/// The orchestrator calls these from its single collection loop, so
/// implementations never see concurrent calls.
pub trait Reporter {
    /// A pass is about to launch its probes
    fn scan_started(&mut self, _address: &ResolvedAddress, _port_count: usize) {}

    /// A probe found `port` open; called as outcomes arrive
    fn port_open(&mut self, port: u16);

    /// Every probe of the pass has reported
    fn scan_finished(&mut self, _result: &ScanResult) {}

    /// A target's pass was abandoned and the run moves on
    fn pass_failed(&mut self, _target: &str, _error: &ScanError) {}
}

/// Discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn port_open(&mut self, _port: u16) {}
}

/// Keeps every notification, mostly useful in tests
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub started: Vec<(ResolvedAddress, usize)>,
    pub open: Vec<u16>,
    pub finished: usize,
    pub failed: Vec<String>,
}

impl Reporter for Recorder {
    fn scan_started(&mut self, address: &ResolvedAddress, port_count: usize) {
        self.started.push((*address, port_count));
    }

    fn port_open(&mut self, port: u16) {
        self.open.push(port);
    }

    fn scan_finished(&mut self, _result: &ScanResult) {
        self.finished += 1;
    }

    fn pass_failed(&mut self, target: &str, _error: &ScanError) {
        self.failed.push(target.to_string());
    }
}
