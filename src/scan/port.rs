use crate::reporter::Reporter;
use crate::types::{ProbeOutcome, ResolvedAddress, ScanResult};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::sync::{Semaphore, mpsc};
use tokio::time::timeout;

const DEFAULT_PROBE_TIMEOUT_MS: u64 = 2000;

/// One bounded TCP connect attempt. Any failure, including the timeout,
/// means closed. An established connection is dropped immediately without
/// exchanging data.
pub async fn probe(address: ResolvedAddress, port: u16, tcp_timeout: Duration) -> bool {
    match timeout(tcp_timeout, TcpStream::connect(address.socket_addr(port))).await {
        Ok(Ok(stream)) => {
            drop(stream);
            true
        }
        Ok(Err(e)) => {
            log::trace!("[scan::port] probe_failed: addr={} port={} error={}", address, port, e);
            false
        }
        Err(_) => {
            log::trace!("[scan::port] probe_timed_out: addr={} port={}", address, port);
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortScanner {
    tcp_timeout: Duration,
    max_concurrent: Option<usize>,
}

impl Default for PortScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PortScanner {
    pub fn new() -> Self {
        Self {
            tcp_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            max_concurrent: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.tcp_timeout = timeout;
        self
    }

    /// Cap the number of probes connecting at once. `None` (the default)
    /// lets every probe of a pass connect immediately.
    pub fn with_concurrency(mut self, max_concurrent: Option<usize>) -> Self {
        self.max_concurrent = max_concurrent.filter(|&n| n > 0);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.tcp_timeout
    }

    /// Probe every port concurrently and wait for all of them.
    ///
    /// Each probe runs in its own task and reports exactly one outcome over
    /// the channel. The channel closes once the last task drops its sender,
    /// which is what ends the collection loop.
    pub async fn scan(
        &self,
        address: ResolvedAddress,
        ports: &[u16],
        reporter: &mut dyn Reporter,
    ) -> ScanResult {
        log::debug!("[scan::port] scan: addr={} port_count={} timeout={}ms concurrency={:?}",
            address, ports.len(), self.tcp_timeout.as_millis(), self.max_concurrent);

        reporter.scan_started(&address, ports.len());

        let scan_start = Instant::now();
        let (tx, mut rx) = mpsc::unbounded_channel::<ProbeOutcome>();
        let gate = self.max_concurrent.map(|n| Arc::new(Semaphore::new(n)));

        for &port in ports {
            let tx = tx.clone();
            let gate = gate.clone();
            let tcp_timeout = self.tcp_timeout;

            tokio::spawn(async move {
                // Held until the probe finishes
                let _permit = match gate {
                    Some(gate) => gate.acquire_owned().await.ok(),
                    None => None,
                };
                let open = probe(address, port, tcp_timeout).await;
                let _ = tx.send(ProbeOutcome { port, open });
            });
        }
        drop(tx);

        let mut open_ports = Vec::new();
        let mut outcomes = 0;
        while let Some(outcome) = rx.recv().await {
            outcomes += 1;
            if outcome.open {
                log::debug!("[scan::port] port_open: addr={} port={}", address, outcome.port);
                reporter.port_open(outcome.port);
                open_ports.push(outcome.port);
            }
        }

        let result = ScanResult {
            address,
            open_ports,
            outcomes,
            elapsed: scan_start.elapsed(),
        };

        log::info!("[scan::port] scan_completed: addr={} duration={}ms outcomes={} open={} closed={}",
            address, result.elapsed.as_millis(), result.outcomes,
            result.open_ports.len(), result.closed_count());

        reporter.scan_finished(&result);
        result
    }
}
