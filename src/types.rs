use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Literal IP address every probe of one scan pass dials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedAddress(IpAddr);

impl ResolvedAddress {
    pub fn new(ip: IpAddr) -> Self {
        Self(ip)
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }

    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::new(self.0, port)
    }
}

impl From<IpAddr> for ResolvedAddress {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub port: u16,
    pub open: bool,
}

/// Aggregate of one scan pass, built once every probe has reported
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub address: ResolvedAddress,
    /// Open ports in the order their outcomes arrived
    pub open_ports: Vec<u16>,
    pub outcomes: usize,
    pub elapsed: Duration,
}

impl ScanResult {
    pub fn closed_count(&self) -> usize {
        self.outcomes - self.open_ports.len()
    }

    /// Comma separated open ports, e.g. `80, 443`
    pub fn open_ports_display(&self) -> String {
        self.open_ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
