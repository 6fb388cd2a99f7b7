pub mod port;
pub mod preset;

pub use port::{PortScanner, probe};
pub use preset::{Preset, build_port_set};
