pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod pretty;
pub mod reporter;
pub mod scan;
pub mod session;
pub mod summary;
pub mod target;
pub mod types;

// Re-export key types and functions at the crate root
pub use error::{ResolutionError, ScanError};
pub use reporter::Reporter;
pub use scan::{PortScanner, Preset, build_port_set, probe};
pub use session::{PresetSource, RunSummary, Session};
pub use summary::SummaryLog;
pub use target::{Target, resolve};
pub use types::{ProbeOutcome, ResolvedAddress, ScanResult};
pub use logging::{init_logging, get_log_file_path};
