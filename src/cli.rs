use crate::input::DEFAULT_TARGET_LIST;
use crate::scan::Preset;
use crate::summary::DEFAULT_SUMMARY_LOG;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portscan")]
#[command(about = "A concurrent TCP port scanner")]
pub struct Cli {
    /// Targets to scan (IP address, domain or http(s) URL). Prompts when empty
    pub targets: Vec<String>,

    /// Read targets from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Port group to scan for every target. Prompts per target when unset
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Per-port connect timeout in milliseconds
    #[arg(short, long, default_value = "2000")]
    pub timeout_ms: u64,

    /// Maximum probes connecting at once (unbounded when unset)
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// File the per-target summaries are appended to. Earlier runs' summaries are kept, not truncated
    #[arg(short = 'o', long, default_value = DEFAULT_SUMMARY_LOG)]
    pub log_file: PathBuf,

    /// Skip targets that fail to resolve or get an invalid preset instead of stopping
    #[arg(short, long)]
    pub keep_going: bool,
}

impl Cli {
    /// Target list used by the interactive file option
    pub fn default_target_list() -> PathBuf {
        PathBuf::from(DEFAULT_TARGET_LIST)
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
