use eyre::{Result, WrapErr};
use portscan::cli::Cli;
use portscan::input::{self, InputMode, Prompter};
use portscan::pretty::{ConsoleReporter, print_error};
use portscan::{PortScanner, PresetSource, Session, SummaryLog};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = portscan::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    log::info!("================================================================================");
    log::info!("NEW SCAN SESSION STARTING");
    log::info!("================================================================================");

    match run(portscan::cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("[main] fatal: {:#}", e);
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every target was scanned
async fn run(args: Cli) -> Result<bool> {
    let mut prompter = Prompter::stdio();

    let targets = if let Some(path) = &args.input {
        input::read_targets(path)?
    } else if !args.targets.is_empty() {
        args.targets.clone()
    } else {
        match prompter.input_mode().wrap_err("Failed to read menu choice")? {
            InputMode::File => input::read_targets(Cli::default_target_list())?,
            InputMode::Single => vec![prompter.target().wrap_err("Failed to read target")?],
        }
    };

    let mut summary = SummaryLog::open(&args.log_file)?;

    let scanner = PortScanner::new()
        .with_timeout(Duration::from_millis(args.timeout_ms))
        .with_concurrency(args.concurrency);
    let session = Session::new(scanner).keep_going(args.keep_going);

    let mut fixed_preset = args.preset;
    let presets: &mut dyn PresetSource = match fixed_preset.as_mut() {
        Some(preset) => preset,
        None => &mut prompter,
    };

    let run = session
        .run(&targets, presets, &mut ConsoleReporter, &mut summary)
        .await
        .wrap_err("Scan aborted")?;

    Ok(run.failures.is_empty())
}
