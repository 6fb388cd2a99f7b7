use crate::error::ScanError;
use crate::input::Prompter;
use crate::reporter::Reporter;
use crate::scan::{PortScanner, Preset, build_port_set};
use crate::summary::SummaryLog;
use crate::target;
use crate::types::{ResolvedAddress, ScanResult};
use std::io::{BufRead, Write};

/// Supplies the preset for each pass once its target is resolved
pub trait PresetSource {
    fn select(&mut self, address: &ResolvedAddress) -> Result<Preset, ScanError>;
}

impl PresetSource for Preset {
    fn select(&mut self, _address: &ResolvedAddress) -> Result<Preset, ScanError> {
        Ok(*self)
    }
}

impl<R: BufRead, W: Write> PresetSource for Prompter<R, W> {
    fn select(&mut self, address: &ResolvedAddress) -> Result<Preset, ScanError> {
        self.preset(address)
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub passes: Vec<ScanResult>,
    pub failures: Vec<(String, ScanError)>,
}

/// Scans targets one after another, one full pass per target
pub struct Session {
    scanner: PortScanner,
    keep_going: bool,
}

impl Session {
    pub fn new(scanner: PortScanner) -> Self {
        Self { scanner, keep_going: false }
    }

    /// Abandon only the failing target's pass on resolution or preset
    /// errors instead of the whole run
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub async fn run(
        &self,
        targets: &[String],
        presets: &mut dyn PresetSource,
        reporter: &mut dyn Reporter,
        summary: &mut SummaryLog,
    ) -> Result<RunSummary, ScanError> {
        log::info!("[session] run: targets={} keep_going={} summary={}",
            targets.len(), self.keep_going, summary.path().display());

        let mut run = RunSummary::default();
        for raw in targets {
            match self.pass(raw, presets, reporter).await {
                Ok(result) => {
                    summary.record(&result)?;
                    run.passes.push(result);
                }
                Err(e) if self.keep_going && e.is_per_target() => {
                    log::warn!("[session] pass_failed: target={} error={}", raw, e);
                    reporter.pass_failed(raw, &e);
                    run.failures.push((raw.clone(), e));
                }
                Err(e) => {
                    log::error!("[session] run_aborted: target={} error={}", raw, e);
                    return Err(e);
                }
            }
        }

        log::info!("[session] run_completed: passes={} failures={}",
            run.passes.len(), run.failures.len());
        Ok(run)
    }

    async fn pass(
        &self,
        raw: &str,
        presets: &mut dyn PresetSource,
        reporter: &mut dyn Reporter,
    ) -> Result<ScanResult, ScanError> {
        let address = target::resolve(raw).await?;
        let preset = presets.select(&address)?;
        let ports = build_port_set(preset);

        log::info!("[session] pass: target={} addr={} preset={} ports={}",
            raw, address, preset, ports.len());

        Ok(self.scanner.scan(address, &ports, reporter).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Hands out scripted selectors in order
    struct Scripted(VecDeque<&'static str>);

    impl PresetSource for Scripted {
        fn select(&mut self, _address: &ResolvedAddress) -> Result<Preset, ScanError> {
            self.0.pop_front().unwrap_or("").parse()
        }
    }

    fn temp_log(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("portscan-session-{}-{}.txt", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    fn session() -> Session {
        Session::new(PortScanner::new().with_timeout(Duration::from_millis(300)))
    }

    fn targets(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_scans_each_target() {
        let path = temp_log("each");
        let mut summary = SummaryLog::open(&path).unwrap();
        let mut recorder = Recorder::default();

        let run = session()
            .run(&targets(&["127.0.0.1", "http://127.0.0.1/"]), &mut Preset::Basic, &mut recorder, &mut summary)
            .await
            .unwrap();

        assert_eq!(run.passes.len(), 2);
        assert!(run.failures.is_empty());
        assert!(run.passes.iter().all(|p| p.outcomes == 13));
        assert_eq!(recorder.finished, 2);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("127.0.0.1 has these ports open: ").count(), 2);
        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_resolution_failure_aborts_run() {
        let path = temp_log("abort");
        let mut summary = SummaryLog::open(&path).unwrap();
        let mut recorder = Recorder::default();

        let err = session()
            .run(&targets(&["http://", "127.0.0.1"]), &mut Preset::Basic, &mut recorder, &mut summary)
            .await
            .unwrap_err();

        assert!(matches!(err, ScanError::Resolution(_)));
        assert!(recorder.started.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_keep_going_skips_failed_targets() {
        let path = temp_log("keep-going");
        let mut summary = SummaryLog::open(&path).unwrap();
        let mut recorder = Recorder::default();
        let mut presets = Scripted(VecDeque::from(["7", "basic"]));

        let run = session()
            .keep_going(true)
            .run(&targets(&["http://", "127.0.0.1", "127.0.0.1"]), &mut presets, &mut recorder, &mut summary)
            .await
            .unwrap();

        assert_eq!(run.passes.len(), 1);
        assert_eq!(run.failures.len(), 2);
        assert!(matches!(run.failures[0].1, ScanError::Resolution(_)));
        assert!(matches!(run.failures[1].1, ScanError::InvalidPreset(_)));
        assert_eq!(recorder.failed, vec!["http://", "127.0.0.1"]);
        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_invalid_preset_aborts_run_by_default() {
        let path = temp_log("preset");
        let mut summary = SummaryLog::open(&path).unwrap();
        let mut presets = Scripted(VecDeque::from(["0"]));

        let err = session()
            .run(&targets(&["127.0.0.1"]), &mut presets, &mut Recorder::default(), &mut summary)
            .await
            .unwrap_err();

        assert!(matches!(err, ScanError::InvalidPreset(_)));
        let _ = fs::remove_file(&path);
    }
}
