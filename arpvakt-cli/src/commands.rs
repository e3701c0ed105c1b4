use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use arpvakt_config::ArpvaktConfig;
use arpvakt_engine::{RunOptions, Runtime};
use arpvakt_notify::{ExecHook, NullSink};
use arpvakt_snapshot::ProcNeighborTable;
use arpvakt_telemetry::{EventLogger, MetricsRecorder};

/// ARP neighbor-table monitor: reconciles observed bindings against trusted
/// lists and raises alarms on spoofing or scan activity.
#[derive(Parser, Debug)]
#[command(name = "arpvakt", version, about)]
pub struct Cli {
    /// Configuration file; defaults to config/arpvakt.yaml plus ARPVAKT_*
    /// environment overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run exactly one cycle, then exit
    #[arg(short = 's', long)]
    pub single: bool,

    /// Disable colored terminal output
    #[arg(long = "no-color", alias = "nc")]
    pub no_color: bool,

    /// Disable static binding checks
    #[arg(long = "no-static", alias = "ns")]
    pub no_static: bool,

    /// Disable dynamic learning
    #[arg(long = "no-dynamic", alias = "nd")]
    pub no_dynamic: bool,

    /// Disable the denylist
    #[arg(long = "no-denylist", alias = "nb")]
    pub no_denylist: bool,

    /// Disable the allowlist
    #[arg(long = "no-allowlist", alias = "nw")]
    pub no_allowlist: bool,

    /// Disable scan detection
    #[arg(long = "no-scan", alias = "nS")]
    pub no_scan: bool,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            single: self.single,
            static_checks: !self.no_static,
            dynamic_learning: !self.no_dynamic,
            denylist: !self.no_denylist,
            allowlist: !self.no_allowlist,
            scan_detection: !self.no_scan,
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    // Configuration errors are the only fatal startup path besides the
    // instance lock: diagnose and exit non-zero before the loop starts.
    let config = match &cli.config {
        Some(path) => ArpvaktConfig::load_from_path(path)?,
        None => ArpvaktConfig::load()?,
    };

    EventLogger::init(config.telemetry.ansi && !cli.no_color);
    info!(version = env!("CARGO_PKG_VERSION"), "arpvakt starting");

    let metrics = MetricsRecorder::new();
    let options = cli.run_options();
    let source = ProcNeighborTable::new(&config.snapshot.source);

    match config.notify.hook.clone() {
        Some(hook) => {
            Runtime::new(&config, options, source, ExecHook::new(hook), metrics).run()?
        }
        None => Runtime::new(&config, options, source, NullSink, metrics).run()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn toggles_are_order_independent() {
        let cli = Cli::parse_from(["arpvakt", "--no-scan", "--single", "--no-static"]);
        let options = cli.run_options();
        assert!(options.single);
        assert!(!options.static_checks);
        assert!(!options.scan_detection);
        assert!(options.dynamic_learning);

        let cli = Cli::parse_from(["arpvakt", "--ns", "--nS"]);
        let options = cli.run_options();
        assert!(!options.static_checks);
        assert!(!options.scan_detection);
    }
}
