//! Poll-loop runtime: one cycle of snapshot, screen, learn, classify,
//! detect, dispatch, then the interval-controlled sleep.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use opentelemetry::KeyValue;
use tracing::{debug, info, warn};

use arpvakt_config::ArpvaktConfig;
use arpvakt_core::events::{AlarmEvent, AlarmKind};
use arpvakt_core::interval::IntervalController;
use arpvakt_detection::{
    BindingStore, Classifier, DenyAllowFilter, FilterList, LearningEngine, ScanDetector,
};
use arpvakt_notify::NotificationSink;
use arpvakt_snapshot::SnapshotSource;
use arpvakt_telemetry::{EventLogger, LogSinks, MetricsRecorder};

use crate::engine::error::EngineError;
use crate::engine::lock::InstanceLock;

/// Feature toggles for one run, layered over the configuration by the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Run exactly one cycle, then exit without sleeping.
    pub single: bool,
    pub static_checks: bool,
    pub dynamic_learning: bool,
    pub denylist: bool,
    pub allowlist: bool,
    pub scan_detection: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            single: false,
            static_checks: true,
            dynamic_learning: true,
            denylist: true,
            allowlist: true,
            scan_detection: true,
        }
    }
}

/// What one cycle observed and decided.
#[derive(Debug)]
pub struct CycleReport {
    pub events: Vec<AlarmEvent>,
    /// True when any event in the cycle counts as an alarm.
    pub alarmed: bool,
    /// True when the snapshot source was unreadable and checks were skipped.
    pub skipped: bool,
}

impl CycleReport {
    fn skipped() -> Self {
        Self {
            events: Vec::new(),
            alarmed: false,
            skipped: true,
        }
    }
}

/// Coordinates the monitor: owns the binding stores, the filter, the scan
/// detector, the interval controller, and the telemetry sinks. Generic over
/// the snapshot source and the notification sink, so tests drive it with
/// in-memory implementations.
pub struct Runtime<S: SnapshotSource, N: NotificationSink> {
    options: RunOptions,
    source: S,
    sink: N,
    static_interfaces: Vec<String>,
    dynamic_interfaces: Vec<String>,
    static_store: BindingStore,
    dynamic_store: BindingStore,
    filter: DenyAllowFilter,
    scan: ScanDetector,
    interval: IntervalController,
    sinks: LogSinks,
    metrics: MetricsRecorder,
    lock_file: Option<PathBuf>,
}

impl<S: SnapshotSource, N: NotificationSink> Runtime<S, N> {
    /// Builds the runtime from validated configuration. Missing list files
    /// degrade the corresponding feature to zero entries; only the
    /// configuration itself can abort startup.
    pub fn new(
        config: &ArpvaktConfig,
        options: RunOptions,
        source: S,
        sink: N,
        metrics: MetricsRecorder,
    ) -> Self {
        let static_store = if options.static_checks {
            load_bindings(&config.checks.static_mode.bindings_file)
        } else {
            BindingStore::new()
        };

        let deny = if options.denylist {
            load_filter_list(&config.checks.denylist_file, "denylist")
        } else {
            FilterList::default()
        };
        let allow = if options.allowlist {
            load_filter_list(&config.checks.allowlist_file, "allowlist")
        } else {
            FilterList::default()
        };

        let scan_interfaces = if options.scan_detection {
            config.scan.interfaces.clone()
        } else {
            Vec::new()
        };

        Self {
            source,
            sink,
            static_interfaces: config.checks.static_mode.interfaces.clone(),
            dynamic_interfaces: config.checks.dynamic_mode.interfaces.clone(),
            static_store,
            // Cleared at process start for interfaces in dynamic mode;
            // grows append-only from here.
            dynamic_store: BindingStore::new(),
            filter: DenyAllowFilter::new(deny, allow),
            scan: ScanDetector::new(scan_interfaces, config.scan.threshold as usize),
            interval: IntervalController::new(config.intervals.normal(), config.intervals.attack()),
            sinks: LogSinks::open(
                config.telemetry.general_log.as_deref(),
                config.telemetry.denylist_log.as_deref(),
                config.telemetry.allowlist_log.as_deref(),
                config.telemetry.scan_log.as_deref(),
            ),
            metrics,
            lock_file: config.lock_file.clone(),
            options,
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Runs until externally terminated, or for exactly one cycle in
    /// single-run mode.
    pub fn run(mut self) -> Result<(), EngineError> {
        let _lock = match &self.lock_file {
            Some(path) => Some(InstanceLock::acquire(path)?),
            None => None,
        };

        info!(single = self.options.single, "starting neighbor-table monitor");
        loop {
            let report = self.run_cycle();
            if self.options.single {
                info!("single-run mode complete");
                return Ok(());
            }
            let sleep_for = self.schedule_next(&report);
            debug!(
                state = ?self.interval.state(),
                seconds = sleep_for.as_secs(),
                "sleeping until next cycle"
            );
            thread::sleep(sleep_for);
        }
    }

    /// One full pass: snapshot, deny/allow screen, dynamic learn+classify,
    /// static classify, scan detection, then event dispatch.
    pub fn run_cycle(&mut self) -> CycleReport {
        self.metrics.inc_processed_cycles();
        self.log_inert_features();

        let snapshot = match self.source.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(%err, "neighbor table unavailable, skipping this cycle's checks");
                return CycleReport::skipped();
            }
        };
        self.metrics.neighbor_rows.observe(snapshot.rows().len() as f64);

        let mut events = Vec::new();

        let screened = self.filter.screen(snapshot.working_set());
        events.extend(screened.events);
        let working_set = screened.retained;

        if self.options.dynamic_learning && !self.dynamic_interfaces.is_empty() {
            let learner = LearningEngine::new(&self.dynamic_store, &self.dynamic_interfaces);
            events.extend(learner.learn(&working_set));
            let classifier = Classifier::new(&self.dynamic_store, &self.dynamic_interfaces);
            events.extend(classifier.classify(&working_set));
        }

        if self.options.static_checks && !self.static_interfaces.is_empty() {
            let classifier = Classifier::new(&self.static_store, &self.static_interfaces);
            events.extend(classifier.classify(&working_set));
        }

        events.extend(self.scan.inspect(&snapshot));

        let alarmed = self.dispatch(&events);
        CycleReport {
            events,
            alarmed,
            skipped: false,
        }
    }

    /// Applies the interval transition for a finished cycle and returns
    /// the sleep to take before the next one.
    pub fn schedule_next(&mut self, report: &CycleReport) -> Duration {
        self.interval.on_cycle_end(report.alarmed)
    }

    fn dispatch(&mut self, events: &[AlarmEvent]) -> bool {
        let mut alarmed = false;
        for event in events {
            if event.is_alarm() {
                alarmed = true;
                self.metrics.alarms_total.inc();
            }
            if event.kind == AlarmKind::Learned {
                self.metrics.learned_total.inc();
            }
            EventLogger::log_event(event.kind.as_str(), event_metadata(event));
            self.sinks.record(event);
            if let Err(err) = self.sink.notify(event) {
                warn!(%err, "notification hook failed");
            }
        }
        alarmed
    }

    fn log_inert_features(&self) {
        if !self.options.static_checks {
            info!("static checking disabled");
        }
        if !self.options.dynamic_learning {
            info!("dynamic learning disabled");
        }
        if !self.options.denylist {
            info!("denylist disabled");
        }
        if !self.options.allowlist {
            info!("allowlist disabled");
        }
        if !self.options.scan_detection {
            info!("scan detection disabled");
        }
    }
}

fn load_bindings(path: &Path) -> BindingStore {
    match BindingStore::load_path(path) {
        Ok(store) => {
            info!(path = %path.display(), bindings = store.len(), "static bindings loaded");
            store
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "binding list unreadable, static checking degraded");
            BindingStore::new()
        }
    }
}

fn load_filter_list(path: &Path, which: &str) -> FilterList {
    match FilterList::load_path(path) {
        Ok(list) => {
            debug!(path = %path.display(), rules = list.len(), "{which} loaded");
            list
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "{which} unreadable, degraded to zero rules");
            FilterList::default()
        }
    }
}

fn event_metadata(event: &AlarmEvent) -> Vec<KeyValue> {
    let mut metadata = vec![KeyValue::new("interface", event.interface.clone())];
    if let Some(mac) = event.mac {
        metadata.push(KeyValue::new("mac", mac.to_string()));
    }
    if let Some(ip) = event.ip {
        metadata.push(KeyValue::new("ip", ip.to_string()));
    }
    if let Some(real_mac) = event.real_mac {
        metadata.push(KeyValue::new("real_mac", real_mac.to_string()));
    }
    if let Some(count) = event.count {
        metadata.push(KeyValue::new("count", count as i64));
    }
    metadata
}
