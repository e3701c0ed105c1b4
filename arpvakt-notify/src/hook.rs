//! Alarm delivery to an external hook program.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use arpvakt_core::events::{AlarmEvent, AlarmKind};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("hook {program} failed: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Receives one call per deliverable alarm event.
pub trait NotificationSink {
    fn notify(&self, event: &AlarmEvent) -> Result<(), NotifyError>;
}

/// Positional arguments for the hook, per event kind:
/// `BindingMismatch -> (interface, mac, ip, realmac)`,
/// `UnknownMac | Denylisted | Allowlisted -> (interface, mac, ip)`.
/// Scan detections and learned bindings are log-only and return `None`.
pub fn positional_args(event: &AlarmEvent) -> Option<Vec<String>> {
    let mac = event.mac?;
    let ip = event.ip?;
    match event.kind {
        AlarmKind::BindingMismatch => {
            let real_mac = event.real_mac?;
            Some(vec![
                event.interface.clone(),
                mac.to_string(),
                ip.to_string(),
                real_mac.to_string(),
            ])
        }
        AlarmKind::UnknownMac | AlarmKind::Denylisted | AlarmKind::Allowlisted => Some(vec![
            event.interface.clone(),
            mac.to_string(),
            ip.to_string(),
        ]),
        AlarmKind::ScanDetected | AlarmKind::Learned => None,
    }
}

/// Runs the configured hook program once per deliverable event and waits
/// for it to finish, matching the sequential behavior operators script
/// against.
#[derive(Debug, Clone)]
pub struct ExecHook {
    program: PathBuf,
}

impl ExecHook {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for ExecHook {
    fn notify(&self, event: &AlarmEvent) -> Result<(), NotifyError> {
        let Some(args) = positional_args(event) else {
            return Ok(());
        };
        debug!(program = %self.program.display(), kind = event.kind.as_str(), "invoking hook");
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| NotifyError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            debug!(code = ?status.code(), "hook exited non-zero");
        }
        Ok(())
    }
}

/// Sink used when no hook is configured.
#[derive(Debug, Clone, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _event: &AlarmEvent) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpvakt_core::net::MacAddr;

    fn mac(s: &str) -> MacAddr {
        s.parse().unwrap()
    }

    #[test]
    fn mismatch_args_are_interface_mac_ip_realmac() {
        let event = AlarmEvent::binding_mismatch(
            "eth2",
            mac("00:11:22:33:44:55"),
            "192.168.1.99".parse().unwrap(),
            mac("00:11:22:33:44:55"),
        );
        let args = positional_args(&event).unwrap();
        assert_eq!(
            args,
            vec![
                "eth2".to_string(),
                "00:11:22:33:44:55".to_string(),
                "192.168.1.99".to_string(),
                "00:11:22:33:44:55".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_mac_args_are_interface_mac_ip() {
        let event =
            AlarmEvent::unknown_mac("eth0", mac("aa:bb:cc:dd:ee:ff"), "10.0.0.2".parse().unwrap());
        let args = positional_args(&event).unwrap();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], "eth0");
    }

    #[test]
    fn scan_and_learned_events_skip_the_hook() {
        assert!(positional_args(&AlarmEvent::scan_detected("eth0", 30)).is_none());
        let learned =
            AlarmEvent::learned("eth1", mac("aa:bb:cc:dd:ee:ff"), "10.0.0.3".parse().unwrap());
        assert!(positional_args(&learned).is_none());
    }

    #[test]
    fn missing_hook_program_reports_spawn_error() {
        let hook = ExecHook::new("/nonexistent/hook");
        let event =
            AlarmEvent::denylisted("eth0", mac("11:22:33:44:55:66"), "10.0.0.9".parse().unwrap());
        assert!(hook.notify(&event).is_err());
    }
}
