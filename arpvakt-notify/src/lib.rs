//! # arpvakt-notify
//!
//! External notification boundary. Alarm events are handed to a
//! [`NotificationSink`]; the production sink executes a configured hook
//! program with positional arguments keyed by event kind, and whatever the
//! hook does with them (paging, firewalling, logging) is outside the core.

mod hook;

pub use hook::{positional_args, ExecHook, NotificationSink, NotifyError, NullSink};
