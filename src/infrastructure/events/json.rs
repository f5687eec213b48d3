//! JSON Event Sink
//!
//! Outputs cleanup events as NDJSON for scripting and automation.

use crate::domain::ports::{CleanupEvent, CleanupEventSink};
use crate::domain::value_objects::DiscoveryStrategy;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn strategy_json(strategy: &DiscoveryStrategy) -> serde_json::Value {
    match strategy {
        DiscoveryStrategy::FullScan => serde_json::json!({ "kind": "full_scan" }),
        DiscoveryStrategy::SingleVolume(id) => {
            serde_json::json!({ "kind": "single_volume", "volume": id.to_string() })
        }
        DiscoveryStrategy::DirectPath(path) => {
            serde_json::json!({ "kind": "direct_path", "path": path.display().to_string() })
        }
    }
}

impl CleanupEventSink for JsonEventSink {
    fn on_event(&self, event: CleanupEvent) {
        let command = self.command;
        let json = match event {
            CleanupEvent::DiscoveryStarted { strategy, sentinel } => serde_json::json!({
                "event": "start",
                "command": command,
                "strategy": strategy_json(&strategy),
                "sentinel": sentinel,
            }),

            CleanupEvent::Located { target } => serde_json::json!({
                "event": "located",
                "command": command,
                "path": target.display().to_string(),
            }),

            CleanupEvent::ProtectedZone { target, zone } => serde_json::json!({
                "event": "protected_zone",
                "command": command,
                "path": target.display().to_string(),
                "zone": zone.display().to_string(),
            }),

            CleanupEvent::ZoneGuidance {
                zones,
                safe_locations,
            } => serde_json::json!({
                "event": "zone_guidance",
                "command": command,
                "zones": zones.iter().map(|z| z.display().to_string()).collect::<Vec<_>>(),
                "safe_locations": safe_locations,
            }),

            CleanupEvent::Reconciled {
                missing,
                extra,
                missing_hint,
            } => {
                let hint = if missing.is_empty() {
                    None
                } else {
                    Some(missing_hint)
                };
                serde_json::json!({
                    "event": "reconciled",
                    "command": command,
                    "missing": missing,
                    "extra": extra,
                    "hint": hint,
                })
            }

            CleanupEvent::RemovalProposed { pass, names } => serde_json::json!({
                "event": "removal_proposed",
                "command": command,
                "pass": pass.as_str(),
                "names": names,
            }),

            CleanupEvent::RemovalDeclined { pass, names } => serde_json::json!({
                "event": "removal_declined",
                "command": command,
                "pass": pass.as_str(),
                "names": names,
            }),

            CleanupEvent::EntryRemoved { pass, name } => serde_json::json!({
                "event": "item_deleted",
                "command": command,
                "pass": pass.as_str(),
                "name": name,
            }),

            CleanupEvent::EntryFailed { pass, name, reason } => serde_json::json!({
                "event": "item_error",
                "command": command,
                "pass": pass.as_str(),
                "name": name,
                "error": reason,
            }),

            CleanupEvent::AlreadyClean { pass } => serde_json::json!({
                "event": "clean",
                "command": command,
                "pass": pass.as_str(),
            }),

            CleanupEvent::Completed { deleted, failed } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "deleted": deleted,
                    "errors": failed,
                })
            }
        };

        self.write_event(json);
    }
}
