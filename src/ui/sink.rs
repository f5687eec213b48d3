//! Console event sink
//!
//! Renders cleanup events as human-readable lines.

use std::io::{self, Write};
use std::sync::Mutex;

use vanillafy::domain::ports::{CleanupEvent, CleanupEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::cleanup::{
    render_already_clean, render_completed, render_discovery, render_entry_failed,
    render_entry_removed, render_located, render_protected_zone, render_reconciled,
    render_removal_declined, render_removal_proposed,
};
use crate::ui::views::zones::render_zone_guidance;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    game: String,
    dry_run: bool,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext, game: impl Into<String>, dry_run: bool) -> Self {
        Self::with_writer(ui, game, dry_run, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(
        ui: &UiContext,
        game: impl Into<String>,
        dry_run: bool,
        writer: W,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            game: game.into(),
            dry_run,
            color: ui.color,
            unicode: ui.unicode,
        }
    }

    fn render(&self, event: CleanupEvent) -> String {
        let (color, unicode) = (self.color, self.unicode);
        match event {
            CleanupEvent::DiscoveryStarted { strategy, .. } => {
                render_discovery(&strategy, &self.game, color, unicode)
            }
            CleanupEvent::Located { target } => render_located(&target, &self.game, color, unicode),
            CleanupEvent::ProtectedZone { target, zone } => {
                render_protected_zone(&target, &zone, &self.game, color, unicode)
            }
            CleanupEvent::ZoneGuidance {
                zones,
                safe_locations,
            } => render_zone_guidance(&zones, &safe_locations, color, unicode),
            CleanupEvent::Reconciled {
                missing,
                extra,
                missing_hint,
            } => render_reconciled(&missing, &extra, &missing_hint, color, unicode),
            CleanupEvent::RemovalProposed { pass, names } => {
                render_removal_proposed(pass, &names, self.dry_run, color, unicode)
            }
            CleanupEvent::RemovalDeclined { pass, .. } => render_removal_declined(pass, color),
            CleanupEvent::EntryRemoved { name, .. } => render_entry_removed(&name, color, unicode),
            CleanupEvent::EntryFailed { name, reason, .. } => {
                render_entry_failed(&name, &reason, color, unicode)
            }
            CleanupEvent::AlreadyClean { pass } => render_already_clean(pass, color, unicode),
            CleanupEvent::Completed { deleted, failed } => {
                render_completed(deleted, failed, color, unicode)
            }
        }
    }
}

impl CleanupEventSink for ConsoleEventSink {
    fn on_event(&self, event: CleanupEvent) {
        let text = self.render(event);
        if text.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}
