//! Zones command handler

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use vanillafy::infrastructure::ProcessEnvironment;

use crate::commands::Session;
use crate::ui::views::cleanup::render_header;
use crate::ui::views::zones::render_zone_guidance;

/// Print the protected folders present on this machine and the suggested
/// install locations.
pub fn cmd_zones(session: &Session) -> Result<ExitCode> {
    let ui = &session.ui;
    let zones: Vec<PathBuf> = session
        .config
        .protected_zones(&ProcessEnvironment)
        .present()
        .map(|zone| zone.to_path_buf())
        .collect();
    let safe = &session.config.guidance.safe_locations;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "zones",
                "command": "zones",
                "zones": zones.iter().map(|z| z.display().to_string()).collect::<Vec<_>>(),
                "safe_locations": safe,
            })
        );
    } else {
        print!(
            "{}",
            render_header("zones", session.game(), false, ui.color, ui.unicode)
        );
        print!(
            "{}",
            render_zone_guidance(&zones, safe, ui.color, ui.unicode)
        );
    }

    Ok(ExitCode::SUCCESS)
}
