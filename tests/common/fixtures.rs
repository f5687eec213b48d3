//! Test fixtures - a tiny game whose manifest is easy to reason about.

use std::path::Path;

/// Sentinel executable of the test game
pub const SENTINEL: &str = "game.exe";

/// Config for a two-entry manifest with no default protected zones.
pub const SMALL_GAME_CONFIG: &str = r#"
[game]
name = "TestGame"
sentinel = "game.exe"

[manifest]
entries = ["game.exe", "Data"]

[protected]
include_defaults = false

[guidance]
safe_locations = ["D:\\Games\\TestGame"]
missing_hint = "Reinstall TestGame to restore missing files."
"#;

/// Same game, but with `zone` marked as protected.
pub fn protected_config(zone: &Path) -> String {
    let zone = zone.display().to_string().replace('\\', "\\\\");
    SMALL_GAME_CONFIG.replace(
        "include_defaults = false",
        &format!("include_defaults = false\nextra = [\"{}\"]", zone),
    )
}
