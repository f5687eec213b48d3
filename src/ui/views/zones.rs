//! Protected zone views
//!
//! Shared by `vanillafy zones` and the guidance shown after a protected-zone
//! warning.

use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn render_list(out: &mut String, items: &[String], empty: &str, color: bool, unicode: bool) {
    if items.is_empty() {
        out.push_str(&format!("  {}\n", ColoredText::dim(empty).render(color)));
        return;
    }
    let bullet = Icon::Bullet.colored(color, unicode);
    for item in items {
        out.push_str(&format!("  {} {}\n", bullet, item));
    }
}

/// Protected folders, then suggested install locations.
pub fn render_zone_guidance(
    zones: &[PathBuf],
    safe_locations: &[String],
    color: bool,
    unicode: bool,
) -> String {
    let zones: Vec<String> = zones.iter().map(|z| z.display().to_string()).collect();
    let mut out = String::new();

    out.push_str(
        &ColoredText::warning("Protected folders (do not install here):")
            .bold()
            .render(color),
    );
    out.push('\n');
    render_list(
        &mut out,
        &zones,
        "(none resolved on this system)",
        color,
        unicode,
    );

    out.push('\n');
    out.push_str(
        &ColoredText::success("Suggested safe install locations:")
            .bold()
            .render(color),
    );
    out.push('\n');
    render_list(
        &mut out,
        safe_locations,
        "(none configured)",
        color,
        unicode,
    );

    out
}
