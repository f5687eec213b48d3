//! Cleanup views
//!
//! One render function per kind of cleanup message. All of them return the
//! text to print, newline-terminated, so they can be snapshot tested.

use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use vanillafy::domain::ports::CleanupPass;
use vanillafy::{AbortReason, DiscoveryStrategy, Verification};

fn line(icon: Icon, text: impl AsRef<str>, color: bool, unicode: bool) -> String {
    format!("{} {}\n", icon.colored(color, unicode), text.as_ref())
}

fn bullets(names: &[String], color: bool, unicode: bool) -> String {
    let bullet = Icon::Bullet.colored(color, unicode);
    names
        .iter()
        .map(|name| format!("  {} {}\n", bullet, name))
        .collect()
}

pub fn render_header(
    command: &str,
    game: &str,
    dry_run: bool,
    color: bool,
    unicode: bool,
) -> String {
    let (icon, title) = match (command, dry_run) {
        ("clean", true) => (Icon::Clean, "vanillafy clean (dry run)"),
        ("clean", false) => (Icon::Clean, "vanillafy clean"),
        ("zones", _) => (Icon::Shield, "vanillafy zones"),
        _ => (Icon::Check, "vanillafy verify"),
    };
    CommandHeader::new(icon, title)
        .row("Game", game)
        .render(color, unicode)
}

pub fn render_discovery(
    strategy: &DiscoveryStrategy,
    game: &str,
    color: bool,
    unicode: bool,
) -> String {
    let text = match strategy {
        DiscoveryStrategy::FullScan => format!("Scanning every volume for {}...", game),
        DiscoveryStrategy::SingleVolume(id) => format!("Scanning volume {} for {}...", id, game),
        DiscoveryStrategy::DirectPath(path) => {
            format!("Checking {} for {}...", path.display(), game)
        }
    };
    line(Icon::Progress, text, color, unicode)
}

pub fn render_located(target: &Path, game: &str, color: bool, unicode: bool) -> String {
    line(
        Icon::Success,
        format!("{} installation found: {}", game, target.display()),
        color,
        unicode,
    )
}

pub fn render_protected_zone(
    target: &Path,
    zone: &Path,
    game: &str,
    color: bool,
    unicode: bool,
) -> String {
    let headline = ColoredText::warning(format!(
        "{} is installed in a protected folder: {}",
        game,
        target.display()
    ))
    .bold()
    .render(color);

    let mut out = line(Icon::Warning, headline, color, unicode);
    out.push_str(&format!(
        "  {} inside {}\n",
        Icon::Arrow.colored(color, unicode),
        zone.display()
    ));
    out.push_str(
        "  This location is not suitable for a modded install and may cause unknown issues.\n",
    );
    out
}

pub fn render_reconciled(
    missing: &[String],
    extra: &[String],
    missing_hint: &str,
    color: bool,
    unicode: bool,
) -> String {
    let mut out = String::new();

    if missing.is_empty() {
        out.push_str(&line(
            Icon::Success,
            "All base game files are present.",
            color,
            unicode,
        ));
    } else {
        out.push_str(&line(
            Icon::Warning,
            "Missing files detected:",
            color,
            unicode,
        ));
        out.push_str(&bullets(missing, color, unicode));
        out.push_str(&format!(
            "  {}\n",
            ColoredText::info(missing_hint).render(color)
        ));
    }

    if extra.is_empty() {
        out.push_str(&line(
            Icon::Success,
            "No extra files found.",
            color,
            unicode,
        ));
    } else {
        out.push_str(&line(
            Icon::Warning,
            "Extra files detected:",
            color,
            unicode,
        ));
        out.push_str(&bullets(extra, color, unicode));
    }

    out
}

/// Initial-pass extras were already listed with the reconciliation, so only
/// the enforcement pass lists its entries again.
pub fn render_removal_proposed(
    pass: CleanupPass,
    names: &[String],
    dry_run: bool,
    color: bool,
    unicode: bool,
) -> String {
    match (pass, dry_run) {
        (CleanupPass::Initial, true) => line(
            Icon::Arrow,
            format!("Would remove {} entries (dry run).", names.len()),
            color,
            unicode,
        ),
        (CleanupPass::Initial, false) => String::new(),
        (CleanupPass::Enforcement, _) => {
            let mut out = line(
                Icon::Warning,
                "Non-whitelisted files and folders detected:",
                color,
                unicode,
            );
            out.push_str(&bullets(names, color, unicode));
            out
        }
    }
}

pub fn render_removal_declined(pass: CleanupPass, color: bool) -> String {
    let text = match pass {
        CleanupPass::Initial => "Extra files were not removed.",
        CleanupPass::Enforcement => "Non-whitelisted items were not removed.",
    };
    format!("{}\n", ColoredText::dim(text).render(color))
}

pub fn render_entry_removed(name: &str, color: bool, unicode: bool) -> String {
    format!(
        "  {} Deleted: {}\n",
        Icon::Success.colored(color, unicode),
        name
    )
}

pub fn render_entry_failed(name: &str, reason: &str, color: bool, unicode: bool) -> String {
    format!(
        "  {} Failed to delete {}: {}\n",
        Icon::Error.colored(color, unicode),
        name,
        ColoredText::error(reason).render(color)
    )
}

pub fn render_already_clean(pass: CleanupPass, color: bool, unicode: bool) -> String {
    match pass {
        CleanupPass::Initial => String::new(),
        CleanupPass::Enforcement => line(
            Icon::Success,
            "Directory only contains whitelisted entries.",
            color,
            unicode,
        ),
    }
}

pub fn render_completed(deleted: usize, failed: usize, color: bool, unicode: bool) -> String {
    if failed == 0 {
        let text = ColoredText::success(format!("Cleanup complete: {} deleted.", deleted))
            .bold()
            .render(color);
        line(Icon::Success, text, color, unicode)
    } else {
        let text = ColoredText::warning(format!(
            "Cleanup finished with failures: {} deleted, {} failed.",
            deleted, failed
        ))
        .bold()
        .render(color);
        line(Icon::Warning, text, color, unicode)
    }
}

pub fn render_abort(reason: &AbortReason, game: &str, color: bool, unicode: bool) -> String {
    match reason {
        AbortReason::Discovery(err) => line(
            Icon::Error,
            ColoredText::error(format!("No {} installation found: {}", game, err)).render(color),
            color,
            unicode,
        ),
        AbortReason::ProtectedZoneDeclined { .. } => line(
            Icon::Arrow,
            "Cleanup cancelled. Nothing was changed.",
            color,
            unicode,
        ),
        AbortReason::Unreadable { .. } => line(
            Icon::Error,
            ColoredText::error(reason.to_string()).render(color),
            color,
            unicode,
        ),
    }
}

/// Final line of `vanillafy verify`.
pub fn render_verification(verification: &Verification, color: bool, unicode: bool) -> String {
    let result = &verification.reconciliation;
    if result.is_conforming() {
        line(
            Icon::Success,
            ColoredText::success("Installation matches the manifest.")
                .bold()
                .render(color),
            color,
            unicode,
        )
    } else {
        line(
            Icon::Warning,
            ColoredText::warning(format!(
                "{} missing, {} extra.",
                result.missing.len(),
                result.extra.len()
            ))
            .bold()
            .render(color),
            color,
            unicode,
        )
    }
}
