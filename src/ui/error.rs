//! Error and warning formatting for stderr

use vanillafy::config::ConfigWarning;
use vanillafy::VanillafyError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const CONFIG_HINT: &str = "Fix the configuration file or remove it to use the built-in defaults.";
const MENU_HINT: &str = "Run again and enter 1, 2 or 3, or pass --scan-all, --volume or --path.";

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(color, unicode),
        ColoredText::error(err.to_string()).bold().render(color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(color, unicode),
            cause
        ));
    }

    let hint = match err.downcast_ref::<VanillafyError>() {
        Some(VanillafyError::InvalidConfig { .. }) => Some(CONFIG_HINT),
        Some(VanillafyError::InvalidMenuChoice(_)) => Some(MENU_HINT),
        _ => None,
    };
    if let Some(hint) = hint {
        out.push_str(&format!("  {}\n", ColoredText::dim(hint).render(color)));
    }

    out
}

pub fn format_config_warning(warning: &ConfigWarning, color: bool, unicode: bool) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} {}: unknown config key '{}'",
        Icon::Warning.colored(color, unicode),
        location,
        warning.key
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    out.push('\n');
    out
}
