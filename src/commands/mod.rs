//! Command handlers
//!
//! Each handler returns the process exit code; errors bubble up to `main`.

pub mod clean;
pub mod menu;
pub mod verify;
pub mod zones;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use vanillafy::config::Config;
use vanillafy::infrastructure::ProcessEnvironment;

use crate::cli::{Cli, Commands};
use crate::ui::context::UiContext;
use crate::ui::error::format_config_warning;

/// Exit code for failures (discovery, configuration, listing).
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for unusable menu input.
pub const EXIT_USAGE: u8 = 2;

/// What every command needs: the UI context and the resolved configuration.
pub struct Session {
    pub ui: UiContext,
    pub config: Config,
}

impl Session {
    fn load(cli: &Cli, ui: UiContext) -> Result<Self> {
        let (config, warnings) = Config::discover(cli.config.as_deref(), &ProcessEnvironment)?;

        for warning in &warnings {
            eprint!("{}", format_config_warning(warning, ui.color, ui.unicode));
        }

        Ok(Self { ui, config })
    }

    pub fn game(&self) -> &str {
        &self.config.game.name
    }
}

pub fn dispatch(cli: Cli, ui: UiContext) -> Result<ExitCode> {
    let session = Session::load(&cli, ui)?;

    match cli.command {
        Commands::Clean {
            strategy,
            yes,
            dry_run,
            ..
        } => clean::cmd_clean(&session, &strategy, yes, dry_run),
        Commands::Verify { strategy } => verify::cmd_verify(&session, &strategy),
        Commands::Zones => zones::cmd_zones(&session),
    }
}

/// Keeps a console window opened from a file manager on screen.
pub fn wait_for_enter(json: bool) {
    if json {
        eprint!("Press Enter to exit...");
    } else {
        print!("Press Enter to exit...");
        let _ = io::stdout().flush();
    }
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
