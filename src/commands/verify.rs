//! Verify command handler
//!
//! Report-only: locates and reconciles the installation, never deletes.

use std::process::ExitCode;

use anyhow::Result;

use vanillafy::domain::ports::{AssumeNo, CleanupEventSink};
use vanillafy::infrastructure::{JsonEventSink, LocalFs, ProcessEnvironment, SystemVolumes};
use vanillafy::{AbortReason, CleanupStage, CleanupUseCase};

use crate::cli::StrategyArgs;
use crate::commands::clean::report_abort;
use crate::commands::{menu, Session, EXIT_FAILURE};
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::cleanup::{render_header, render_verification};

pub fn cmd_verify(session: &Session, args: &StrategyArgs) -> Result<ExitCode> {
    let ui = &session.ui;
    let game = session.game();

    if !ui.json {
        print!(
            "{}",
            render_header("verify", game, false, ui.color, ui.unicode)
        );
    }

    let strategy = match args.strategy() {
        Some(strategy) => strategy,
        None => menu::choose_strategy(session)?,
    };

    let sink: Box<dyn CleanupEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout("verify"))
    } else {
        Box::new(ConsoleEventSink::stdout(ui, game, false))
    };

    let use_case = CleanupUseCase::new(
        LocalFs::new(),
        SystemVolumes::new(),
        AssumeNo,
        &*sink,
        session.config.profile(&ProcessEnvironment),
    );

    match use_case.verify(&strategy) {
        Ok(verification) => {
            if ui.json {
                let result = &verification.reconciliation;
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "verified",
                        "command": "verify",
                        "path": verification.target.path().display().to_string(),
                        "protected": verification.zone.is_protected(),
                        "missing": result.missing,
                        "extra": result.extra,
                        "conforming": result.is_conforming(),
                    })
                );
            } else {
                print!(
                    "{}",
                    render_verification(&verification, ui.color, ui.unicode)
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(reason) => {
            let stage = match reason {
                AbortReason::Discovery(_) => CleanupStage::Start,
                _ => CleanupStage::ZoneChecked,
            };
            report_abort(session, "verify", stage, &reason);
            Ok(ExitCode::from(EXIT_FAILURE))
        }
    }
}
