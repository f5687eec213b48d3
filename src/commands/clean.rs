//! Clean command handler
//!
//! Locates the installation and removes everything outside the manifest.

use std::io;
use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;

use vanillafy::domain::ports::{AssumeYes, CleanupEventSink, Confirmer};
use vanillafy::infrastructure::{
    DialoguerConfirmer, JsonEventSink, LineConfirmer, LocalFs, ProcessEnvironment, SystemVolumes,
};
use vanillafy::{
    AbortReason, CancelFlag, CleanupOptions, CleanupOutcome, CleanupStage, CleanupUseCase,
};

use crate::cli::StrategyArgs;
use crate::commands::{menu, Session, EXIT_FAILURE};
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::cleanup::{render_abort, render_header};

/// Execute the clean command
pub fn cmd_clean(
    session: &Session,
    args: &StrategyArgs,
    yes: bool,
    dry_run: bool,
) -> Result<ExitCode> {
    let ui = &session.ui;
    let game = session.game();

    if !ui.json {
        print!(
            "{}",
            render_header("clean", game, dry_run, ui.color, ui.unicode)
        );
    }

    let strategy = match args.strategy() {
        Some(strategy) => strategy,
        None => menu::choose_strategy(session)?,
    };

    let cancel = CancelFlag::new();
    install_interrupt_handler(cancel.clone())?;

    let confirmer: Box<dyn Confirmer> = if yes {
        Box::new(AssumeYes)
    } else if ui.interactive() {
        Box::new(DialoguerConfirmer)
    } else if ui.json {
        Box::new(LineConfirmer::new(io::stdin().lock(), io::stderr()))
    } else {
        Box::new(LineConfirmer::new(io::stdin().lock(), io::stdout()))
    };

    let sink: Box<dyn CleanupEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout("clean"))
    } else {
        Box::new(ConsoleEventSink::stdout(ui, game, dry_run))
    };

    let options = CleanupOptions::new().with_dry_run(dry_run);
    let mut use_case = CleanupUseCase::new(
        LocalFs::new(),
        SystemVolumes::new(),
        confirmer,
        &*sink,
        session.config.profile(&ProcessEnvironment),
    )
    .with_options(options)
    .with_cancel_flag(cancel);

    let outcome = use_case.run(&strategy);
    drop(use_case);

    match outcome {
        CleanupOutcome::Aborted { stage, reason } => {
            report_abort(session, "clean", stage, &reason);
            if reason.is_user_choice() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_FAILURE))
            }
        }
        CleanupOutcome::Completed(_) => {
            if dry_run && !ui.json {
                println!("Dry run: nothing was deleted.");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// What a Ctrl+C press does.
#[derive(Debug, PartialEq, Eq)]
enum Interrupt {
    /// Stop the running scan and report it as cancelled
    StopScan,
    Quit,
}

/// Only the first press during a scan is cooperative. Outside a scan nothing
/// checks the flag, so the press quits right away.
fn on_interrupt(cancel: &CancelFlag, earlier_presses: usize) -> Interrupt {
    if earlier_presses == 0 && cancel.is_scanning() {
        Interrupt::StopScan
    } else {
        Interrupt::Quit
    }
}

fn install_interrupt_handler(cancel: CancelFlag) -> Result<()> {
    let presses = Arc::new(AtomicUsize::new(0));
    ctrlc::set_handler(move || {
        let earlier = presses.fetch_add(1, Ordering::SeqCst);
        match on_interrupt(&cancel, earlier) {
            Interrupt::StopScan => {
                cancel.cancel();
                eprintln!("\nStopping the scan... press Ctrl+C again to quit.");
            }
            Interrupt::Quit => std::process::exit(130),
        }
    })?;
    Ok(())
}

pub(crate) fn report_abort(
    session: &Session,
    command: &str,
    stage: CleanupStage,
    reason: &AbortReason,
) {
    let ui = &session.ui;
    if ui.json {
        let kind = match reason {
            AbortReason::Discovery(_) => "not_found",
            AbortReason::ProtectedZoneDeclined { .. } => "declined",
            AbortReason::Unreadable { .. } => "unreadable",
        };
        println!(
            "{}",
            serde_json::json!({
                "event": "aborted",
                "command": command,
                "stage": stage.to_string(),
                "reason": kind,
                "message": reason.to_string(),
            })
        );
    } else if reason.is_user_choice() {
        print!(
            "{}",
            render_abort(reason, session.game(), ui.color, ui.unicode)
        );
    } else {
        eprint!(
            "{}",
            render_abort(reason, session.game(), ui.color, ui.unicode)
        );
    }
}
