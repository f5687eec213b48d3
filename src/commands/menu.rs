//! Strategy selection menu
//!
//! Shown when `clean` or `verify` is run without --scan-all, --volume or
//! --path.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Input, Select};
use vanillafy::{DiscoveryStrategy, VanillafyError, VolumeId};

use crate::commands::Session;

fn options(game: &str) -> [String; 3] {
    [
        "Scan the entire PC".to_string(),
        "Provide a drive letter to scan (e.g., C)".to_string(),
        format!(
            "Provide the full path to {} (e.g., A:\\SteamLibrary\\steamapps\\common\\{})",
            game, game
        ),
    ]
}

/// Paths pasted from a file manager often come quoted.
fn clean_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches('"'))
}

pub fn choose_strategy(session: &Session) -> Result<DiscoveryStrategy> {
    let game = session.game();
    if session.ui.interactive() {
        return choose_interactive(game);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let strategy = if session.ui.json {
        choose_from_lines(&mut input, &mut io::stderr(), game)?
    } else {
        choose_from_lines(&mut input, &mut io::stdout(), game)?
    };
    Ok(strategy)
}

fn choose_interactive(game: &str) -> Result<DiscoveryStrategy> {
    let items = options(game);
    let selection = Select::new()
        .with_prompt("How should the installation be found?")
        .items(&items)
        .default(0)
        .interact()?;

    let strategy = match selection {
        0 => DiscoveryStrategy::FullScan,
        1 => {
            let letter: String = Input::new()
                .with_prompt("Enter the drive letter (e.g., C)")
                .interact_text()?;
            DiscoveryStrategy::SingleVolume(VolumeId::parse(&letter))
        }
        _ => {
            let path: String = Input::new()
                .with_prompt(format!("Enter the full path to {}", game))
                .interact_text()?;
            DiscoveryStrategy::DirectPath(clean_path(&path))
        }
    };
    Ok(strategy)
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String, VanillafyError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Numbered menu over plain lines, for piped input.
pub fn choose_from_lines<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &str,
) -> Result<DiscoveryStrategy, VanillafyError> {
    writeln!(output, "Choose an option:")?;
    for (i, item) in options(game).iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, item)?;
    }
    write!(output, "Enter your choice (1/2/3): ")?;
    output.flush()?;

    let choice = read_answer(input)?;
    match choice.as_str() {
        "1" => Ok(DiscoveryStrategy::FullScan),
        "2" => {
            write!(output, "Enter the drive letter (e.g., C): ")?;
            output.flush()?;
            let letter = read_answer(input)?;
            Ok(DiscoveryStrategy::SingleVolume(VolumeId::parse(&letter)))
        }
        "3" => {
            write!(output, "Enter the full path to {}: ", game)?;
            output.flush()?;
            let path = read_answer(input)?;
            Ok(DiscoveryStrategy::DirectPath(clean_path(&path)))
        }
        _ => Err(VanillafyError::InvalidMenuChoice(choice)),
    }
}
