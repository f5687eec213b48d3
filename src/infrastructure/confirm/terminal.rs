//! Terminal yes/no prompt

use dialoguer::Confirm;
use tracing::warn;

use crate::domain::ports::Confirmer;

/// Interactive prompt for a real terminal.
///
/// No default answer is set, so the user has to press `y` or `n`. If the
/// terminal goes away mid-prompt the answer is "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn ask(&mut self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).interact() {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "prompt failed, treating as no");
                false
            }
        }
    }
}
