//! Confirmer Port
//!
//! Every yes/no decision of a cleanup run goes through this trait, so the
//! orchestration can be driven by a terminal, a script, or a test.

/// Asks the user a yes/no question.
///
/// Implementations must only ever answer with an explicit yes or no: input
/// that is neither is rejected and asked again, never defaulted.
pub trait Confirmer {
    fn ask(&mut self, prompt: &str) -> bool;
}

impl<C: Confirmer + ?Sized> Confirmer for &mut C {
    fn ask(&mut self, prompt: &str) -> bool {
        (**self).ask(prompt)
    }
}

impl<C: Confirmer + ?Sized> Confirmer for Box<C> {
    fn ask(&mut self, prompt: &str) -> bool {
        (**self).ask(prompt)
    }
}

/// Answers yes to everything.
///
/// Use this when `--yes` flag is passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn ask(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Answers no to everything.
///
/// Use this for report-only runs that must never delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl Confirmer for AssumeNo {
    fn ask(&mut self, _prompt: &str) -> bool {
        false
    }
}
