//! Cleanup Use Case
//!
//! Orchestrates returning an installation to its manifest.
//!
//! This module handles:
//! - Locating the installation with the chosen strategy
//! - Checking it against protected zones
//! - Reconciling its contents against the manifest
//! - Confirming and removing extras, then an enforcement pass

mod options;
mod result;
mod use_case;

pub use options::{CleanupOptions, CleanupProfile};
pub use result::{
    AbortReason, CleanupOutcome, CleanupStage, CleanupSummary, PassOutcome, Verification,
};
pub use use_case::{
    CleanupUseCase, DELETE_EXTRAS_PROMPT, DELETE_NON_WHITELISTED_PROMPT, GUIDANCE_PROMPT,
    PROCEED_PROMPT,
};
