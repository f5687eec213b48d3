//! Property tests for vanillafy.
//!
//! Randomized manifests, directory listings and zone sets protect the set
//! algebra of reconciliation and the prefix rule of the zone guard.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/reconcile.rs"]
mod reconcile;

#[path = "properties/zones.rs"]
mod zones;
