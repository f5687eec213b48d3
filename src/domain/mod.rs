//! Domain Layer
//!
//! Pure cleanup rules: manifests, snapshots, zone policy and the services
//! that locate, reconcile and remove. All I/O goes through `ports`.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
