//! Domain Policies
//!
//! Rules that decide, without performing I/O.

pub mod protected_zone;

pub use protected_zone::{
    ProtectedZoneGuard, ProtectedZoneSet, ZoneSpec, ZoneVerdict, DEFAULT_ZONE_SPECS,
};
