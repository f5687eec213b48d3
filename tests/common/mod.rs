//! Common test utilities for vanillafy CLI and property tests.
//!
//! This module provides:
//! - `TestEnv`: isolated game directory, home and config file
//! - Fixtures: manifest and config content used across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::TestEnv;
