//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Custom assertions
//! - PDF fixture builders
//! - An in-memory PDF backend

#![allow(dead_code)]

pub mod assertions;
pub mod fake_backend;
pub mod fixtures;

pub use assertions::*;
pub use fake_backend::*;
pub use fixtures::*;
