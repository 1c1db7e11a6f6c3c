//! Testing infrastructure for folio integration tests.
//!
//! - `TestWorld`: isolated content directory and config per test
//! - `fixtures`: sample content documents
//! - `assertions`: checks against `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
