//! Disposable containers for Storm Tracker integration tests.

pub mod error;
pub mod mysql;

pub use error::{Result, TestInfraError};
