//! Core types and traits for the Storm Tracker service.
//!
//! This crate provides the storm data model, the [`StormStore`] capability
//! trait implemented by the storage backends, and the shared error type.

pub mod error;
pub mod sample;
pub mod sequence;
pub mod store;
pub mod storm;

pub use error::{Result, StoreError};
pub use sample::{sample_storms, seed};
pub use sequence::{IdSequence, SequenceError, DEFAULT_ID_OFFSET};
pub use store::StormStore;
pub use storm::{NewStorm, Storm};
