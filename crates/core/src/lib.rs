//! Core types and shared functionality for the mileage ledger.
//!
//! This crate provides:
//! - Mileage store with SQLite backend
//! - Input normalization and numeric validation
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod input;
pub mod store;

pub use error::Error;
pub use store::{MileageDb, VehicleMiles};
