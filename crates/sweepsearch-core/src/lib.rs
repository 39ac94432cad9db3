//! Core types and definitions for the sweepsearch simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! unit newtypes, path and detection types, configuration, report
//! views, errors, and constants. It has no simulation logic and no
//! dependency on any runtime or rendering framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
pub mod units;

pub use error::{Result, SearchError};
