//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Config file location and loading

pub mod app_data;

pub use app_data::*;
