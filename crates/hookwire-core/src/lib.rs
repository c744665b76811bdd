//! # hookwire-core
//!
//! Core crate for hookwire. Contains the configuration schemas and the
//! unified error system used by the instrumentation crate and the boot
//! binary.
//!
//! This crate has **no** internal dependencies on other hookwire crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
