//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout the pipeline:
//!
//! - Error structures with source position information
//! - Specific error variants for tokenizing, parsing and call resolution
//! - Helpful error messages and suggestions

pub mod errors;
