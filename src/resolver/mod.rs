//! Call resolution.
//!
//! After parsing, every call site names its target only by name and argument
//! count. This module binds each call to the declared function with exactly
//! that name and parameter count, or reports the call as unresolved.

pub mod resolver;
