//! Core abstractions for diagram requests
//!
//! This module defines the capability and proxy traits every diagram family
//! builds on, plus the shared vocabulary, errors, and logging setup.

mod diagram;
mod error;
pub mod logging;
mod proxy;
mod types;

pub use diagram::*;
pub use error::*;
pub use logging::*;
pub use proxy::*;
pub use types::*;
