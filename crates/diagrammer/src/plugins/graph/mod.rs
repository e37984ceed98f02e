//! Graph plugin
//!
//! Bar and line graphs are built stepwise: the dispatcher picks the strategy
//! singleton for the requested kind, and a director runs the fixed
//! construction sequence against it. Rendering goes through a proxy.

mod director;
mod dispatcher;
mod strategy;

pub use director::*;
pub use dispatcher::*;
pub use strategy::*;
