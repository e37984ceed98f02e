//! Diagram families and the facade that routes between them
//!
//! Each family owns its creation strategy: graphs are built stepwise by a
//! director, figures are shared through a flyweight pool.

pub mod facade;
pub mod figure;
pub mod graph;

pub use facade::*;
pub use figure::*;
pub use graph::*;
