//! Figure plugin
//!
//! Figures are shared flyweights keyed by figure type. A key containing
//! `Color` resolves to a colored figure; anything else is black and white.

mod dispatcher;
mod flyweight;
mod pool;

pub use dispatcher::*;
pub use flyweight::*;
pub use pool::*;
