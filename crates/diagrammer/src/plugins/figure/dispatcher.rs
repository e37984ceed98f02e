//! Figure dispatcher
//!
//! Owns the flyweight pool for its facade. Resolving a figure prints the
//! caller's coordinate and renders the shared instance.

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, span, Level};

use super::{FigureFlyweight, FlyweightPool};

/// Resolves figure requests through a [`FlyweightPool`]
#[derive(Default)]
pub struct FigureDispatcher {
    pool: FlyweightPool,
}

impl FigureDispatcher {
    /// Create a dispatcher with an unbounded pool
    pub fn new() -> Self {
        Self::with_pool(FlyweightPool::new())
    }

    pub fn with_pool(pool: FlyweightPool) -> Self {
        Self { pool }
    }

    /// The pool backing this dispatcher
    pub fn pool(&self) -> &FlyweightPool {
        &self.pool
    }

    /// Resolve `figure_type`, print `coordinate`, and render the figure
    pub fn get_figure(
        &self,
        figure_type: &str,
        coordinate: &str,
        out: &mut dyn Write,
    ) -> Result<Arc<dyn FigureFlyweight>> {
        let figure_span = span!(Level::DEBUG, "get_figure", figure_type);
        let _enter = figure_span.enter();

        let figure = self.pool.get_figure(figure_type)?;
        writeln!(out, "Coordinates: {}", coordinate)?;
        figure.render(out)?;

        debug!(coordinate, style = %figure.style(), "Figure rendered");
        Ok(figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_figure_prints_coordinate_then_render() {
        let dispatcher = FigureDispatcher::new();
        let mut out = Vec::new();
        dispatcher.get_figure("CircleColor", "(5,5)", &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Coordinates: (5,5)\n[Colored Flyweight] Drawing colored figure of type: CircleColor\n"
        );
    }

    #[test]
    fn test_repeat_reuses_pooled_instance() {
        let dispatcher = FigureDispatcher::new();
        let mut first_out = Vec::new();
        let mut second_out = Vec::new();

        let first = dispatcher.get_figure("SquareBW", "(2,3)", &mut first_out).unwrap();
        let second = dispatcher.get_figure("SquareBW", "(9,9)", &mut second_out).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(dispatcher.pool().len(), 1);
        assert!(String::from_utf8(second_out).unwrap().starts_with("Coordinates: (9,9)\n"));
    }

    #[test]
    fn test_exhausted_pool_writes_nothing() {
        let dispatcher = FigureDispatcher::with_pool(FlyweightPool::with_capacity_limit(0));
        let mut out = Vec::new();
        assert!(dispatcher.get_figure("StarColor", "(1,1)", &mut out).is_err());
        assert!(out.is_empty());
    }
}
