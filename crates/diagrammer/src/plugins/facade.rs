//! Diagram facade: the top-level entry point for requests
//!
//! The facade routes each request by element category:
//! Graph → GraphDispatcher → director + strategy singleton + proxy;
//! Figure → FigureDispatcher → flyweight pool.

use anyhow::Result;
use std::io::Write;
use tracing::{info, span, warn, Level};

use crate::core::{DiagramError, ElementCategory, FacadeConfig, GraphKind};
use crate::plugins::figure::{FigureDispatcher, FlyweightPool};
use crate::plugins::graph::GraphDispatcher;

/// Routes `(element, type, coordinate)` requests to the matching dispatcher
///
/// Each facade owns its figure dispatcher, and with it its own flyweight
/// pool. Graph strategies are process-wide and shared by every facade.
pub struct DiagramFacade {
    config: FacadeConfig,
    figures: FigureDispatcher,
}

impl DiagramFacade {
    /// Create a facade with the default (lenient, unbounded) configuration
    pub fn new() -> Self {
        Self::with_config(FacadeConfig::default())
    }

    pub fn with_config(config: FacadeConfig) -> Self {
        let pool = match config.pool_capacity {
            Some(capacity) => FlyweightPool::with_capacity_limit(capacity),
            None => FlyweightPool::new(),
        };

        Self {
            config,
            figures: FigureDispatcher::with_pool(pool),
        }
    }

    pub fn config(&self) -> FacadeConfig {
        self.config
    }

    /// The figure dispatcher owned by this facade
    pub fn figures(&self) -> &FigureDispatcher {
        &self.figures
    }

    /// Handle one request, writing its text to `out`
    ///
    /// Unknown elements and graph types write nothing. Under the lenient
    /// policy they return `Ok(())`; under the strict policy they return
    /// [`DiagramError::UnknownCategory`] or [`DiagramError::UnknownVariant`].
    pub fn request(
        &self,
        element: &str,
        variant: &str,
        coordinate: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let request_span = span!(Level::INFO, "request", element, variant);
        let _enter = request_span.enter();

        match ElementCategory::from_name(element) {
            Some(ElementCategory::Graph) => self.create_graph(variant, coordinate, out),
            Some(ElementCategory::Figure) => self.create_figure(variant, coordinate, out),
            None => self.reject(DiagramError::unknown_category(element)),
        }
    }

    /// Handle one request and return its text
    pub fn render_request(&self, element: &str, variant: &str, coordinate: &str) -> Result<String> {
        let mut out = Vec::new();
        self.request(element, variant, coordinate, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    /// Build a graph named by `graph_type` (`Bar` or `Line`)
    pub fn create_graph(&self, graph_type: &str, coordinate: &str, out: &mut dyn Write) -> Result<()> {
        match GraphKind::from_name(graph_type) {
            Some(kind) => {
                GraphDispatcher::new().create_graph(kind, coordinate, out)?;
                info!(%kind, "Graph request completed");
                Ok(())
            }
            None => self.reject(DiagramError::unknown_variant("Graph", graph_type)),
        }
    }

    /// Resolve and render the figure named by `figure_type`
    pub fn create_figure(&self, figure_type: &str, coordinate: &str, out: &mut dyn Write) -> Result<()> {
        let figure = self.figures.get_figure(figure_type, coordinate, out)?;
        info!(style = %figure.style(), "Figure request completed");
        Ok(())
    }

    fn reject(&self, error: DiagramError) -> Result<()> {
        if self.config.policy.is_strict() {
            warn!(%error, "Rejecting request");
            return Err(error.into());
        }

        warn!(%error, "Ignoring request");
        Ok(())
    }
}

impl Default for DiagramFacade {
    fn default() -> Self {
        Self::new()
    }
}
