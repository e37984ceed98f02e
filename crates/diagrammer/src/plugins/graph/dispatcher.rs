//! Graph dispatcher
//!
//! Selects the strategy singleton for a graph kind and drives a fresh
//! director against it.

use anyhow::Result;
use std::io::Write;
use tracing::{debug, span, Level};

use super::ConstructionDirector;
use crate::core::GraphKind;

/// Dispatches graph requests to the Bar or Line strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphDispatcher;

impl GraphDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Construct a graph of `kind` at `coordinate`
    ///
    /// The strategy stays locked for the whole sequence.
    pub fn create_graph(&self, kind: GraphKind, coordinate: &str, out: &mut dyn Write) -> Result<()> {
        let graph_span = span!(Level::DEBUG, "create_graph", kind = %kind);
        let _enter = graph_span.enter();

        let mut strategy = kind.lock_strategy();
        let mut director = ConstructionDirector::new(&mut *strategy);
        director.construct(coordinate, out)?;

        debug!(coordinate, "Graph constructed");
        Ok(())
    }
}
