//! Construction director for graphs
//!
//! The director owns the order of construction, not the steps themselves.

use anyhow::Result;
use std::fmt;
use std::io::Write;
use tracing::{span, trace, Level};

use super::ConstructionStrategy;

/// One step of the construction sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructionStep {
    SetCoordinate,
    Compute,
    Render,
    Drag,
}

impl ConstructionStep {
    /// The fixed order every construction follows
    pub const SEQUENCE: [ConstructionStep; 4] = [
        ConstructionStep::SetCoordinate,
        ConstructionStep::Compute,
        ConstructionStep::Render,
        ConstructionStep::Drag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructionStep::SetCoordinate => "set_coordinate",
            ConstructionStep::Compute => "compute",
            ConstructionStep::Render => "render",
            ConstructionStep::Drag => "drag",
        }
    }
}

impl fmt::Display for ConstructionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs [`ConstructionStep::SEQUENCE`] against a bound strategy
///
/// The director borrows its strategy; it never owns one.
pub struct ConstructionDirector<'a> {
    strategy: &'a mut dyn ConstructionStrategy,
}

impl<'a> ConstructionDirector<'a> {
    pub fn new(strategy: &'a mut dyn ConstructionStrategy) -> Self {
        Self { strategy }
    }

    /// Rebind the director to another strategy
    pub fn bind(&mut self, strategy: &'a mut dyn ConstructionStrategy) {
        self.strategy = strategy;
    }

    /// Build at `coordinate`, writing each step's output to `out`
    pub fn construct(&mut self, coordinate: &str, out: &mut dyn Write) -> Result<()> {
        let construct_span = span!(Level::DEBUG, "construct", coordinate);
        let _enter = construct_span.enter();

        for step in ConstructionStep::SEQUENCE {
            trace!(%step, "Running construction step");
            match step {
                ConstructionStep::SetCoordinate => self.strategy.set_coordinate(coordinate),
                ConstructionStep::Compute => self.strategy.compute(out)?,
                ConstructionStep::Render => self.strategy.render(out)?,
                ConstructionStep::Drag => self.strategy.drag(out)?,
            }
        }

        Ok(())
    }
}
