//! Stepwise construction strategies for graphs
//!
//! One strategy instance exists per [`GraphKind`] for the whole process. Each
//! sits behind its own `Mutex`; a caller holds the guard for an entire
//! construction sequence, so two requests for the same kind never see each
//! other's coordinate.

use anyhow::Result;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tracing::{debug, warn};

use crate::core::{GraphKind, GraphRenderProxy, RenderProxy};

/// Stepwise builder driven by a [`ConstructionDirector`](super::ConstructionDirector)
pub trait ConstructionStrategy: Send {
    /// Store the coordinate used by the following steps
    fn set_coordinate(&mut self, coordinate: &str);

    /// Calculation step
    fn compute(&self, out: &mut dyn Write) -> Result<()>;

    /// Rendering step
    fn render(&self, out: &mut dyn Write) -> Result<()>;

    /// Drag step
    fn drag(&self, out: &mut dyn Write) -> Result<()>;
}

static BAR_STRATEGY: OnceLock<Mutex<GraphStrategy>> = OnceLock::new();
static LINE_STRATEGY: OnceLock<Mutex<GraphStrategy>> = OnceLock::new();

/// Construction strategy for one graph kind
///
/// Instances are only reachable through [`GraphKind::strategy`].
pub struct GraphStrategy {
    kind: GraphKind,
    coordinate: String,
    proxy: Box<dyn RenderProxy>,
}

impl GraphStrategy {
    fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            coordinate: String::new(),
            proxy: Box::new(GraphRenderProxy::new()),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// The coordinate stored by the most recent construction
    pub fn coordinate(&self) -> &str {
        &self.coordinate
    }

    /// Name of the proxy the render step goes through
    pub fn proxy_name(&self) -> &'static str {
        self.proxy.name()
    }

    /// Replace the render proxy, returning the previous one
    pub fn set_proxy(&mut self, proxy: Box<dyn RenderProxy>) -> Box<dyn RenderProxy> {
        debug!(kind = %self.kind, proxy = proxy.name(), "Swapping render proxy");
        std::mem::replace(&mut self.proxy, proxy)
    }
}

impl ConstructionStrategy for GraphStrategy {
    fn set_coordinate(&mut self, coordinate: &str) {
        self.coordinate.clear();
        self.coordinate.push_str(coordinate);
    }

    fn compute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} calc at {}", self.kind, self.coordinate)?;
        Ok(())
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        self.proxy.render(out)
    }

    fn drag(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drag {} at {}", self.kind, self.coordinate)?;
        Ok(())
    }
}

impl GraphKind {
    /// The process-wide strategy for this kind, created on first use
    pub fn strategy(&self) -> &'static Mutex<GraphStrategy> {
        let cell = match self {
            GraphKind::Bar => &BAR_STRATEGY,
            GraphKind::Line => &LINE_STRATEGY,
        };
        cell.get_or_init(|| {
            debug!(kind = %self, "Creating graph strategy");
            Mutex::new(GraphStrategy::new(*self))
        })
    }

    /// Lock this kind's strategy
    ///
    /// A panic during an earlier construction (for example in a replaced
    /// proxy) does not disable the kind: the poison flag is cleared and the
    /// strategy is handed out again.
    pub fn lock_strategy(&self) -> MutexGuard<'static, GraphStrategy> {
        let strategy = self.strategy();
        match strategy.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // The next construction overwrites the coordinate first
                warn!(kind = %self, "Recovering poisoned graph strategy");
                strategy.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct QuietProxy;

    impl RenderProxy for QuietProxy {
        fn render(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "quiet")?;
            Ok(())
        }

        fn name(&self) -> &'static str {
            "quiet"
        }
    }

    #[test]
    fn test_strategy_steps_use_kind_and_coordinate() {
        let mut strategy = GraphStrategy::new(GraphKind::Bar);
        strategy.set_coordinate("(1,2)");

        let mut out = Vec::new();
        strategy.compute(&mut out).unwrap();
        strategy.render(&mut out).unwrap();
        strategy.drag(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Bar calc at (1,2)\n[Graph Proxy] Drawing graphical + textual stub\nDrag Bar at (1,2)\n"
        );
    }

    #[test]
    fn test_set_coordinate_overwrites() {
        let mut strategy = GraphStrategy::new(GraphKind::Line);
        assert_eq!(strategy.coordinate(), "");
        strategy.set_coordinate("(10,20)");
        strategy.set_coordinate("(3,4)");
        assert_eq!(strategy.coordinate(), "(3,4)");
        assert_eq!(strategy.kind(), GraphKind::Line);
    }

    #[test]
    fn test_swapped_proxy_only_changes_render() {
        let mut strategy = GraphStrategy::new(GraphKind::Line);
        let previous = strategy.set_proxy(Box::new(QuietProxy));
        assert_eq!(previous.name(), "graph");
        assert_eq!(strategy.proxy_name(), "quiet");

        strategy.set_coordinate("(0,1)");
        let mut out = Vec::new();
        strategy.compute(&mut out).unwrap();
        strategy.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Line calc at (0,1)\nquiet\n"
        );
    }

    #[test]
    fn test_strategy_singletons_are_per_kind() {
        let bar = GraphKind::Bar.strategy();
        let line = GraphKind::Line.strategy();
        assert!(std::ptr::eq(bar, GraphKind::Bar.strategy()));
        assert!(std::ptr::eq(line, GraphKind::Line.strategy()));
        assert!(!std::ptr::eq(bar, line));
        assert_eq!(GraphKind::Line.lock_strategy().kind(), GraphKind::Line);
    }
}
