//! Render proxy trait for interposed graph rendering
//!
//! Graph strategies never draw directly. They hand the render step to a proxy,
//! so the output path can change without touching the construction steps.
//! Figures have no proxy.

use anyhow::Result;
use std::io::Write;

/// Controlling wrapper around graph rendering
///
/// # Example
/// ```
/// use diagrammer::core::{GraphRenderProxy, RenderProxy};
///
/// let mut out = Vec::new();
/// GraphRenderProxy::new().render(&mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("[Graph Proxy]"));
/// ```
pub trait RenderProxy: Send + Sync {
    /// Render through the proxy
    fn render(&self, out: &mut dyn Write) -> Result<()>;

    /// Get the name of this proxy
    fn name(&self) -> &'static str;
}

/// Combined graphical and textual output for graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphRenderProxy;

impl GraphRenderProxy {
    pub fn new() -> Self {
        Self
    }
}

impl RenderProxy for GraphRenderProxy {
    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[Graph Proxy] Drawing graphical + textual stub")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "graph"
    }
}
