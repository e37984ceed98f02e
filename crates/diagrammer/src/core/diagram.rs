//! Core diagram capability shared by every diagram-like entity
//!
//! A diagram can compute, render, and reposition itself. Each operation writes
//! a single diagnostic line to the supplied sink; there is no graphics backend.

use anyhow::Result;
use std::io::Write;

use super::ElementCategory;

/// Core trait for diagram-like entities
///
/// # Example
/// ```
/// use diagrammer::core::{Diagram, GraphDiagram};
///
/// let mut out = Vec::new();
/// GraphDiagram.compute(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Calculating Graph\n");
/// ```
pub trait Diagram: Send + Sync {
    /// Perform the category-specific calculation
    fn compute(&self, out: &mut dyn Write) -> Result<()>;

    /// Produce the visual representation
    fn render(&self, out: &mut dyn Write) -> Result<()>;

    /// Move the diagram (a drag)
    fn reposition(&self, out: &mut dyn Write) -> Result<()>;

    /// Run compute, render, and reposition in that order
    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        self.compute(out)?;
        self.render(out)?;
        self.reposition(out)
    }
}

/// Graphical diagram variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphDiagram;

impl Diagram for GraphDiagram {
    fn compute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Calculating Graph")?;
        Ok(())
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[Graph] Drawing graphical representation.")?;
        Ok(())
    }

    fn reposition(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dragging Graph")?;
        Ok(())
    }
}

/// Textual diagram variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FigureDiagram;

impl Diagram for FigureDiagram {
    fn compute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Calculating Figure")?;
        Ok(())
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[Figure Stub] Drawing textual stub.")?;
        Ok(())
    }

    fn reposition(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dragging Figure")?;
        Ok(())
    }
}

impl ElementCategory {
    /// The bare capability variant for this category
    pub fn capability(&self) -> Box<dyn Diagram> {
        match self {
            ElementCategory::Graph => Box::new(GraphDiagram),
            ElementCategory::Figure => Box::new(FigureDiagram),
        }
    }
}
