//! Figure flyweights
//!
//! A flyweight carries only intrinsic state, the figure type. Extrinsic state
//! such as the coordinate is supplied by the caller at render time.

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use crate::core::FigureStyle;

/// Shared figure instance for one figure type
pub trait FigureFlyweight: Send + Sync {
    /// The intrinsic type key, e.g. `CircleColor`
    fn figure_type(&self) -> &str;

    /// Rendering family of this figure
    fn style(&self) -> FigureStyle;

    /// Draw the figure
    fn render(&self, out: &mut dyn Write) -> Result<()>;
}

/// Colored figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredFigure {
    figure_type: String,
}

impl ColoredFigure {
    pub fn new(figure_type: impl Into<String>) -> Self {
        Self {
            figure_type: figure_type.into(),
        }
    }
}

impl FigureFlyweight for ColoredFigure {
    fn figure_type(&self) -> &str {
        &self.figure_type
    }

    fn style(&self) -> FigureStyle {
        FigureStyle::Colored
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "[Colored Flyweight] Drawing colored figure of type: {}",
            self.figure_type
        )?;
        Ok(())
    }
}

/// Black and white figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackAndWhiteFigure {
    figure_type: String,
}

impl BlackAndWhiteFigure {
    pub fn new(figure_type: impl Into<String>) -> Self {
        Self {
            figure_type: figure_type.into(),
        }
    }
}

impl FigureFlyweight for BlackAndWhiteFigure {
    fn figure_type(&self) -> &str {
        &self.figure_type
    }

    fn style(&self) -> FigureStyle {
        FigureStyle::BlackAndWhite
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "[B/W Flyweight] Drawing black and white figure of type: {}",
            self.figure_type
        )?;
        Ok(())
    }
}

/// Build the flyweight variant matching the classification of `figure_type`
pub fn create_flyweight(figure_type: &str) -> Arc<dyn FigureFlyweight> {
    match FigureStyle::classify(figure_type) {
        FigureStyle::Colored => Arc::new(ColoredFigure::new(figure_type)),
        FigureStyle::BlackAndWhite => Arc::new(BlackAndWhiteFigure::new(figure_type)),
    }
}
