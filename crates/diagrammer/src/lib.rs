//! Diagrammer - Build graphs and figures through layered object patterns
//!
//! Requests name an element category, a type, and an opaque coordinate.
//! Graphs (`Bar`, `Line`) are built stepwise by a director against a
//! process-wide strategy and rendered through a proxy. Figures are shared
//! flyweights keyed by type. All output is diagnostic text.
//!
//! # Quick Start
//!
//! ```rust
//! use diagrammer::render;
//!
//! let text = render("Graph", "Line", "(10,20)").unwrap();
//! assert!(text.starts_with("Line calc at (10,20)"));
//! ```
//!
//! # Advanced Usage
//!
//! Keep a facade around to share figure instances between requests:
//!
//! ```rust
//! use diagrammer::prelude::*;
//!
//! let facade = DiagramFacade::new();
//! let mut out = Vec::new();
//! facade.request("Figure", "CircleColor", "(5,5)", &mut out).unwrap();
//! facade.request("Figure", "CircleColor", "(6,6)", &mut out).unwrap();
//!
//! assert_eq!(facade.figures().pool().len(), 1);
//! ```

pub mod core;
pub mod plugins;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Diagram, DiagramError, ElementCategory, FacadeConfig, FigureStyle, GraphKind,
        RenderProxy, RequestPolicy,
    };
    pub use crate::plugins::{
        ConstructionDirector, ConstructionStrategy, DiagramFacade, FigureDispatcher,
        FigureFlyweight, FlyweightPool, GraphDispatcher,
    };
}

/// Run a single request through a fresh facade and return its text
///
/// Unknown elements and graph types produce an empty string.
///
/// # Example
/// ```rust
/// use diagrammer::render;
///
/// let text = render("Figure", "SquareBW", "(2,3)").unwrap();
/// assert!(text.contains("black and white"));
/// assert!(render("Unknown", "X", "(0,0)").unwrap().is_empty());
/// ```
pub fn render(element: &str, variant: &str, coordinate: &str) -> anyhow::Result<String> {
    use crate::plugins::DiagramFacade;

    DiagramFacade::new().render_request(element, variant, coordinate)
}

/// The demonstration requests, in order: two graphs, then two figures
pub const DEMO_REQUESTS: [(&str, &str, &str); 4] = [
    ("Graph", "Line", "(10,20)"),
    ("Graph", "Bar", "(15,30)"),
    ("Figure", "CircleColor", "(5,5)"),
    ("Figure", "SquareBW", "(2,3)"),
];
