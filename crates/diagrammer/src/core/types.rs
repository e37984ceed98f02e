//! Core type definitions for diagram requests
//!
//! This module contains the small vocabulary shared by every stage of the
//! pipeline: element categories, graph kinds, figure styles, and the request
//! configuration consumed by the facade.

use serde::Serialize;
use std::fmt;

/// Top-level element family a request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementCategory {
    /// Bar and line graphs, built stepwise by a director
    Graph,
    /// Shapes resolved through the flyweight pool
    Figure,
}

impl ElementCategory {
    /// Every category, in dispatch order
    pub const ALL: [ElementCategory; 2] = [ElementCategory::Graph, ElementCategory::Figure];

    /// Resolve a request element name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Graph" => Some(ElementCategory::Graph),
            "Figure" => Some(ElementCategory::Figure),
            _ => None,
        }
    }

    /// The element name as it appears in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Graph => "Graph",
            ElementCategory::Figure => "Figure",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ElementCategory::Graph => "Bar and line graphs built through a director",
            ElementCategory::Figure => "Shared figure instances keyed by figure type",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Concrete graph variants under [`ElementCategory::Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GraphKind {
    Bar,
    Line,
}

impl GraphKind {
    pub const ALL: [GraphKind; 2] = [GraphKind::Bar, GraphKind::Line];

    /// Resolve a graph type name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Bar" => Some(GraphKind::Bar),
            "Line" => Some(GraphKind::Line),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::Bar => "Bar",
            GraphKind::Line => "Line",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Substring that marks a figure type as colored
pub const COLOR_MARKER: &str = "Color";

/// Rendering family of a figure flyweight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FigureStyle {
    Colored,
    BlackAndWhite,
}

impl FigureStyle {
    /// Classify a figure type key. Keys containing [`COLOR_MARKER`] are
    /// colored; everything else, including the empty key, is black and white.
    pub fn classify(figure_type: &str) -> Self {
        if figure_type.contains(COLOR_MARKER) {
            FigureStyle::Colored
        } else {
            FigureStyle::BlackAndWhite
        }
    }

    /// Returns true for the colored family
    pub fn is_colored(&self) -> bool {
        matches!(self, FigureStyle::Colored)
    }
}

impl fmt::Display for FigureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureStyle::Colored => write!(f, "colored"),
            FigureStyle::BlackAndWhite => write!(f, "black-and-white"),
        }
    }
}

/// How the facade treats an unrecognized element or graph type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RequestPolicy {
    /// Log a warning and write nothing
    #[default]
    Lenient,
    /// Return [`DiagramError::UnknownCategory`](crate::DiagramError) or
    /// `UnknownVariant`
    Strict,
}

impl RequestPolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, RequestPolicy::Strict)
    }
}

impl fmt::Display for RequestPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestPolicy::Lenient => write!(f, "lenient"),
            RequestPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Configuration for a [`DiagramFacade`](crate::plugins::DiagramFacade)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacadeConfig {
    /// Handling of unrecognized input
    pub policy: RequestPolicy,
    /// Maximum number of distinct figure types the pool will hold.
    /// `None` means unbounded.
    pub pool_capacity: Option<usize>,
}

impl FacadeConfig {
    pub fn new(policy: RequestPolicy, pool_capacity: Option<usize>) -> Self {
        Self {
            policy,
            pool_capacity,
        }
    }

    pub fn with_policy(mut self, policy: RequestPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = Some(capacity);
        self
    }
}
