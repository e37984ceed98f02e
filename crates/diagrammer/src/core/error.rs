//! Core error types for diagram requests
//!
//! This module defines the error conditions the dispatch pipeline can surface.
//! Under the default lenient policy, unknown input never reaches the caller as
//! an error; it is logged and skipped instead.

use thiserror::Error;

/// Core error types for diagram requests
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Unknown element category: {element}")]
    UnknownCategory { element: String },

    #[error("Unknown {element} variant: {variant}")]
    UnknownVariant { element: String, variant: String },

    #[error("Flyweight pool exhausted: capacity {capacity} reached while resolving {key:?}")]
    PoolExhausted { key: String, capacity: usize },

    #[error("Lock poisoned: {resource}")]
    LockPoisoned { resource: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new unknown category error
    pub fn unknown_category(element: impl Into<String>) -> Self {
        Self::UnknownCategory {
            element: element.into(),
        }
    }

    /// Create a new unknown variant error
    pub fn unknown_variant(element: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::UnknownVariant {
            element: element.into(),
            variant: variant.into(),
        }
    }

    /// Create a new pool exhaustion error
    pub fn pool_exhausted(key: impl Into<String>, capacity: usize) -> Self {
        Self::PoolExhausted {
            key: key.into(),
            capacity,
        }
    }

    /// Create a new lock poisoning error
    pub fn lock_poisoned(resource: impl Into<String>) -> Self {
        Self::LockPoisoned {
            resource: resource.into(),
        }
    }
}
