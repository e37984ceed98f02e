//! Flyweight pool
//!
//! Deduplicates figures by type key. The first lookup of a key creates and
//! caches its flyweight; every later lookup returns that same `Arc`. Entries
//! are never evicted.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, span, warn, Level};

use super::{create_flyweight, FigureFlyweight};
use crate::core::DiagramError;

/// Type-keyed cache of shared figure instances
pub struct FlyweightPool {
    figures: Mutex<HashMap<String, Arc<dyn FigureFlyweight>>>,
    capacity: Option<usize>,
}

impl FlyweightPool {
    /// Create an unbounded pool
    pub fn new() -> Self {
        Self {
            figures: Mutex::new(HashMap::new()),
            capacity: None,
        }
    }

    /// Create a pool that holds at most `capacity` distinct figure types
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            figures: Mutex::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Resolve the shared figure for `figure_type`
    ///
    /// Lookup and insert happen under one lock, so concurrent first lookups
    /// of a key still produce a single instance. Fails only when a bounded
    /// pool is full and `figure_type` is new.
    pub fn get_figure(&self, figure_type: &str) -> Result<Arc<dyn FigureFlyweight>> {
        let lookup_span = span!(Level::DEBUG, "pool_lookup", figure_type);
        let _enter = lookup_span.enter();

        let mut figures = self.lock()?;

        if let Some(figure) = figures.get(figure_type) {
            debug!("Flyweight cache hit");
            return Ok(Arc::clone(figure));
        }

        if let Some(capacity) = self.capacity {
            if figures.len() >= capacity {
                warn!(capacity, "Flyweight pool is full");
                return Err(DiagramError::pool_exhausted(figure_type, capacity).into());
            }
        }

        let figure = create_flyweight(figure_type);
        figures.insert(figure_type.to_string(), Arc::clone(&figure));
        debug!(style = %figure.style(), pool_size = figures.len(), "Flyweight created");

        Ok(figure)
    }

    /// Number of cached figure types
    pub fn len(&self) -> usize {
        self.lock().map(|figures| figures.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `figure_type` is already cached
    pub fn contains(&self, figure_type: &str) -> bool {
        self.lock()
            .map(|figures| figures.contains_key(figure_type))
            .unwrap_or(false)
    }

    /// Cached figure types, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .lock()
            .map(|figures| figures.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<dyn FigureFlyweight>>>, DiagramError> {
        self.figures
            .lock()
            .map_err(|_| DiagramError::lock_poisoned("flyweight pool"))
    }
}

impl Default for FlyweightPool {
    fn default() -> Self {
        Self::new()
    }
}
