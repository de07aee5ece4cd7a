//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MatrixError;
use crate::options::Options;
use crate::strategy::{
    AdaptiveStrategy, Multiplier, NaiveStrategy, ParallelStrassenStrategy, StrassenStrategy,
};

/// Factory trait for creating multiplication strategies.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a strategy by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    opts: Options,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a factory whose strategies use the given thresholds.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        let opts = self.opts;
        match name {
            "naive" => Ok(Arc::new(NaiveStrategy::new())),
            "strassen" => Ok(Arc::new(StrassenStrategy::new(opts.strassen_threshold))),
            "parallel" => Ok(Arc::new(ParallelStrassenStrategy::new(
                opts.strassen_threshold,
                opts.parallel_threshold,
            ))),
            "auto" | "adaptive" => Ok(Arc::new(AdaptiveStrategy::new(opts))),
            _ => Err(MatrixError::InvalidConfig(format!(
                "unknown strategy: {name}"
            ))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        if let Some(strat) = self.cache.read().get(name) {
            return Ok(Arc::clone(strat));
        }

        let strat = self.create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strat));
        Ok(strat)
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "strassen", "parallel", "auto"]
    }
}
