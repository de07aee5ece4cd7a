//! Strategy selection logic.

use std::sync::Arc;

use strassen_core::registry::MultiplierFactory;
use strassen_core::{MatrixError, Multiplier};

/// Get the strategies to run for an algorithm selection.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, MatrixError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strassen_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::default();
        let strats = get_multipliers_to_run("all", &factory).unwrap();
        assert_eq!(strats.len(), factory.available().len());
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::default();
        let strats = get_multipliers_to_run("naive", &factory).unwrap();
        assert_eq!(strats.len(), 1);
        assert_eq!(strats[0].name(), "Naive");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::default();
        assert!(get_multipliers_to_run("unknown", &factory).is_err());
    }
}
