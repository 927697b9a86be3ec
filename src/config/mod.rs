//! Weight-table configuration file
//!
//! An optional TOML file overrides the built-in per-category weight tables.
//! Each `[weights.<category>]` section is a complete replacement table: a map
//! of metric id to weight whose entries must sum to 1.0 (metrics left out of
//! the map get zero weight). Categories without a section keep the built-in
//! defaults.
//!
//! ```toml
//! [weights.model]
//! ramp_up_time = 0.30
//! bus_factor = 0.20
//! license = 0.20
//! size_score = 0.10
//! dataset_quality = 0.10
//! code_quality = 0.10
//! ```

use crate::metrics::{CategoryWeights, MetricId, WeightTable};
use core::str::FromStr;
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The parsed shape of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    weights: WeightOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeightOverrides {
    model: Option<BTreeMap<String, f64>>,
    dataset: Option<BTreeMap<String, f64>>,
    code: Option<BTreeMap<String, f64>>,
}

impl Config {
    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML in
    /// the expected shape.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).into_app_err_with(|| format!("unable to read config file '{}'", path.display()))?;
        toml::from_str(&content).into_app_err_with(|| format!("invalid config file '{}'", path.display()))
    }

    /// Resolve the effective weight tables: overridden categories validated
    /// from the file, the rest from the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an override names an unknown metric id or
    /// violates the weight-sum invariant.
    pub fn category_weights(&self) -> crate::Result<CategoryWeights> {
        let builtin = CategoryWeights::builtin()?;

        Ok(CategoryWeights {
            model: resolve_table("model", self.weights.model.as_ref(), builtin.model)?,
            dataset: resolve_table("dataset", self.weights.dataset.as_ref(), builtin.dataset)?,
            code: resolve_table("code", self.weights.code.as_ref(), builtin.code)?,
        })
    }
}

fn resolve_table(category: &str, overrides: Option<&BTreeMap<String, f64>>, builtin: WeightTable) -> crate::Result<WeightTable> {
    let Some(map) = overrides else {
        return Ok(builtin);
    };

    let mut weights = [0.0; MetricId::COUNT];
    for (key, value) in map {
        let id =
            MetricId::from_str(key).map_err(|_| app_err!("unknown metric id '{key}' in [weights.{category}]"))?;
        weights[id.index()] = *value;
    }

    WeightTable::new(weights).map_err(|e| app_err!("invalid [weights.{category}] table: {e}"))
}
