use super::MetricId;
use crate::artifact::Category;
use ohno::app_err;

/// Tolerance for the weight-sum invariant.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Built-in MODEL weights: all eight metrics contribute.
const MODEL_WEIGHTS: [f64; MetricId::COUNT] = [0.15, 0.15, 0.10, 0.10, 0.10, 0.10, 0.15, 0.15];

/// Built-in DATASET weights: performance claims, linked-artifact presence,
/// and code quality carry no signal for a dataset.
const DATASET_WEIGHTS: [f64; MetricId::COUNT] = [0.20, 0.15, 0.0, 0.15, 0.15, 0.0, 0.35, 0.0];

/// Built-in CODE weights: dataset-specific metrics carry no signal for a
/// code repository.
const CODE_WEIGHTS: [f64; MetricId::COUNT] = [0.20, 0.20, 0.0, 0.20, 0.0, 0.0, 0.0, 0.40];

/// Per-metric weights for one category, indexed in canonical metric order.
///
/// Construction enforces the weight-sum invariant: entries must be
/// non-negative and sum to 1.0 within [`WEIGHT_EPSILON`]. A violating table
/// is a configuration error and is rejected before any scoring happens.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: [f64; MetricId::COUNT],
}

impl WeightTable {
    /// Validate and construct a weight table.
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or non-finite, or if the
    /// weights do not sum to 1.0 within [`WEIGHT_EPSILON`].
    pub fn new(weights: [f64; MetricId::COUNT]) -> crate::Result<Self> {
        for (id, weight) in MetricId::ALL.iter().zip(weights) {
            if !weight.is_finite() || weight < 0.0 {
                return Err(app_err!("weight for metric '{id}' must be a non-negative number, got {weight}"));
            }
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(app_err!("metric weights must sum to 1.0, got {sum}"));
        }

        Ok(Self { weights })
    }

    /// The weight applied to the given metric's score.
    #[must_use]
    pub const fn weight(&self, id: MetricId) -> f64 {
        self.weights[id.index()]
    }

    /// Whether the metric contributes to this category's net score. Metrics
    /// with zero weight are skipped and recorded as neutral defaults.
    #[must_use]
    pub fn is_applicable(&self, id: MetricId) -> bool {
        self.weight(id) > 0.0
    }
}

/// The three per-category weight tables used by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    pub model: WeightTable,
    pub dataset: WeightTable,
    pub code: WeightTable,
}

impl CategoryWeights {
    /// The built-in default weight tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in table violates the weight-sum
    /// invariant; this is a programming error surfaced at startup rather
    /// than a per-request failure.
    pub fn builtin() -> crate::Result<Self> {
        Ok(Self {
            model: WeightTable::new(MODEL_WEIGHTS)?,
            dataset: WeightTable::new(DATASET_WEIGHTS)?,
            code: WeightTable::new(CODE_WEIGHTS)?,
        })
    }

    /// The weight table for the given artifact category.
    #[must_use]
    pub const fn table(&self, category: Category) -> &WeightTable {
        match category {
            Category::Model => &self.model,
            Category::Dataset => &self.dataset,
            Category::Code => &self.code,
        }
    }
}
