use serde::Serialize;
use strum::{Display, EnumString};

/// Identifier for one of the eight trustworthiness metrics.
///
/// The declaration order is the canonical metric order: score records always
/// list metric results in this order, and the aggregator sums weighted scores
/// in this order so that net scores are bit-for-bit reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    /// How quickly an engineer can start using the artifact
    RampUpTime,

    /// How many people the project can lose before it stalls
    BusFactor,

    /// Whether performance claims are backed by evidence
    PerformanceClaims,

    /// License compatibility for reuse
    License,

    /// Hardware compatibility of the artifact's size
    SizeScore,

    /// Availability of linked training dataset and code
    DatasetAndCodeScore,

    /// Quality signals of the dataset itself
    DatasetQuality,

    /// Quality signals of the code repository
    CodeQuality,
}

impl MetricId {
    /// Number of registered metrics.
    pub const COUNT: usize = 8;

    /// All metric ids in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::RampUpTime,
        Self::BusFactor,
        Self::PerformanceClaims,
        Self::License,
        Self::SizeScore,
        Self::DatasetAndCodeScore,
        Self::DatasetQuality,
        Self::CodeQuality,
    ];

    /// Position of this metric in the canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}
