use serde::Serialize;
use strum::{Display, EnumString};

/// The kind of artifact being scored, determining which metric weights apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// A Hugging Face model repository
    Model,

    /// A Hugging Face dataset repository
    Dataset,

    /// A GitHub code repository
    Code,
}
