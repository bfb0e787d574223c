//! Error type for the reward catalog

use thiserror::Error;

/// Errors surfaced by the fallible catalog paths.
///
/// The score-driven reward roll never fails; only name-based lookups and
/// settings parsing can.
#[derive(Debug, Error)]
pub enum RewardError {
    #[error("unknown pack: {0}")]
    UnknownPack(String),
    #[error("pack {0} has no items")]
    EmptyPack(String),
    #[error("catalog has no authored packs")]
    EmptyCatalog,
    #[error("invalid reward settings: {0}")]
    Settings(#[from] serde_json::Error),
}
