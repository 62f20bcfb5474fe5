//! Error types for resolver and optimizer calls

use crate::config::ConfigError;
use thiserror::Error;

/// Calculation or search failure
///
/// Unknown item ids are not represented here: a referenced id that is
/// absent from the catalog contributes nothing and resolution proceeds.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("search space of {combinations} combinations exceeds the limit of {limit}")]
    SearchSpaceTooLarge { combinations: u128, limit: u64 },
    #[error("search cancelled")]
    Cancelled,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
