use stellar::StellarError;
use thiserror::Error;

/// Reasons a system could not be generated.
///
/// Everything here is caught before accretion starts; a disk that runs dry
/// without forming planets is a valid, empty system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Stellar(#[from] StellarError),

    #[error("invalid generation config: {0}")]
    InvalidConfig(String),
}
