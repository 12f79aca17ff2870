use thiserror::Error;

/// Invalid stellar parameters, reported before any simulation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StellarError {
    #[error("stellar mass must be a positive, finite number of solar masses (got {0})")]
    InvalidMass(f64),

    #[error("stellar age must be a non-negative, finite number of years (got {0})")]
    InvalidAge(f64),

    #[error("unknown spectral class `{0}`")]
    UnknownSpectralClass(String),
}
