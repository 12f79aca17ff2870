use serde::{Deserialize, Serialize};

use crate::constants::MAX_SEQUENTIAL_FAILURES;

/// Tunables for a single accretion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccretionConfig {
    /// Seeds in a row that may find no dust before the run gives up
    pub max_sequential_failures: usize,
    /// Whether small colliding seeds may be captured as moons
    pub capture_moons: bool,
}

impl Default for AccretionConfig {
    fn default() -> Self {
        Self {
            max_sequential_failures: MAX_SEQUENTIAL_FAILURES,
            capture_moons: true,
        }
    }
}

impl AccretionConfig {
    pub fn without_moons(self) -> Self {
        Self {
            capture_moons: false,
            ..self
        }
    }
}
