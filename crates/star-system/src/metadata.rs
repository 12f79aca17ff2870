//! Identification of generated systems.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

/// Identity of a generated system.
///
/// The UUID doubles as the source of the RNG seed for
/// [`generate_named_system`](crate::generate_named_system), so a name or id
/// is enough to regenerate the same system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    pub id: Uuid,

    /// Proper name, if the system has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SystemMetadata {
    /// Metadata with an id drawn from `rng`, so seeded runs get stable ids.
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self::with_id(Builder::from_random_bytes(rng.random()).into_uuid())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self { id, name: None }
    }

    /// Deterministic id derived from a human-readable seed string.
    ///
    /// This does not set the display name; use [`with_name`](Self::with_name).
    ///
    /// ```
    /// use star_system::SystemMetadata;
    ///
    /// let a = SystemMetadata::from_seed_name("tau-ceti-7");
    /// let b = SystemMetadata::from_seed_name("tau-ceti-7");
    /// assert_eq!(a.id, b.id);
    /// assert_eq!(a.seed(), b.seed());
    /// ```
    pub fn from_seed_name(seed_name: &str) -> Self {
        Self::with_id(Uuid::new_v5(&Uuid::NAMESPACE_OID, seed_name.as_bytes()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// First eight bytes of the id as an RNG seed
    pub fn seed(&self) -> u64 {
        self.id.as_u64_pair().0
    }

    pub fn rng(&self) -> ChaChaRng {
        ChaChaRng::seed_from_u64(self.seed())
    }

    /// Short catalog designation, two letters and four digits (`"KV-4729"`).
    pub fn catalog_name(&self) -> String {
        let bytes = self.id.as_bytes();
        let first = (bytes[0] % 26 + b'A') as char;
        let second = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{first}{second}-{number:04}")
    }

    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.catalog_name())
    }
}
