use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use units::Mass;

use crate::error::StellarError;

/// Harvard spectral type of a main-sequence star, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    const ALL: [SpectralType; 7] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
    ];

    /// Typical main-sequence mass (M☉) at subtype 0
    fn anchor_mass(self) -> f64 {
        match self {
            SpectralType::O => 60.0,
            SpectralType::B => 17.5,
            SpectralType::A => 2.9,
            SpectralType::F => 1.6,
            SpectralType::G => 1.05,
            SpectralType::K => 0.80,
            SpectralType::M => 0.50,
        }
    }

    /// Anchor mass of the next cooler type; M9.9 runs into the hydrogen-burning limit.
    fn next_anchor_mass(self) -> f64 {
        Self::ALL
            .iter()
            .position(|t| *t == self)
            .and_then(|i| Self::ALL.get(i + 1))
            .map_or(0.08, |t| t.anchor_mass())
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for SpectralType {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O" => Ok(SpectralType::O),
            "B" => Ok(SpectralType::B),
            "A" => Ok(SpectralType::A),
            "F" => Ok(SpectralType::F),
            "G" => Ok(SpectralType::G),
            "K" => Ok(SpectralType::K),
            "M" => Ok(SpectralType::M),
            _ => Err(StellarError::UnknownSpectralClass(s.to_string())),
        }
    }
}

/// Spectral type plus subtype, e.g. `G2V`.
///
/// Only dwarfs (luminosity class V) are accepted since the accretion model
/// assumes a main-sequence host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralClass {
    pub spectral_type: SpectralType,
    /// Subtype in `[0, 10)`
    pub subtype: f64,
}

impl SpectralClass {
    /// Main-sequence mass interpolated logarithmically between type anchors.
    pub fn main_sequence_mass(&self) -> Mass {
        let hot = self.spectral_type.anchor_mass().ln();
        let cool = self.spectral_type.next_anchor_mass().ln();
        let fraction = self.subtype / 10.0;
        Mass::from_solar_masses((hot + (cool - hot) * fraction).exp())
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}V", self.spectral_type, self.subtype)
    }
}

impl FromStr for SpectralClass {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || StellarError::UnknownSpectralClass(s.to_string());
        let trimmed = s.trim();
        let body = trimmed.strip_suffix('V').unwrap_or(trimmed);
        let type_len = body.chars().next().map(char::len_utf8).ok_or_else(unknown)?;
        let (letter, rest) = body.split_at(type_len);

        let spectral_type: SpectralType = letter.parse().map_err(|_| unknown())?;
        let subtype = if rest.is_empty() {
            0.0
        } else {
            rest.parse::<f64>().map_err(|_| unknown())?
        };
        if !(0.0..10.0).contains(&subtype) {
            return Err(unknown());
        }

        Ok(Self {
            spectral_type,
            subtype,
        })
    }
}
