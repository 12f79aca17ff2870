//! The circumstellar dust disk.
//!
//! The disk is a sorted partition of radial lanes, each flagged with whether
//! it still holds dust and gas. Bodies sweep lanes through their effect
//! limits; [`repartition`] splits the lanes at those limits and clears the
//! swept part.

mod circumstellar_disk;
mod dust_lane;

#[cfg(test)]
mod circumstellar_disk_test;

pub use circumstellar_disk::CircumstellarDisk;
pub use dust_lane::{DustLane, repartition};
