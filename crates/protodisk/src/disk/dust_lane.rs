use serde::{Deserialize, Serialize};
use units::Length;

/// A radial band `[inner, outer]` of the disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustLane {
    pub inner: Length,
    pub outer: Length,
    pub dust_present: bool,
    pub gas_present: bool,
}

impl DustLane {
    pub fn new(inner: Length, outer: Length, dust_present: bool, gas_present: bool) -> Self {
        Self {
            inner,
            outer,
            dust_present,
            gas_present,
        }
    }

    /// True if the lane shares some width with `[inner, outer]`.
    pub fn overlaps(&self, inner: Length, outer: Length) -> bool {
        self.outer > inner && self.inner < outer
    }

    pub fn is_empty(&self) -> bool {
        !(self.dust_present || self.gas_present)
    }

    pub fn width(&self) -> Length {
        self.outer - self.inner
    }
}

/// Splits `lanes` at a body's effect limits and clears the swept middle.
///
/// Lanes that were already empty are dropped. A lane overlapping
/// `[inner, outer]` becomes up to three lanes: the part inside `inner` and the
/// part outside `outer` keep their flags, the overlap loses its dust and keeps
/// its gas only if the sweeping body is not a gas giant. Input order is
/// preserved, so a sorted partition stays sorted.
pub fn repartition(
    lanes: &[DustLane],
    inner: Length,
    outer: Length,
    body_is_gas_giant: bool,
) -> Vec<DustLane> {
    let mut next = Vec::with_capacity(lanes.len() + 2);

    for lane in lanes.iter().filter(|lane| !lane.is_empty()) {
        if !lane.overlaps(inner, outer) {
            next.push(*lane);
            continue;
        }

        if lane.inner < inner {
            next.push(DustLane::new(
                lane.inner,
                inner,
                lane.dust_present,
                lane.gas_present,
            ));
        }

        next.push(DustLane::new(
            lane.inner.max(inner),
            lane.outer.min(outer),
            false,
            lane.gas_present && !body_is_gas_giant,
        ));

        if lane.outer > outer {
            next.push(DustLane::new(
                outer,
                lane.outer,
                lane.dust_present,
                lane.gas_present,
            ));
        }
    }

    next
}
