//! Per-gesture confirmation counters for the session

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::label::GestureLabel;

/// Monotonic counters, one per countable gesture
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureTally {
    counts: [u32; 4],
}

impl GestureTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one confirmation. Returns the new total, `None` for `GestureLabel::None`.
    pub fn increment(&mut self, label: GestureLabel) -> Option<u32> {
        let idx = label.tally_index()?;
        self.counts[idx] = self.counts[idx].saturating_add(1);
        Some(self.counts[idx])
    }

    pub fn get(&self, label: GestureLabel) -> u32 {
        label.tally_index().map_or(0, |idx| self.counts[idx])
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GestureLabel, u32)> + '_ {
        GestureLabel::COUNTED.iter().map(move |label| (*label, self.get(*label)))
    }

    pub fn clear(&mut self) {
        self.counts = [0; 4];
    }
}

/// Serializes as `{"thumbsUp": n, "peace": n, "fist": n, "openHand": n}`
impl Serialize for GestureTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (label, count) in self.iter() {
            map.serialize_entry(label.as_str(), &count)?;
        }
        map.end()
    }
}
