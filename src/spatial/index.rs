//! An R-tree over record positions for hit-testing large batches.
//!
//! Returns exactly what [`crate::nearest_within`] returns: the earliest record
//! in input order inside the window, not the closest one.

use crate::spatial::lookup::within_window;
use crate::types::weather_record::{LngLat, WeatherRecord};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// A record position tagged with the record's index in the input slice.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IndexedPosition {
    index: usize,
    position: LngLat,
}

/// Points are stored as `[longitude, latitude]` so envelopes line up with the
/// lookup's `(target_lon, target_lat)` arguments.
impl RTreeObject for IndexedPosition {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

/// Squared planar distance in degrees, used only to order candidates.
impl PointDistance for IndexedPosition {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over the records of one batch.
///
/// Records without both coordinates are left out of the tree, just as the
/// linear scan skips them.
#[derive(Debug, Clone)]
pub struct RecordIndex<'a> {
    records: &'a [WeatherRecord],
    tree: RTree<IndexedPosition>,
}

impl<'a> RecordIndex<'a> {
    pub fn new(records: &'a [WeatherRecord]) -> Self {
        let positions = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                record
                    .coordinates()
                    .map(|position| IndexedPosition { index, position })
            })
            .collect();
        Self {
            records,
            tree: RTree::bulk_load(positions),
        }
    }

    pub fn records(&self) -> &'a [WeatherRecord] {
        self.records
    }

    /// Number of records that made it into the tree.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Finds the earliest record inside the tolerance window around the target.
    pub fn nearest_within(&self, target_lon: f64, target_lat: f64, tolerance: f64) -> Option<&'a WeatherRecord> {
        let target = [target_lon, target_lat];
        // The square window fits inside this squared radius.
        let max_distance_2 = 2.0 * tolerance * tolerance;

        let mut earliest: Option<usize> = None;
        for candidate in self.tree.nearest_neighbor_iter(&target) {
            if candidate.distance_2(&target) > max_distance_2 {
                break;
            }
            let record = &self.records[candidate.index];
            if within_window(record, target_lon, target_lat, tolerance) {
                earliest = Some(earliest.map_or(candidate.index, |best| best.min(candidate.index)));
            }
        }
        earliest.map(|index| &self.records[index])
    }
}
