//! Memoization of the last composed layer.

use crate::layers::compositor::{LayerCompositor, LayerData};
use crate::types::view_mode::ViewMode;
use crate::types::weather_record::WeatherRecord;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Content hash of a batch of records. Equal batches always hash equally;
/// the order of records matters.
pub fn fingerprint(records: &[WeatherRecord]) -> u64 {
    let mut hasher = DefaultHasher::new();
    records.hash(&mut hasher);
    hasher.finish()
}

/// Wraps a [`LayerCompositor`] and recomputes only when the records' contents
/// or the view mode change.
#[derive(Debug, Clone, Default)]
pub struct CachedCompositor {
    compositor: LayerCompositor,
    last: Option<((u64, ViewMode), LayerData)>,
    compositions: usize,
}

impl CachedCompositor {
    pub fn new(compositor: LayerCompositor) -> Self {
        Self {
            compositor,
            last: None,
            compositions: 0,
        }
    }

    pub fn compositor(&self) -> &LayerCompositor {
        &self.compositor
    }

    pub fn compose(&mut self, records: &[WeatherRecord], view_mode: ViewMode) -> &LayerData {
        let key = (fingerprint(records), view_mode);
        if matches!(&self.last, Some((cached, _)) if *cached == key) {
            debug!("Layer cache hit for {} records in {} mode", records.len(), view_mode);
        } else {
            debug!("Layer cache miss for {} records in {} mode, composing", records.len(), view_mode);
            self.last = None;
            self.compositions += 1;
        }
        let compositor = &self.compositor;
        &self
            .last
            .get_or_insert_with(|| (key, compositor.compose(records, view_mode)))
            .1
    }

    /// Number of times the wrapped compositor actually ran.
    pub fn compositions(&self) -> usize {
        self.compositions
    }

    /// Drops the cached layer so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
