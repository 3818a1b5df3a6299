//! Defines the [`ViewMode`] enum selecting how records are drawn on the map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active rendering strategy of a map view.
///
/// Both the layer compositor and the interaction controller match on this
/// exhaustively, so adding a variant is a compile-time checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One colored point per record. Picking hits records directly.
    #[default]
    Markers,
    /// Weighted density samples. Picking resolves records by proximity.
    Heatmap,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Markers => "markers",
            ViewMode::Heatmap => "heatmap",
        }
    }
}

/// Formats a `ViewMode` using its lowercase name.
///
/// # Examples
///
/// ```
/// use vaycay::ViewMode;
///
/// assert_eq!(ViewMode::Heatmap.to_string(), "heatmap");
/// assert_eq!(format!("{}", ViewMode::Markers), "markers");
/// ```
impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string names no known [`ViewMode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view mode '{0}', expected 'markers' or 'heatmap'")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markers" => Ok(ViewMode::Markers),
            "heatmap" => Ok(ViewMode::Heatmap),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}
