mod dates;
mod error;
mod format;
mod gradient;
mod heatmap;
mod interaction;
mod layers;
mod settings;
mod source;
mod spatial;
mod types;

pub use error::VaycayError;
pub use settings::MapSettings;

pub use dates::date_codec::{day_of_year, days_in_month, month_day, short_label, DAYS_IN_MONTH, DAYS_IN_YEAR};
pub use dates::error::DateCodecError;
pub use dates::labels::{day_options, month_label, today_as_month_day, MONTH_NAMES, MONTH_PLACEHOLDER};
pub use dates::month_day::MonthDay;

pub use types::rgb::Rgb;
pub use types::view_mode::{UnknownViewMode, ViewMode};
pub use types::weather_record::{LngLat, WeatherRecord};

pub use gradient::color_gradient::color_for;
pub use gradient::error::GradientError;
pub use gradient::thresholds::{TemperatureThreshold, ThresholdTable, DEFAULT_TABLE};

pub use heatmap::projector::{project, temperature_range, HeatmapProjector, HeatmapSample, HeatmapWeighting, TemperatureRange};

pub use spatial::index::RecordIndex;
pub use spatial::lookup::{nearest_within, within_window, DEFAULT_TOLERANCE};

pub use layers::cache::{fingerprint, CachedCompositor};
pub use layers::compositor::{compose, ColoredPoint, LayerCompositor, LayerData};
pub use layers::descriptor::*;

pub use interaction::controller::{InteractionController, PointerEvent};
pub use interaction::state::{HoverInfo, InteractionState};

pub use format::popup::{coordinates_label, popup_fields, CityDetails, PopupField};
pub use format::text::*;

pub use source::error::SourceError;
pub use source::json_file::JsonFileSource;
pub use source::memory::MemorySource;
pub use source::WeatherSource;
