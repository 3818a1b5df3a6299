//! Piecewise-linear temperature → color mapping over a [`ThresholdTable`].

use crate::gradient::thresholds::{ThresholdTable, DEFAULT_TABLE};
use crate::types::rgb::Rgb;

/// Returned only when no bracketing pair exists, which can only happen for NaN.
const FALLBACK_COLOR: Rgb = Rgb(128, 128, 128);

impl ThresholdTable {
    /// Maps a temperature in °C to a color.
    ///
    /// Temperatures at or below the first anchor get the first color, at or
    /// above the last anchor the last color. In between, each channel is
    /// linearly interpolated between the two bracketing anchors and rounded
    /// half-up.
    ///
    /// # Examples
    ///
    /// ```
    /// use vaycay::{Rgb, ThresholdTable};
    ///
    /// let table = ThresholdTable::default();
    /// assert_eq!(table.color_for(-25.0), Rgb(75, 0, 130));
    /// assert_eq!(table.color_for(50.0), Rgb(255, 0, 0));
    /// assert_eq!(table.color_for(20.0), Rgb(255, 240, 0));
    /// ```
    pub fn color_for(&self, temperature: f64) -> Rgb {
        let first = self.first();
        if temperature <= first.temperature {
            return first.color;
        }
        let last = self.last();
        if temperature >= last.temperature {
            return last.color;
        }

        self.thresholds()
            .windows(2)
            .find(|pair| temperature >= pair[0].temperature && temperature <= pair[1].temperature)
            .map(|pair| {
                let (lower, upper) = (pair[0], pair[1]);
                let factor = (temperature - lower.temperature) / (upper.temperature - lower.temperature);
                interpolate(lower.color, upper.color, factor)
            })
            .unwrap_or(FALLBACK_COLOR)
    }

    /// The anchor colors in ascending temperature order.
    ///
    /// Used as the color ramp of the heatmap layer so both view modes share a palette.
    pub fn color_range(&self) -> Vec<Rgb> {
        self.thresholds().iter().map(|t| t.color).collect()
    }
}

/// Maps a temperature in °C to a color using the default threshold table.
pub fn color_for(temperature: f64) -> Rgb {
    DEFAULT_TABLE.color_for(temperature)
}

fn interpolate(lower: Rgb, upper: Rgb, factor: f64) -> Rgb {
    let channel = |from: u8, to: u8| -> u8 {
        let value = f64::from(from) + (f64::from(to) - f64::from(from)) * factor;
        // Values stay within [0, 255]; the clamp only guards float error at the ends.
        (value + 0.5).floor().clamp(0.0, 255.0) as u8
    };
    Rgb(
        channel(lower.0, upper.0),
        channel(lower.1, upper.1),
        channel(lower.2, upper.2),
    )
}
