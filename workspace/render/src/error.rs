use thiserror::Error;

/// Advisory shown instead of the baseline chart when the prediction leaves its interval.
pub const OUT_OF_BAND_ADVISORY: &str = "This configuration cannot be calculated with the current model. \
Please contact www.immolex.ch for further assistance in obtaining prices for special configurations";

pub const INSUFFICIENT_SERIES_ADVISORY: &str = "Not enough data points to display a time series.";

/// Reasons a structurally valid response cannot be drawn
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The point prediction lies outside its own confidence interval
    #[error("{}", OUT_OF_BAND_ADVISORY)]
    OutOfBandPrediction {
        prediction: f64,
        lower: f64,
        upper: f64,
    },

    /// A series needs at least two points to be drawn as a line
    #[error("{}", INSUFFICIENT_SERIES_ADVISORY)]
    InsufficientSeriesData { points: usize },
}

/// Error types for chart sinks
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write chart {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize chart {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Type alias for Result with RenderError
pub type Result<T> = std::result::Result<T, RenderError>;
