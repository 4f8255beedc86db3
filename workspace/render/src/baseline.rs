use common::PredictionResult;
use serde_json::json;

use crate::error::{RenderError, Result};
use crate::figure::{rounded, title, Figure};

pub const BASELINE_TITLE: &str = "Apartment excl. rent price prediction";

/// Margin added below and above the band on the y axis.
pub const Y_MARGIN: f64 = 100.0;

const BAND_COLOR: &str = "rgba(100, 149, 237, 0.4)";

/// Text lines shown above the baseline chart.
pub fn baseline_summary(result: &PredictionResult) -> [String; 2] {
    let interval = &result.interval;
    [
        format!(
            "Predicted excl. rent: {} {}",
            rounded(result.prediction),
            interval.unit
        ),
        format!(
            "Confidence interval: {} - {} {} (Confidence: {})",
            rounded(interval.lower),
            rounded(interval.upper),
            interval.unit,
            interval.confidence
        ),
    ]
}

/// Single-category band chart of a baseline prediction.
///
/// Fails with [`RenderError::OutOfBandPrediction`] when the prediction lies outside its
/// interval; no figure is produced in that case.
pub fn baseline_figure(result: &PredictionResult) -> Result<Figure> {
    let interval = &result.interval;
    if !result.is_within_interval() {
        return Err(RenderError::OutOfBandPrediction {
            prediction: result.prediction,
            lower: interval.lower,
            upper: interval.upper,
        });
    }

    let (lower, upper, prediction) = (interval.lower, interval.upper, result.prediction);

    // Upper edge first so the lower trace can fill up to it
    let band_top = json!({
        "x": [0, 1],
        "y": [upper, upper],
        "type": "scatter",
        "mode": "lines",
        "line": {"width": 0},
        "hoverinfo": "skip",
        "showlegend": false
    });
    let band = json!({
        "x": [0, 1],
        "y": [lower, lower],
        "type": "scatter",
        "mode": "lines",
        "fill": "tonexty",
        "fillcolor": BAND_COLOR,
        "line": {"width": 0},
        "name": format!("Confidence interval ({})", interval.confidence)
    });
    let median = json!({
        "x": [0, 1],
        "y": [prediction, prediction],
        "type": "scatter",
        "mode": "lines",
        "line": {"color": "black", "width": 2},
        "name": "Predicted excl. rent (median)"
    });

    let layout = json!({
        "title": title(&format!("<b>{}</b>", BASELINE_TITLE), 16),
        "width": 600,
        "height": 400,
        "showlegend": true,
        "xaxis": {
            "title": title("Prediction interval", 14),
            "range": [0, 1],
            "showticklabels": false,
            "showgrid": true,
            "griddash": "dash"
        },
        "yaxis": {
            "title": title(&format!("Price ({})", interval.unit), 14),
            "range": [lower.min(upper) - Y_MARGIN, lower.max(upper) + Y_MARGIN],
            "tickmode": "array",
            "tickvals": [lower, upper, prediction],
            "ticktext": [rounded(lower), rounded(upper), rounded(prediction)],
            "showgrid": true,
            "griddash": "dash"
        }
    });

    Ok(Figure::new(vec![band_top, band, median], layout))
}
