use common::SeriesPoint;
use serde_json::{json, Value};

use crate::baseline::Y_MARGIN;
use crate::error::{RenderError, Result};
use crate::figure::{title, Figure};

/// Static description of one series chart; the quarterly and building-age charts differ
/// only in these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesChart {
    /// File stem of the published chart
    pub name: &'static str,
    /// Notice shown before the chart
    pub headline: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
}

impl SeriesChart {
    pub const QUARTERLY: SeriesChart = SeriesChart {
        name: "chronic",
        headline: "Predicted rent development over time",
        title: "Apartment excl. rent price prediction (quarterly)",
        x_label: "Quarter",
    };

    pub const AGE_OF_BUILDING: SeriesChart = SeriesChart {
        name: "age_of_building",
        headline: "Predicted excl. rent for different building ages",
        title: "Apartment excl. rent price prediction (age of building)",
        x_label: "Age of building",
    };
}

/// Minimum number of points for a drawable series.
pub const MIN_SERIES_POINTS: usize = 2;

/// Lower bound, median and upper bound lines over an ordinal x axis, in input order.
pub fn series_figure<P: SeriesPoint>(chart: &SeriesChart, points: &[P]) -> Result<Figure> {
    if points.len() < MIN_SERIES_POINTS {
        return Err(RenderError::InsufficientSeriesData {
            points: points.len(),
        });
    }

    let labels: Vec<String> = points.iter().map(SeriesPoint::x_label).collect();
    let lower: Vec<f64> = points.iter().map(|p| p.bounds().lower).collect();
    let median: Vec<f64> = points.iter().map(SeriesPoint::prediction).collect();
    let upper: Vec<f64> = points.iter().map(|p| p.bounds().upper).collect();

    let y_min = lower.iter().copied().fold(f64::INFINITY, f64::min) - Y_MARGIN;
    let y_max = upper.iter().copied().fold(f64::NEG_INFINITY, f64::max) + Y_MARGIN;

    let data = vec![
        line_trace(&labels, &lower, "Predicted lower excl. rent"),
        line_trace(&labels, &median, "Predicted median excl. rent"),
        line_trace(&labels, &upper, "Predicted upper excl. rent"),
    ];

    let layout = json!({
        "title": title(&format!("<b>{}</b>", chart.title), 16),
        "width": 1000,
        "height": 400,
        "showlegend": true,
        "xaxis": {
            "title": title(chart.x_label, 14),
            "type": "category",
            "tickangle": -45,
            "showgrid": true,
            "griddash": "dash"
        },
        "yaxis": {
            "title": title("Price (CHF)", 14),
            "range": [y_min, y_max],
            "showgrid": true,
            "griddash": "dash"
        }
    });

    Ok(Figure::new(data, layout))
}

fn line_trace(labels: &[String], values: &[f64], name: &str) -> Value {
    json!({
        "x": labels,
        "y": values,
        "type": "scatter",
        "mode": "lines+markers",
        "marker": {"symbol": "circle"},
        "line": {"width": 2},
        "name": name
    })
}
