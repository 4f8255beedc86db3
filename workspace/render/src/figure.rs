use serde::Serialize;
use serde_json::{json, Value};

/// plotly.js bundle loaded by the standalone chart documents.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const FOOTER: &str = concat!(
    r#"<p style="text-align: center;">For more information about the model have a look at the "#,
    r#"<a href="https://github.com/wonich/apartment-rent-price-prediction-arount-Bulach">"#,
    r#"github repository</a></p>"#,
    "\n",
    r#"<p style="text-align: center;">Data and model are powered by "#,
    r#"<a href="https://www.immolex.ch"><strong>IMMOLEX</strong></a></p>"#,
);

/// A plotly.js figure: the traces and layout handed to `Plotly.newPlot`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self { data, layout }
    }

    /// `[min, max]` of the y axis range, if one is set.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let range = self.layout["yaxis"]["range"].as_array()?;
        Some((range.first()?.as_f64()?, range.get(1)?.as_f64()?))
    }

    /// Tick labels of the y axis, if explicit ticks are set.
    pub fn y_tick_text(&self) -> Vec<String> {
        self.layout["yaxis"]["ticktext"]
            .as_array()
            .map(|ticks| {
                ticks
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Standalone HTML document drawing this figure with plotly.js.
    pub fn to_html(&self, title: &str) -> serde_json::Result<String> {
        let data = script_safe(serde_json::to_string(&self.data)?);
        let layout = script_safe(serde_json::to_string(&self.layout)?);
        let config = json!({"responsive": true, "displayModeBar": false});

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="chart" class="chart-container"></div>
<script>
Plotly.newPlot("chart", {data}, {layout}, {config});
</script>
<hr>
{footer}
</body>
</html>
"#,
            title = escape_html(title),
            cdn = PLOTLY_CDN,
            data = data,
            layout = layout,
            config = config,
            footer = FOOTER,
        ))
    }
}

/// Axis/figure title in the plotly shape, with a font size.
pub(crate) fn title(text: &str, size: u32) -> Value {
    json!({"text": text, "font": {"size": size}})
}

/// Integer-precision label, as shown on ticks and in summaries.
pub fn rounded(value: f64) -> String {
    format!("{:.0}", value)
}

// Server-provided labels end up inside a <script> element
fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
