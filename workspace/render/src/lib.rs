//! Charts for prediction results.
//!
//! Figures are plotly.js JSON built by pure functions ([`baseline_figure`], [`series_figure`]).
//! [`Renderer`] adds the user-facing side: it reports summaries and advisories through a
//! [`Reporter`] and hands finished figures to a [`ChartSink`].

pub mod baseline;
pub mod error;
pub mod figure;
pub mod notice;
pub mod series;
pub mod sink;

use std::fmt::Display;

use common::{PredictionResult, SeriesPoint};
use tracing::{debug, warn};

pub use baseline::{baseline_figure, baseline_summary, BASELINE_TITLE};
pub use error::{RenderError, SinkError};
pub use figure::Figure;
pub use notice::{ConsoleReporter, MemoryReporter, NoticeKind, Reporter};
pub use series::{series_figure, SeriesChart};
pub use sink::{ChartSink, HtmlDirectorySink, MemorySink};

/// File stem of the baseline chart.
pub const BASELINE_CHART: &str = "baseline";

/// What happened to one prediction branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A chart was published at the given location
    Rendered(String),
    /// The user was shown this advisory instead of a chart
    Advised(String),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }
}

/// Renders results and reports advisories for one submission.
pub struct Renderer<'a> {
    reporter: &'a dyn Reporter,
    sink: &'a dyn ChartSink,
}

impl<'a> Renderer<'a> {
    pub fn new(reporter: &'a dyn Reporter, sink: &'a dyn ChartSink) -> Self {
        Self { reporter, sink }
    }

    /// Surface any failure of a branch as an advisory; the branch draws nothing.
    pub fn advise(&self, failure: &dyn Display) -> RenderOutcome {
        let message = failure.to_string();
        self.reporter.show_error(&message);
        RenderOutcome::Advised(message)
    }

    pub fn render_baseline(&self, result: &PredictionResult) -> RenderOutcome {
        let figure = match baseline_figure(result) {
            Ok(figure) => figure,
            Err(e) => return self.advise(&e),
        };

        let [prediction_line, interval_line] = baseline_summary(result);
        self.reporter.show_headline(&prediction_line);
        self.reporter.show_info(&interval_line);

        self.publish(BASELINE_CHART, BASELINE_TITLE, &figure)
    }

    pub fn render_series<P: SeriesPoint>(
        &self,
        chart: &SeriesChart,
        points: &[P],
    ) -> RenderOutcome {
        debug!("Rendering {} series with {} points", chart.name, points.len());
        let figure = match series_figure(chart, points) {
            Ok(figure) => figure,
            Err(e) => return self.advise(&e),
        };

        self.reporter.show_headline(chart.headline);
        self.publish(chart.name, chart.title, &figure)
    }

    fn publish(&self, name: &str, title: &str, figure: &Figure) -> RenderOutcome {
        match self.sink.publish(name, title, figure) {
            Ok(location) => {
                self.reporter.show_info(&format!("Chart written to {}", location));
                RenderOutcome::Rendered(location)
            }
            Err(e) => {
                warn!("Publishing chart {} failed: {}", name, e);
                self.advise(&e)
            }
        }
    }
}
