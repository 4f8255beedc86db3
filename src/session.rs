//! One submission: three independent fetch-and-render branches.

use client::{PredictionApi, Result as ClientResult};
use common::{AgeSeriesPoint, ChronicSeriesPoint, PredictionRequest, PredictionResult};
use render::{RenderOutcome, Renderer, SeriesChart};
use tracing::{info, instrument, warn};

/// Outcome of every branch of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub baseline: RenderOutcome,
    pub chronic: RenderOutcome,
    pub age_of_building: RenderOutcome,
}

impl SessionReport {
    pub fn rendered_count(&self) -> usize {
        [&self.baseline, &self.chronic, &self.age_of_building]
            .iter()
            .filter(|outcome| outcome.is_rendered())
            .count()
    }
}

/// Runs the baseline, quarterly and building-age predictions for a request.
///
/// A failure in one branch is reported and never stops the others.
pub struct PredictionSession<'a> {
    api: &'a dyn PredictionApi,
    renderer: Renderer<'a>,
}

impl<'a> PredictionSession<'a> {
    pub fn new(api: &'a dyn PredictionApi, renderer: Renderer<'a>) -> Self {
        Self { api, renderer }
    }

    /// Fetch and render each branch in turn.
    #[instrument(skip_all, fields(address = %request.address))]
    pub async fn run(&self, request: &PredictionRequest) -> SessionReport {
        let baseline = self.render_baseline(self.api.fetch_baseline(request).await);
        let chronic = self.render_chronic(self.api.fetch_chronic(request).await);
        let age_of_building =
            self.render_age_of_building(self.api.fetch_age_of_building(request).await);

        self.finish(SessionReport {
            baseline,
            chronic,
            age_of_building,
        })
    }

    /// Issue the three requests concurrently, then render in the usual order.
    #[instrument(skip_all, fields(address = %request.address))]
    pub async fn run_concurrently(&self, request: &PredictionRequest) -> SessionReport {
        let (baseline, chronic, age_of_building) = tokio::join!(
            self.api.fetch_baseline(request),
            self.api.fetch_chronic(request),
            self.api.fetch_age_of_building(request),
        );

        self.finish(SessionReport {
            baseline: self.render_baseline(baseline),
            chronic: self.render_chronic(chronic),
            age_of_building: self.render_age_of_building(age_of_building),
        })
    }

    fn render_baseline(&self, fetched: ClientResult<PredictionResult>) -> RenderOutcome {
        match fetched {
            Ok(result) => self.renderer.render_baseline(&result),
            Err(e) => {
                warn!("Baseline prediction failed: {}", e);
                self.renderer.advise(&e)
            }
        }
    }

    fn render_chronic(&self, fetched: ClientResult<Vec<ChronicSeriesPoint>>) -> RenderOutcome {
        match fetched {
            Ok(points) => self.renderer.render_series(&SeriesChart::QUARTERLY, &points),
            Err(e) => {
                warn!("Quarterly prediction failed: {}", e);
                self.renderer.advise(&e)
            }
        }
    }

    fn render_age_of_building(&self, fetched: ClientResult<Vec<AgeSeriesPoint>>) -> RenderOutcome {
        match fetched {
            Ok(points) => self.renderer.render_series(&SeriesChart::AGE_OF_BUILDING, &points),
            Err(e) => {
                warn!("Building age prediction failed: {}", e);
                self.renderer.advise(&e)
            }
        }
    }

    fn finish(&self, report: SessionReport) -> SessionReport {
        info!(rendered = report.rendered_count(), "Prediction session finished");
        report
    }
}
