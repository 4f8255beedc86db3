//! HTTP client for the rent prediction API.
//!
//! All three endpoints share method, headers and body; [`PredictionClient::predict`] is the
//! single request path and the per-endpoint methods only pick the path and response shape.

pub mod error;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use common::{
    AgeOfBuildingPredictions, AgeSeriesPoint, ChronicPredictions, ChronicSeriesPoint,
    PredictionRequest, PredictionResult,
};
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, trace, warn};

pub use error::{ClientError, Result};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Default host of the public prediction API.
pub const DEFAULT_API_HOST: &str = "http://api.immolex.ch:8051";

/// Secret API key. Never printed, not even in `Debug` output.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.0).map_err(|e| {
            ClientError::Configuration(format!("API key is not a valid header value: {}", e))
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// The prediction endpoints, all served from the same host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Point prediction with confidence interval
    Baseline,
    /// Quarterly development of the prediction
    Chronic,
    /// Prediction for a range of building ages
    AgeOfBuilding,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Baseline => "/predictCH",
            Endpoint::Chronic => "/predictCHChronic",
            Endpoint::AgeOfBuilding => "/predictCHAgeOfBuilding",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Connection settings of a [`PredictionClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Scheme, host and optional port, e.g. `http://api.immolex.ch:8051`
    pub base_url: String,
    pub api_key: ApiKey,
    pub timeout: Duration,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The three prediction operations, as seen by callers that render their results.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    async fn fetch_baseline(&self, request: &PredictionRequest) -> Result<PredictionResult>;

    async fn fetch_chronic(&self, request: &PredictionRequest) -> Result<Vec<ChronicSeriesPoint>>;

    async fn fetch_age_of_building(
        &self,
        request: &PredictionRequest,
    ) -> Result<Vec<AgeSeriesPoint>>;
}

/// reqwest-backed implementation of [`PredictionApi`].
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: HeaderValue,
}

impl PredictionClient {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| {
                ClientError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        let base_url = settings.base_url.trim_end_matches('/').to_string();
        debug!("Prediction client targeting {}", base_url);

        Ok(Self {
            http,
            base_url,
            api_key: settings.api_key.header_value()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `request` to `endpoint` and decode a 2xx body as `T`.
    ///
    /// Issues exactly one HTTP call; failures are classified, never retried.
    #[instrument(skip(self, request), fields(address = %request.address))]
    pub async fn predict<T>(&self, endpoint: Endpoint, request: &PredictionRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!("POST request to: {}", url);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} - Request failed: {}", endpoint, e);
                ClientError::Network(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("POST {} - Failed to read response body: {}", endpoint, e);
            ClientError::Network(e)
        })?;

        if !status.is_success() {
            warn!("POST {} - Non-OK response: {}", endpoint, status);
            let detail = error_detail(&body);
            error!("POST {} - API error: {}", endpoint, detail);
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        trace!("POST {} - Response received, parsing JSON", endpoint);
        let parsed = serde_json::from_str(&body).map_err(|e| {
            error!("POST {} - Failed to parse response: {}", endpoint, e);
            ClientError::MalformedResponse(e.to_string())
        })?;

        info!("POST {} - Success", endpoint);
        Ok(parsed)
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn fetch_baseline(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.predict(Endpoint::Baseline, request).await
    }

    async fn fetch_chronic(&self, request: &PredictionRequest) -> Result<Vec<ChronicSeriesPoint>> {
        let envelope: ChronicPredictions = self.predict(Endpoint::Chronic, request).await?;
        Ok(envelope.chronical_predictions)
    }

    async fn fetch_age_of_building(
        &self,
        request: &PredictionRequest,
    ) -> Result<Vec<AgeSeriesPoint>> {
        let envelope: AgeOfBuildingPredictions =
            self.predict(Endpoint::AgeOfBuilding, request).await?;
        Ok(envelope.ageofbuilding_predictions)
    }
}

/// Extract the human-readable detail of an error body.
///
/// The API usually answers `{"detail": "..."}`. Anything else (non-JSON, non-object,
/// missing `detail`) falls back to the raw body text.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        _ => body.to_string(),
    }
}
