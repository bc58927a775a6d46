//! Blocking HTTP client for the remote eviction predictor.
//!
//! One synchronous POST per consultation; the configured timeout bounds the
//! only suspension point in the whole request path. Any transport error,
//! non-success status, or response without a usable `evict` field maps to
//! [`PredictorError`] and is resolved by the caller's LFU fallback.

use std::time::Duration;

use super::{EvictionPredictor, PredictRequest, PredictResponse, PredictorError};
use crate::config::PredictorConfig;
use crate::history::PageId;

/// HTTP adapter for the prediction service.
#[derive(Debug)]
pub struct RemotePredictor {
    client: reqwest::blocking::Client,
    url: String,
}

impl RemotePredictor {
    /// Creates a predictor client for the configured endpoint.
    ///
    /// Client construction failure is itself a request-construction
    /// failure in the predictor taxonomy, hence the `Result`.
    pub fn new(config: &PredictorConfig) -> Result<Self, PredictorError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

impl EvictionPredictor for RemotePredictor {
    /// Sends the feature payload and decodes the chosen page identifier.
    fn predict(&self, request: &PredictRequest) -> Result<PageId, PredictorError> {
        let response = self.client.post(&self.url).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictorError::Status(status.as_u16()));
        }

        let body: PredictResponse = response.json()?;
        body.evict
            .as_deref()
            .and_then(PageId::parse)
            .ok_or(PredictorError::MissingChoice)
    }
}
