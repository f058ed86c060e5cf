use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    api::{
        error::{ApiError, ApiErrorKind, NormalizeError, invalid_request},
        http_common::{Endpoint, decode_json, ensure_success, vote_request},
        normalizer::Normalizer,
        ports::{MotionFilter, ParliamentApi},
        transport::{HttpRequest, HttpTransport, ReqwestTransport},
        wire::{
            WireActivity, WireMotion, WireMotionSummary, WireMp, WirePostalLookup, WireSpeech,
            WireSpendingSummary, WireTransparencySummary, WireVoteRecord,
        },
    },
    config::ApiConfig,
    model::{
        Motion, MotionSummary, Mp, ParliamentaryActivity, Speech, SpendingItem, TransparencyItem,
        UserVote, Vote,
    },
};

/// The backend adapter: issues requests through an [`HttpTransport`] and
/// normalizes every payload before it leaves this type.
pub struct ParliamentClient {
    transport: Arc<dyn HttpTransport>,
    normalizer: Normalizer,
}

impl ParliamentClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            normalizer: Normalizer::default(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(ReqwestTransport::new(config)?)))
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    async fn fetch_required<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let endpoint = request.endpoint.clone();
        let response = self.transport.send(request).await?;
        ensure_success(&endpoint, &response)?;
        decode_json(&endpoint, &response)
    }

    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Option<T>, ApiError> {
        let response = self.transport.send(HttpRequest::get(endpoint.clone())).await?;
        if !response.is_success() {
            if response.status == 404 {
                tracing::debug!(target: "api", endpoint = %endpoint, "backend_entity_not_found");
            } else {
                tracing::warn!(
                    target: "api",
                    endpoint = %endpoint,
                    status = response.status,
                    "backend_lookup_treated_as_missing"
                );
            }
            return Ok(None);
        }
        decode_json(&endpoint, &response).map(Some)
    }

    async fn fetch_soft<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Option<T> {
        match self.fetch_required(HttpRequest::get(endpoint.clone())).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(
                    target: "api",
                    endpoint = %endpoint,
                    error = %err,
                    "history_lookup_degraded"
                );
                None
            }
        }
    }

    fn normalize_all<W, T>(
        &self,
        endpoint: &Endpoint,
        records: Vec<W>,
        normalize: impl Fn(W) -> Result<T, NormalizeError>,
    ) -> Result<Vec<T>, ApiError> {
        records
            .into_iter()
            .map(normalize)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ApiError::from(err).with_endpoint(endpoint.to_string()))
    }

    fn degrade<T>(endpoint: &Endpoint, result: Result<Vec<T>, ApiError>) -> Vec<T> {
        result.unwrap_or_else(|err| {
            tracing::warn!(
                target: "api",
                endpoint = %endpoint,
                error = %err,
                "history_payload_rejected"
            );
            Vec::new()
        })
    }
}

#[async_trait]
impl ParliamentApi for ParliamentClient {
    async fn get_motions(&self, filter: MotionFilter) -> Result<Vec<Motion>, ApiError> {
        let endpoint = Endpoint::motions();
        let mut request = HttpRequest::get(endpoint.clone());
        if let Some(category) = filter.category {
            request = request.with_query("category", category.wire_value());
        }

        let records: Vec<WireMotion> = self.fetch_required(request).await?;
        self.normalize_all(&endpoint, records, |wire| self.normalizer.motion(wire))
    }

    async fn get_motion_by_id(&self, id: &str) -> Result<Option<Motion>, ApiError> {
        let endpoint = Endpoint::motion(id);
        let Some(wire) = self.fetch_optional::<WireMotion>(endpoint.clone()).await? else {
            return Ok(None);
        };
        self.normalizer
            .motion(wire)
            .map(Some)
            .map_err(|err| ApiError::from(err).with_endpoint(endpoint.to_string()))
    }

    async fn vote_on_motion(&self, motion_id: &str, direction: UserVote) -> Result<(), ApiError> {
        let endpoint = Endpoint::motion_vote(motion_id);
        let body = serde_json::to_value(vote_request(direction))
            .map_err(|err| invalid_request(format!("failed to encode vote: {}", err)))?;

        let response = self
            .transport
            .send(HttpRequest::post(endpoint.clone(), body))
            .await?;
        if !response.is_success() {
            return Err(ApiError::new(ApiErrorKind::HttpStatus, "failed to vote on motion")
                .with_status(response.status)
                .with_endpoint(endpoint.to_string()));
        }

        tracing::info!(
            target: "api",
            motion_id = %motion_id,
            direction = ?direction,
            "motion_vote_recorded"
        );
        Ok(())
    }

    async fn get_motion_summary(
        &self,
        motion_id: &str,
    ) -> Result<Option<MotionSummary>, ApiError> {
        let endpoint = Endpoint::motion_summary(motion_id);
        let Some(wire) = self
            .fetch_optional::<WireMotionSummary>(endpoint.clone())
            .await?
        else {
            return Ok(None);
        };
        self.normalizer
            .motion_summary(motion_id, wire)
            .map(Some)
            .map_err(|err| ApiError::from(err).with_endpoint(endpoint.to_string()))
    }

    async fn get_mps(&self) -> Result<Vec<Mp>, ApiError> {
        let endpoint = Endpoint::mps();
        let records: Vec<WireMp> = self.fetch_required(HttpRequest::get(endpoint.clone())).await?;
        self.normalize_all(&endpoint, records, |wire| self.normalizer.mp(wire))
    }

    async fn get_mp_by_id(&self, id: &str) -> Result<Option<Mp>, ApiError> {
        let endpoint = Endpoint::mp(id);
        let Some(wire) = self.fetch_optional::<WireMp>(endpoint.clone()).await? else {
            return Ok(None);
        };
        self.normalizer
            .mp(wire)
            .map(Some)
            .map_err(|err| ApiError::from(err).with_endpoint(endpoint.to_string()))
    }

    async fn search_mps(&self, query: &str) -> Result<Vec<Mp>, ApiError> {
        let endpoint = Endpoint::mps();
        let mut request = HttpRequest::get(endpoint.clone());
        let query = query.trim();
        if !query.is_empty() {
            request = request.with_query("search", query);
        }

        let records: Vec<WireMp> = self.fetch_required(request).await?;
        self.normalize_all(&endpoint, records, |wire| self.normalizer.mp(wire))
    }

    async fn get_mp_by_postal_code(&self, postal_code: &str) -> Result<Option<Mp>, ApiError> {
        let lookup = self
            .fetch_optional::<WirePostalLookup>(Endpoint::postal_code_lookup(postal_code))
            .await?;
        let Some(mp_id) = lookup.and_then(|wire| self.normalizer.postal_lookup(wire)) else {
            tracing::debug!(target: "api", postal_code = %postal_code, "postal_code_unresolved");
            return Ok(None);
        };
        self.get_mp_by_id(&mp_id).await
    }

    async fn get_mp_votes(&self, mp_id: &str) -> Vec<Vote> {
        let endpoint = Endpoint::mp_voting_record(mp_id);
        let Some(records) = self
            .fetch_soft::<Vec<WireVoteRecord>>(endpoint.clone())
            .await
        else {
            return Vec::new();
        };
        let votes = self.normalize_all(&endpoint, records, |wire| {
            self.normalizer.vote_record(wire)
        });
        Self::degrade(&endpoint, votes)
    }

    async fn get_mp_speeches(&self, mp_id: &str) -> Vec<Speech> {
        let endpoint = Endpoint::mp_speeches(mp_id);
        let Some(records) = self.fetch_soft::<Vec<WireSpeech>>(endpoint.clone()).await else {
            return Vec::new();
        };
        let speeches = self.normalize_all(&endpoint, records, |wire| {
            self.normalizer.speech(mp_id, wire)
        });
        Self::degrade(&endpoint, speeches)
    }

    async fn get_mp_spending(&self, mp_id: &str) -> Vec<SpendingItem> {
        let endpoint = Endpoint::mp_spending(mp_id);
        self.fetch_soft::<WireSpendingSummary>(endpoint)
            .await
            .map(|summary| self.normalizer.spending(summary))
            .unwrap_or_default()
    }

    async fn get_mp_transparency(&self, mp_id: &str) -> Vec<TransparencyItem> {
        let endpoint = Endpoint::mp_transparency(mp_id);
        let Some(summary) = self
            .fetch_soft::<WireTransparencySummary>(endpoint.clone())
            .await
        else {
            return Vec::new();
        };
        let items = self
            .normalizer
            .transparency(summary)
            .map_err(|err| ApiError::from(err).with_endpoint(endpoint.to_string()));
        Self::degrade(&endpoint, items)
    }

    async fn get_mp_activity(&self, mp_id: &str) -> Option<ParliamentaryActivity> {
        let endpoint = Endpoint::mp_activity(mp_id);
        let wire = self.fetch_soft::<WireActivity>(endpoint.clone()).await?;
        match self.normalizer.activity(wire) {
            Ok(activity) => Some(activity),
            Err(err) => {
                tracing::warn!(
                    target: "api",
                    endpoint = %endpoint,
                    error = %err,
                    "history_payload_rejected"
                );
                None
            }
        }
    }
}
