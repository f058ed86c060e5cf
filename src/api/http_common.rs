use std::fmt;

use serde::de::DeserializeOwned;

use crate::{
    api::{
        error::{ApiError, invalid_payload, status_error},
        transport::HttpResponse,
        wire::WireVoteRequest,
    },
    model::UserVote,
};

/// Voter attributed to every cast vote until the backend has sessions.
pub const PLACEHOLDER_VOTER_ID: i64 = 1;

/// A backend path relative to the configured base URL, kept as raw
/// segments so the transport can percent-encode each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn motions() -> Self {
        Self::from_segments(["motions"])
    }

    pub fn motion(id: &str) -> Self {
        Self::from_segments(["motions", id])
    }

    pub fn motion_vote(id: &str) -> Self {
        Self::from_segments(["motions", id, "vote"])
    }

    pub fn motion_summary(id: &str) -> Self {
        Self::from_segments(["motions", id, "ai-summary"])
    }

    pub fn mps() -> Self {
        Self::from_segments(["mps"])
    }

    pub fn mp(id: &str) -> Self {
        Self::from_segments(["mps", id])
    }

    pub fn mp_voting_record(id: &str) -> Self {
        Self::from_segments(["mps", id, "voting-record"])
    }

    pub fn mp_speeches(id: &str) -> Self {
        Self::from_segments(["mps", id, "speeches"])
    }

    pub fn mp_spending(id: &str) -> Self {
        Self::from_segments(["mps", id, "spending"])
    }

    pub fn mp_transparency(id: &str) -> Self {
        Self::from_segments(["mps", id, "transparency"])
    }

    pub fn mp_activity(id: &str) -> Self {
        Self::from_segments(["mps", id, "parliamentary-activity"])
    }

    pub fn postal_code_lookup(code: &str) -> Self {
        Self::from_segments(["lookup", "postal-code", code])
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

pub fn vote_to_wire(direction: UserVote) -> &'static str {
    match direction {
        UserVote::Up => "upvote",
        UserVote::Down => "downvote",
    }
}

pub fn vote_request(direction: UserVote) -> WireVoteRequest {
    WireVoteRequest {
        mp_id: PLACEHOLDER_VOTER_ID,
        vote: vote_to_wire(direction),
    }
}

pub fn ensure_success(endpoint: &Endpoint, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(status_error(
        response.status,
        &endpoint.to_string(),
        &response.body,
    ))
}

pub fn decode_json<T: DeserializeOwned>(
    endpoint: &Endpoint,
    response: &HttpResponse,
) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|err| {
        invalid_payload(format!("failed to decode backend payload: {}", err))
            .with_endpoint(endpoint.to_string())
            .with_status(response.status)
    })
}
