use async_trait::async_trait;

use crate::{
    api::error::ApiError,
    model::{
        Motion, MotionCategory, MotionSummary, Mp, ParliamentaryActivity, Speech, SpendingItem,
        TransparencyItem, UserVote, Vote,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionFilter {
    pub category: Option<MotionCategory>,
}

/// Everything the pages may ask of the backend.
///
/// Single-entity lookups answer `Ok(None)` when the backend has nothing;
/// history-style lookups never fail and degrade to empty results.
#[async_trait]
pub trait ParliamentApi: Send + Sync {
    async fn get_motions(&self, filter: MotionFilter) -> Result<Vec<Motion>, ApiError>;

    async fn get_motion_by_id(&self, id: &str) -> Result<Option<Motion>, ApiError>;

    async fn vote_on_motion(&self, motion_id: &str, direction: UserVote) -> Result<(), ApiError>;

    async fn get_motion_summary(&self, motion_id: &str)
    -> Result<Option<MotionSummary>, ApiError>;

    async fn get_mps(&self) -> Result<Vec<Mp>, ApiError>;

    async fn get_mp_by_id(&self, id: &str) -> Result<Option<Mp>, ApiError>;

    async fn search_mps(&self, query: &str) -> Result<Vec<Mp>, ApiError>;

    async fn get_mp_by_postal_code(&self, postal_code: &str) -> Result<Option<Mp>, ApiError>;

    async fn get_mp_votes(&self, mp_id: &str) -> Vec<Vote>;

    async fn get_mp_speeches(&self, mp_id: &str) -> Vec<Speech>;

    async fn get_mp_spending(&self, mp_id: &str) -> Vec<SpendingItem>;

    async fn get_mp_transparency(&self, mp_id: &str) -> Vec<TransparencyItem>;

    async fn get_mp_activity(&self, mp_id: &str) -> Option<ParliamentaryActivity>;
}
