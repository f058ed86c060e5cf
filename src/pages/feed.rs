use std::{collections::BTreeMap, sync::Arc};

use crate::{
    api::{MotionFilter, ParliamentApi},
    model::{Motion, MotionCategory, UserVote},
    pages::notice::{Notice, Notices},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    Cleared,
    Failed,
    UnknownMotion,
}

/// Home page: the motion feed with its category filter.
pub struct FeedPage {
    api: Arc<dyn ParliamentApi>,
    loading: bool,
    loaded: bool,
    category: Option<MotionCategory>,
    motions: Vec<Motion>,
    explanations: BTreeMap<String, String>,
    notices: Notices,
}

impl FeedPage {
    pub fn new(api: Arc<dyn ParliamentApi>) -> Self {
        Self {
            api,
            loading: false,
            loaded: false,
            category: None,
            motions: Vec::new(),
            explanations: BTreeMap::new(),
            notices: Notices::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn category(&self) -> Option<MotionCategory> {
        self.category
    }

    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    pub fn explanation(&self, motion_id: &str) -> Option<&str> {
        self.explanations.get(motion_id).map(String::as_str)
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    pub async fn load(&mut self) {
        self.loading = true;
        let filter = MotionFilter {
            category: self.category,
        };

        match self.api.get_motions(filter).await {
            Ok(mut motions) => {
                // Local vote marks outlive a refetch of the same motion.
                for motion in &mut motions {
                    motion.user_vote = self
                        .motions
                        .iter()
                        .find(|previous| previous.id == motion.id)
                        .and_then(|previous| previous.user_vote);
                }
                tracing::debug!(
                    target: "pages",
                    category = ?self.category,
                    count = motions.len(),
                    "feed_loaded"
                );
                self.motions = motions;
                self.loaded = true;
            }
            Err(err) => {
                tracing::warn!(
                    target: "pages",
                    category = ?self.category,
                    error = %err,
                    "feed_load_failed"
                );
                self.notices.push(
                    Notice::error("Error loading motions").with_description("Please try again later"),
                );
            }
        }

        self.loading = false;
    }

    pub async fn select_category(&mut self, category: Option<MotionCategory>) {
        self.category = category;
        self.load().await;
    }

    /// Toggles the reader's mark on a motion. Repeating the current
    /// direction clears the mark locally; a new direction is sent to the
    /// backend and the mark stays even when the backend rejects it.
    pub async fn vote(&mut self, motion_id: &str, direction: UserVote) -> VoteOutcome {
        let Some(index) = self.motions.iter().position(|motion| motion.id == motion_id) else {
            self.notices
                .push(Notice::error("Motion not found").with_description(motion_id.to_string()));
            return VoteOutcome::UnknownMotion;
        };

        if self.motions[index].user_vote == Some(direction) {
            self.motions[index].user_vote = None;
            return VoteOutcome::Cleared;
        }
        self.motions[index].user_vote = Some(direction);

        match self.api.vote_on_motion(motion_id, direction).await {
            Ok(()) => {
                let motion = &mut self.motions[index];
                match direction {
                    UserVote::Up => motion.upvotes = motion.upvotes.saturating_add(1),
                    UserVote::Down => motion.downvotes = motion.downvotes.saturating_add(1),
                }
                self.notices.push(
                    Notice::info("Vote recorded").with_description("Thank you for your feedback"),
                );
                VoteOutcome::Recorded
            }
            Err(err) => {
                tracing::warn!(
                    target: "pages",
                    motion_id = %motion_id,
                    error = %err,
                    "motion_vote_failed"
                );
                self.notices.push(Notice::error("Error recording vote"));
                VoteOutcome::Failed
            }
        }
    }

    pub async fn explain(&mut self, motion_id: &str) {
        match self.api.get_motion_summary(motion_id).await {
            Ok(Some(summary)) if !summary.summary.trim().is_empty() => {
                self.explanations
                    .insert(motion_id.to_string(), summary.summary);
            }
            Ok(_) => {
                self.notices
                    .push(Notice::info("AI explanation not available yet"));
            }
            Err(err) => {
                tracing::warn!(
                    target: "pages",
                    motion_id = %motion_id,
                    error = %err,
                    "motion_summary_failed"
                );
                self.notices.push(
                    Notice::error("Error loading explanation").with_description(err.message),
                );
            }
        }
    }
}
