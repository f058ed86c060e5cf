use std::{fmt, sync::Arc};

use crate::{
    api::ParliamentApi,
    model::{Mp, ParliamentaryActivity, Speech, SpendingItem, TransparencyItem, Vote},
    pages::notice::{Notice, Notices},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Voting,
    Activity,
    Spending,
    Transparency,
    Contact,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 5] = [
        ProfileTab::Voting,
        ProfileTab::Activity,
        ProfileTab::Spending,
        ProfileTab::Transparency,
        ProfileTab::Contact,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "voting" | "votes" => Some(ProfileTab::Voting),
            "activity" | "speeches" => Some(ProfileTab::Activity),
            "spending" => Some(ProfileTab::Spending),
            "transparency" => Some(ProfileTab::Transparency),
            "contact" => Some(ProfileTab::Contact),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Voting => "Voting Record",
            ProfileTab::Activity => "Activity",
            ProfileTab::Spending => "Spending",
            ProfileTab::Transparency => "Transparency",
            ProfileTab::Contact => "Contact",
        }
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything shown on a loaded profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MpProfile {
    pub mp: Mp,
    pub votes: Vec<Vote>,
    pub speeches: Vec<Speech>,
    pub activity: Option<ParliamentaryActivity>,
    pub spending: Vec<SpendingItem>,
    pub transparency: Vec<TransparencyItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    NotLoaded,
    NotFound,
    Loaded(Box<MpProfile>),
}

pub struct MpProfilePage {
    api: Arc<dyn ParliamentApi>,
    mp_id: String,
    loading: bool,
    state: ProfileState,
    tab: ProfileTab,
    notices: Notices,
}

impl MpProfilePage {
    pub fn new(api: Arc<dyn ParliamentApi>, mp_id: impl Into<String>) -> Self {
        Self {
            api,
            mp_id: mp_id.into(),
            loading: false,
            state: ProfileState::NotLoaded,
            tab: ProfileTab::default(),
            notices: Notices::default(),
        }
    }

    pub fn mp_id(&self) -> &str {
        &self.mp_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn profile(&self) -> Option<&MpProfile> {
        match &self.state {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    pub async fn load(&mut self) {
        self.loading = true;

        match self.api.get_mp_by_id(&self.mp_id).await {
            Ok(Some(mp)) => {
                let api = &self.api;
                let mp_id = self.mp_id.as_str();
                let (votes, speeches, activity, spending, transparency) = tokio::join!(
                    api.get_mp_votes(mp_id),
                    api.get_mp_speeches(mp_id),
                    api.get_mp_activity(mp_id),
                    api.get_mp_spending(mp_id),
                    api.get_mp_transparency(mp_id),
                );

                tracing::debug!(
                    target: "pages",
                    mp_id = %self.mp_id,
                    votes = votes.len(),
                    speeches = speeches.len(),
                    spending_items = spending.len(),
                    disclosures = transparency.len(),
                    "mp_profile_loaded"
                );
                self.state = ProfileState::Loaded(Box::new(MpProfile {
                    mp,
                    votes,
                    speeches,
                    activity,
                    spending,
                    transparency,
                }));
            }
            Ok(None) => {
                tracing::debug!(target: "pages", mp_id = %self.mp_id, "mp_profile_not_found");
                self.state = ProfileState::NotFound;
            }
            Err(err) => {
                tracing::warn!(
                    target: "pages",
                    mp_id = %self.mp_id,
                    error = %err,
                    "mp_profile_load_failed"
                );
                self.notices
                    .push(Notice::error("Error loading MP profile").with_description(err.message));
            }
        }

        self.loading = false;
    }
}
