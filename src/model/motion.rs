use std::fmt;

use time::Date;

use crate::model::party::PartyName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStatus {
    Passed,
    Failed,
    InProgress,
}

impl MotionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MotionStatus::Passed => "Passed",
            MotionStatus::Failed => "Failed",
            MotionStatus::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for MotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotionCategory {
    Economics,
    Trade,
    Healthcare,
    Justice,
    EnvironmentEnergy,
    SocialRightsIndigenousAffairs,
    ForeignAffairs,
    Immigration,
    Infrastructure,
}

impl MotionCategory {
    pub const ALL: [MotionCategory; 9] = [
        MotionCategory::Economics,
        MotionCategory::Trade,
        MotionCategory::Healthcare,
        MotionCategory::Justice,
        MotionCategory::EnvironmentEnergy,
        MotionCategory::SocialRightsIndigenousAffairs,
        MotionCategory::ForeignAffairs,
        MotionCategory::Immigration,
        MotionCategory::Infrastructure,
    ];

    /// The value the backend stores and filters on.
    pub fn wire_value(&self) -> &'static str {
        match self {
            MotionCategory::Economics => "economics",
            MotionCategory::Trade => "trade",
            MotionCategory::Healthcare => "healthcare",
            MotionCategory::Justice => "justice",
            MotionCategory::EnvironmentEnergy => "environment/energy",
            MotionCategory::SocialRightsIndigenousAffairs => "social rights/Indigenous affairs",
            MotionCategory::ForeignAffairs => "foreign affairs",
            MotionCategory::Immigration => "immigration",
            MotionCategory::Infrastructure => "infrastructure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MotionCategory::Economics => "Economics",
            MotionCategory::Trade => "Trade",
            MotionCategory::Healthcare => "Healthcare",
            MotionCategory::Justice => "Justice",
            MotionCategory::EnvironmentEnergy => "Environment & Energy",
            MotionCategory::SocialRightsIndigenousAffairs => "Social Rights & Indigenous",
            MotionCategory::ForeignAffairs => "Foreign Affairs",
            MotionCategory::Immigration => "Immigration",
            MotionCategory::Infrastructure => "Infrastructure",
        }
    }

    /// Accepts either the wire value or the display label, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        MotionCategory::ALL.into_iter().find(|category| {
            category.wire_value().eq_ignore_ascii_case(needle)
                || category.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for MotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionClassification {
    Substantive,
    Subsidiary,
    Privileged,
    Incidental,
}

impl MotionClassification {
    /// Also accepts the `MotionClassification.<VALUE>` spelling some backend
    /// revisions leak from their enum.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        let value = normalized
            .strip_prefix("motionclassification.")
            .unwrap_or(&normalized);
        match value {
            "substantive" => Some(MotionClassification::Substantive),
            "subsidiary" => Some(MotionClassification::Subsidiary),
            "privileged" => Some(MotionClassification::Privileged),
            "incidental" => Some(MotionClassification::Incidental),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MotionClassification::Substantive => "substantive",
            MotionClassification::Subsidiary => "subsidiary",
            MotionClassification::Privileged => "privileged",
            MotionClassification::Incidental => "incidental",
        }
    }
}

impl fmt::Display for MotionClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyVote {
    pub party: PartyName,
    pub yea: u32,
    pub nay: u32,
    pub abstain: u32,
}

impl PartyVote {
    pub fn total(&self) -> u32 {
        self.yea.saturating_add(self.nay).saturating_add(self.abstain)
    }

    pub fn yea_percentage(&self) -> f64 {
        percentage(self.yea, self.total())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorRef {
    pub mp_id: String,
    /// The backend only sends the sponsor id, so this is usually empty.
    pub mp_name: String,
    pub party: Option<PartyName>,
}

/// Local-only mark of the reader's own up/down vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserVote {
    Up,
    Down,
}

impl UserVote {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "up" | "upvote" | "+" => Some(UserVote::Up),
            "down" | "downvote" | "-" => Some(UserVote::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub introduced_by: SponsorRef,
    pub status: MotionStatus,
    pub categories: Vec<MotionCategory>,
    pub classification: MotionClassification,
    pub vote_breakdown: Vec<PartyVote>,
    pub date: Date,
    pub upvotes: u32,
    pub downvotes: u32,
    pub user_vote: Option<UserVote>,
}

impl Motion {
    pub fn total_votes(&self) -> u32 {
        self.vote_breakdown
            .iter()
            .fold(0u32, |acc, vote| acc.saturating_add(vote.total()))
    }

    pub fn total_yea(&self) -> u32 {
        self.vote_breakdown
            .iter()
            .fold(0u32, |acc, vote| acc.saturating_add(vote.yea))
    }

    /// Share of all recorded ballots that were yea, 0 when nothing was recorded.
    pub fn yea_percentage(&self) -> f64 {
        percentage(self.total_yea(), self.total_votes())
    }

    /// One party's yea count as a share of every ballot on the motion.
    pub fn party_yea_share(&self, party: PartyName) -> f64 {
        let yea = self
            .vote_breakdown
            .iter()
            .filter(|vote| vote.party == party)
            .fold(0u32, |acc, vote| acc.saturating_add(vote.yea));
        percentage(yea, self.total_votes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionSummary {
    pub motion_id: String,
    pub summary: String,
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}
