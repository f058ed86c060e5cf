use std::fmt;

use time::Date;

use crate::model::party::PartyName;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMedia {
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub website: Option<String>,
}

impl SocialMedia {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.facebook.is_none() && self.website.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub constituency_office: Option<String>,
    pub social: SocialMedia,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mp {
    pub id: String,
    pub name: String,
    pub riding: String,
    pub party: PartyName,
    pub image_url: Option<String>,
    /// 0-100
    pub attendance_rate: f64,
    /// 0-100
    pub party_line_voting: f64,
    pub years_in_office: u32,
    pub contact: ContactInfo,
}

impl Mp {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    pub fn has_real_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.is_empty() && url != PLACEHOLDER_IMAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallotChoice {
    Yea,
    Nay,
    Abstain,
}

impl BallotChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yea" => Some(BallotChoice::Yea),
            "nay" => Some(BallotChoice::Nay),
            "abstain" => Some(BallotChoice::Abstain),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BallotChoice::Yea => "Yea",
            BallotChoice::Nay => "Nay",
            BallotChoice::Abstain => "Abstain",
        }
    }
}

impl fmt::Display for BallotChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ballot from an MP's voting record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: String,
    pub motion_id: String,
    pub motion_title: String,
    pub vote: BallotChoice,
    pub date: Option<Date>,
    pub matched_party_line: bool,
    pub proposed_by_party: Option<PartyName>,
    pub motion_passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    pub id: String,
    pub mp_id: String,
    pub motion_id: Option<String>,
    pub date: Option<Date>,
    pub topic: String,
    pub excerpt: String,
    pub full_text: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingItem {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub fiscal_year: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureType {
    Stock,
    Conflict,
    Gift,
    Travel,
}

impl DisclosureType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stock" => Some(DisclosureType::Stock),
            "conflict" => Some(DisclosureType::Conflict),
            "gift" => Some(DisclosureType::Gift),
            "travel" => Some(DisclosureType::Travel),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisclosureType::Stock => "stock",
            DisclosureType::Conflict => "conflict",
            DisclosureType::Gift => "gift",
            DisclosureType::Travel => "travel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransparencyItem {
    pub kind: DisclosureType,
    pub description: String,
    pub date: Option<Date>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParliamentaryActivity {
    pub speeches_count: u32,
    pub motions_sponsored: u32,
}
