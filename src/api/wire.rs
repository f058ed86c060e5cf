//! Backend JSON shapes, as loose as the backend actually sends them.
//!
//! Every field the backend may omit or null is an `Option`; the normalizer
//! decides what a missing value means.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Backend identifiers arrive as integers, but some revisions send strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Int(i64),
    Text(String),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Int(value) => write!(f, "{}", value),
            WireId::Text(value) => f.write_str(value.trim()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMotion {
    pub id: Option<WireId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub introduced_by_mp_id: Option<WireId>,
    pub introduced_by_party: Option<String>,
    pub vote_results_by_party: Option<BTreeMap<String, Option<WirePartyResult>>>,
    pub passed: Option<bool>,
    pub categories: Option<Vec<String>>,
    pub classification: Option<String>,
    pub date: Option<String>,
}

/// Either granular counts or a single recorded `vote` for the party.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WirePartyResult {
    pub yea: Option<i64>,
    pub nay: Option<i64>,
    pub abstain: Option<i64>,
    pub vote: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMp {
    pub id: Option<WireId>,
    pub name: Option<String>,
    pub riding: Option<String>,
    pub party: Option<String>,
    pub photo_url: Option<String>,
    pub attendance_rate: Option<f64>,
    pub party_line_voting_rate: Option<f64>,
    pub years_in_office: Option<i64>,
    pub email: Option<String>,
    pub constituency_office: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WirePostalLookup {
    pub postal_code: Option<String>,
    pub presumed_riding: Option<String>,
    pub presumed_province: Option<String>,
    pub mp_id: Option<WireId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireVoteRecord {
    pub id: Option<WireId>,
    pub motion_id: Option<WireId>,
    pub motion_title: Option<String>,
    pub vote: Option<String>,
    pub date: Option<String>,
    pub matched_party_line: Option<bool>,
    pub proposed_by_party: Option<String>,
    pub motion_passed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireSpeech {
    pub id: Option<WireId>,
    pub mp_id: Option<WireId>,
    pub motion_id: Option<WireId>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireSpendingSummary {
    pub total_amount: Option<f64>,
    pub entries: Option<Vec<WireSpendingEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireSpendingEntry {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub fiscal_year: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireTransparencySummary {
    pub filings_count: Option<i64>,
    pub entries: Option<Vec<WireTransparencyEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireTransparencyEntry {
    pub registry_type: Option<String>,
    pub details: Option<String>,
    pub filed_date: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireActivity {
    pub speeches_count: Option<i64>,
    pub motions_sponsored: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMotionSummary {
    pub motion_id: Option<WireId>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireVoteRequest {
    pub mp_id: i64,
    pub vote: &'static str,
}
