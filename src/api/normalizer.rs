use std::collections::BTreeMap;

use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    api::{
        error::NormalizeError,
        wire::{
            WireActivity, WireId, WireMotion, WireMotionSummary, WireMp, WirePartyResult,
            WirePostalLookup, WireSpeech, WireSpendingSummary, WireTransparencySummary,
            WireVoteRecord,
        },
    },
    model::{
        BallotChoice, ContactInfo, DisclosureType, Motion, MotionCategory, MotionClassification,
        MotionStatus, MotionSummary, Mp, PLACEHOLDER_IMAGE, ParliamentaryActivity, PartyName,
        PartyVote, SocialMedia, Speech, SpendingItem, SponsorRef, TransparencyItem, Vote,
    },
};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const EXCERPT_CHARS: usize = 200;
const UNCATEGORIZED_SPENDING: &str = "Other";

/// Turns wire records into domain values under a fixed per-field policy.
///
/// Required fields fail with a [`NormalizeError`]; optional fields fall back
/// to documented defaults. The clock is injected so motion dates without a
/// backend value are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    today: Date,
}

impl Default for Normalizer {
    fn default() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self { today: now.date() }
    }
}

impl Normalizer {
    pub fn with_today(today: Date) -> Self {
        Self { today }
    }

    pub fn motion(&self, wire: WireMotion) -> Result<Motion, NormalizeError> {
        const RECORD: &str = "motion";

        let id = required_id(RECORD, "id", wire.id)?;
        let title = required_text(RECORD, "title", wire.title)?;
        let sponsor_id = required_id(RECORD, "introduced_by_mp_id", wire.introduced_by_mp_id)?;
        let classification = classification(&id, wire.classification.as_deref());

        let status = if wire.passed.unwrap_or(false) {
            MotionStatus::Passed
        } else {
            MotionStatus::InProgress
        };

        let date = parse_date(RECORD, "date", wire.date.as_deref())?.unwrap_or(self.today);

        Ok(Motion {
            introduced_by: SponsorRef {
                mp_id: sponsor_id,
                mp_name: String::new(),
                party: wire
                    .introduced_by_party
                    .as_deref()
                    .and_then(PartyName::parse),
            },
            categories: categories(&id, wire.categories.unwrap_or_default()),
            vote_breakdown: self.party_votes(&id, wire.vote_results_by_party)?,
            description: wire.description.unwrap_or_default(),
            id,
            title,
            status,
            classification,
            date,
            upvotes: 0,
            downvotes: 0,
            user_vote: None,
        })
    }

    /// Builds one tally per party in canonical party order. Keys that name the
    /// same party are summed; keys outside the fixed party set are skipped.
    pub fn party_votes(
        &self,
        motion_id: &str,
        results: Option<BTreeMap<String, Option<WirePartyResult>>>,
    ) -> Result<Vec<PartyVote>, NormalizeError> {
        let mut tallies: BTreeMap<PartyName, PartyVote> = BTreeMap::new();

        for (party_key, result) in results.unwrap_or_default() {
            let Some(party) = PartyName::parse(&party_key) else {
                tracing::warn!(
                    target: "api",
                    motion_id = %motion_id,
                    party = %party_key,
                    "unknown_party_in_vote_results"
                );
                continue;
            };

            let vote = party_vote(party, result.unwrap_or_default())?;
            tallies
                .entry(party)
                .and_modify(|existing| {
                    existing.yea = existing.yea.saturating_add(vote.yea);
                    existing.nay = existing.nay.saturating_add(vote.nay);
                    existing.abstain = existing.abstain.saturating_add(vote.abstain);
                })
                .or_insert(vote);
        }

        Ok(tallies.into_values().collect())
    }

    pub fn mp(&self, wire: WireMp) -> Result<Mp, NormalizeError> {
        const RECORD: &str = "mp";

        let id = required_id(RECORD, "id", wire.id)?;
        let name = required_text(RECORD, "name", wire.name)?;
        let party = match wire.party.as_deref().and_then(PartyName::parse) {
            Some(party) => party,
            None => {
                tracing::warn!(
                    target: "api",
                    mp_id = %id,
                    party = wire.party.as_deref().unwrap_or("-"),
                    "mp_party_defaulted_to_independent"
                );
                PartyName::Independent
            }
        };
        let years_in_office = match wire.years_in_office {
            Some(years) => u32::try_from(years).map_err(|_| {
                NormalizeError::invalid(RECORD, "years_in_office", format!("{} is out of range", years))
            })?,
            None => 0,
        };

        Ok(Mp {
            id,
            name,
            riding: wire.riding.unwrap_or_default(),
            party,
            image_url: Some(
                non_blank(wire.photo_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            ),
            attendance_rate: rate(wire.attendance_rate),
            party_line_voting: rate(wire.party_line_voting_rate),
            years_in_office,
            contact: ContactInfo {
                email: non_blank(wire.email),
                constituency_office: non_blank(wire.constituency_office),
                social: SocialMedia {
                    twitter: non_blank(wire.twitter),
                    facebook: non_blank(wire.facebook),
                    website: non_blank(wire.website),
                },
            },
        })
    }

    /// The MP id a postal-code lookup resolved to, if any.
    pub fn postal_lookup(&self, wire: WirePostalLookup) -> Option<String> {
        wire.mp_id
            .map(|id| id.to_string())
            .filter(|id| !id.is_empty())
    }

    pub fn vote_record(&self, wire: WireVoteRecord) -> Result<Vote, NormalizeError> {
        const RECORD: &str = "vote record";

        let motion_id = required_id(RECORD, "motion_id", wire.motion_id)?;
        let motion_title = required_text(RECORD, "motion_title", wire.motion_title)?;
        let vote_raw = required_text(RECORD, "vote", wire.vote)?;
        let vote = BallotChoice::parse(&vote_raw).ok_or_else(|| {
            NormalizeError::invalid(RECORD, "vote", format!("unknown ballot '{}'", vote_raw))
        })?;

        Ok(Vote {
            id: wire
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| motion_id.clone()),
            motion_id,
            motion_title,
            vote,
            date: parse_date(RECORD, "date", wire.date.as_deref())?,
            matched_party_line: wire.matched_party_line.unwrap_or(false),
            proposed_by_party: wire.proposed_by_party.as_deref().and_then(PartyName::parse),
            motion_passed: wire.motion_passed.unwrap_or(false),
        })
    }

    pub fn speech(&self, requested_mp_id: &str, wire: WireSpeech) -> Result<Speech, NormalizeError> {
        const RECORD: &str = "speech";

        let id = required_id(RECORD, "id", wire.id)?;
        let topic = required_text(RECORD, "title", wire.title)?;
        let full_text = wire.content.unwrap_or_default();

        Ok(Speech {
            id,
            mp_id: wire
                .mp_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| requested_mp_id.to_string()),
            motion_id: wire.motion_id.map(|id| id.to_string()),
            date: parse_date(RECORD, "date", wire.date.as_deref())?,
            topic,
            excerpt: excerpt(&full_text, EXCERPT_CHARS),
            word_count: full_text.split_whitespace().count(),
            full_text,
        })
    }

    pub fn spending(&self, wire: WireSpendingSummary) -> Vec<SpendingItem> {
        let total = wire.total_amount.unwrap_or(0.0);

        wire.entries
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                let amount = entry.amount.unwrap_or(0.0);
                SpendingItem {
                    category: non_blank(entry.category)
                        .unwrap_or_else(|| UNCATEGORIZED_SPENDING.to_string()),
                    amount,
                    percentage: share_of_total(amount, total),
                    fiscal_year: non_blank(entry.fiscal_year),
                }
            })
            .collect()
    }

    pub fn transparency(
        &self,
        wire: WireTransparencySummary,
    ) -> Result<Vec<TransparencyItem>, NormalizeError> {
        const RECORD: &str = "transparency entry";

        let mut items = Vec::new();
        for entry in wire.entries.unwrap_or_default() {
            let raw_type = entry.registry_type.as_deref().unwrap_or("stock");
            let Some(kind) = DisclosureType::parse(raw_type) else {
                tracing::debug!(
                    target: "api",
                    registry_type = %raw_type,
                    "transparency_entry_skipped"
                );
                continue;
            };

            items.push(TransparencyItem {
                kind,
                description: entry.details.unwrap_or_default(),
                date: parse_date(RECORD, "filed_date", entry.filed_date.as_deref())?,
                value: non_blank(entry.value),
            });
        }

        Ok(items)
    }

    pub fn activity(&self, wire: WireActivity) -> Result<ParliamentaryActivity, NormalizeError> {
        const RECORD: &str = "parliamentary activity";

        Ok(ParliamentaryActivity {
            speeches_count: count(RECORD, "speeches_count", wire.speeches_count)?.unwrap_or(0),
            motions_sponsored: count(RECORD, "motions_sponsored", wire.motions_sponsored)?
                .unwrap_or(0),
        })
    }

    pub fn motion_summary(
        &self,
        requested_motion_id: &str,
        wire: WireMotionSummary,
    ) -> Result<MotionSummary, NormalizeError> {
        Ok(MotionSummary {
            motion_id: wire
                .motion_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| requested_motion_id.to_string()),
            summary: required_text("motion summary", "summary", wire.summary)?,
        })
    }
}

fn party_vote(party: PartyName, result: WirePartyResult) -> Result<PartyVote, NormalizeError> {
    const RECORD: &str = "party vote";

    let ballot = result.vote.as_deref().and_then(BallotChoice::parse);
    let from_ballot = |choice: BallotChoice| u32::from(ballot == Some(choice));

    Ok(PartyVote {
        party,
        yea: count(RECORD, "yea", result.yea)?.unwrap_or_else(|| from_ballot(BallotChoice::Yea)),
        nay: count(RECORD, "nay", result.nay)?.unwrap_or_else(|| from_ballot(BallotChoice::Nay)),
        abstain: count(RECORD, "abstain", result.abstain)?
            .unwrap_or_else(|| from_ballot(BallotChoice::Abstain)),
    })
}

/// Missing or unrecognised classifications fall back to substantive, the
/// backend's own default for ingested motions.
fn classification(motion_id: &str, raw: Option<&str>) -> MotionClassification {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return MotionClassification::Substantive;
    };
    MotionClassification::parse(raw).unwrap_or_else(|| {
        tracing::warn!(
            target: "api",
            motion_id = %motion_id,
            classification = %raw,
            "unknown_motion_classification_defaulted"
        );
        MotionClassification::Substantive
    })
}

/// Keeps the backend's order and repetitions; only values outside the fixed
/// category set are dropped.
fn categories(motion_id: &str, raw: Vec<String>) -> Vec<MotionCategory> {
    raw.into_iter()
        .filter_map(|value| {
            let category = MotionCategory::parse(&value);
            if category.is_none() {
                tracing::debug!(
                    target: "api",
                    motion_id = %motion_id,
                    category = %value,
                    "unknown_motion_category_dropped"
                );
            }
            category
        })
        .collect()
}

fn required_id(
    record: &'static str,
    field: &'static str,
    value: Option<WireId>,
) -> Result<String, NormalizeError> {
    value
        .map(|id| id.to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| NormalizeError::missing(record, field))
}

fn required_text(
    record: &'static str,
    field: &'static str,
    value: Option<String>,
) -> Result<String, NormalizeError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| NormalizeError::missing(record, field))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn count(
    record: &'static str,
    field: &'static str,
    value: Option<i64>,
) -> Result<Option<u32>, NormalizeError> {
    value
        .map(|raw| {
            u32::try_from(raw).map_err(|_| {
                NormalizeError::invalid(record, field, format!("{} is not a valid count", raw))
            })
        })
        .transpose()
}

fn rate(value: Option<f64>) -> f64 {
    value
        .filter(|rate| rate.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0)
}

fn share_of_total(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}

/// Accepts plain ISO dates and the date part of ISO timestamps.
fn parse_date(
    record: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Date>, NormalizeError> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let date_part = raw
        .split_once(['T', ' '])
        .map(|(date, _)| date)
        .unwrap_or(raw);

    Date::parse(date_part, ISO_DATE)
        .map(Some)
        .map_err(|err| NormalizeError::invalid(record, field, format!("'{}': {}", raw, err)))
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(boundary) if boundary > 0 => &cut[..boundary],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}
