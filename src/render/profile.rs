use crate::{
    model::{ContactInfo, Mp, ParliamentaryActivity, Speech, SpendingItem, TransparencyItem, Vote},
    pages::{MpProfile, MpProfilePage, ProfileState, ProfileTab},
    render::{Palette, long_date, mp_header, percent},
};

const NOT_AVAILABLE: &str = "Not available";

pub fn tab_strip(palette: Palette, active: ProfileTab) -> String {
    ProfileTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                palette.bold(&format!("[{}]", tab.label()))
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `$12,345.67`
pub fn dollars(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

fn undated() -> String {
    "Undated".to_string()
}

fn voting(palette: Palette, votes: &[Vote]) -> String {
    let mut out = String::from("Recent Votes\n");
    if votes.is_empty() {
        out.push_str("  No voting record available\n");
        return out;
    }

    for vote in votes {
        let party_line = if vote.matched_party_line {
            "with party".to_string()
        } else {
            palette.paint("33", "against party")
        };
        let outcome = if vote.motion_passed {
            "passed"
        } else {
            "not passed"
        };
        out.push_str(&format!(
            "  {:<18} {:<8} {}  ({}, motion {}",
            vote.date.map(long_date).unwrap_or_else(undated),
            vote.vote.label(),
            vote.motion_title,
            party_line,
            outcome
        ));
        if let Some(party) = vote.proposed_by_party {
            out.push_str(&format!(", proposed by {}", party.label()));
        }
        out.push_str(")\n");
    }
    out
}

fn activity(
    palette: Palette,
    mp: &Mp,
    counts: Option<&ParliamentaryActivity>,
    speeches: &[Speech],
) -> String {
    let mut out = String::from("Parliamentary Activity\n");
    out.push_str(&format!("  Attendance Rate: {}\n", percent(mp.attendance_rate)));
    if let Some(counts) = counts {
        out.push_str(&format!(
            "  Speeches: {}   Motions Sponsored: {}\n",
            counts.speeches_count, counts.motions_sponsored
        ));
    }

    if speeches.is_empty() {
        out.push_str("  No speeches recorded\n");
        return out;
    }
    for speech in speeches {
        out.push_str(&format!(
            "  {}  {}  {}\n",
            speech.date.map(long_date).unwrap_or_else(undated),
            palette.bold(&speech.topic),
            palette.dim(&format!("{} words", speech.word_count))
        ));
        if !speech.excerpt.is_empty() {
            out.push_str(&format!("    {}\n", speech.excerpt));
        }
    }
    out
}

fn spending(items: &[SpendingItem]) -> String {
    let mut out = String::from("Spending Breakdown\n");
    if items.is_empty() {
        out.push_str("  No spending data available\n");
        return out;
    }

    let total: f64 = items.iter().map(|item| item.amount).sum();
    for item in items {
        out.push_str(&format!(
            "  {:<28} {:>16}  {:>6}",
            item.category,
            dollars(item.amount),
            percent((item.percentage * 10.0).round() / 10.0)
        ));
        if let Some(fiscal_year) = &item.fiscal_year {
            out.push_str(&format!("  FY {}", fiscal_year));
        }
        out.push('\n');
    }
    out.push_str(&format!("  {:<28} {:>16}\n", "Total", dollars(total)));
    out
}

fn transparency(palette: Palette, items: &[TransparencyItem]) -> String {
    let mut out = String::from("Transparency Information\n");
    if items.is_empty() {
        out.push_str("  No disclosures on file\n");
        return out;
    }

    for item in items {
        out.push_str(&format!(
            "  {} {}",
            palette.paint("35", &format!("[{}]", item.kind.label())),
            item.description
        ));
        if let Some(value) = &item.value {
            out.push_str(&format!("  value: {}", value));
        }
        if let Some(date) = item.date {
            out.push_str(&format!("  filed {}", long_date(date)));
        }
        out.push('\n');
    }
    out
}

fn contact(contact: &ContactInfo) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut out = String::from("Contact Information\n");
    out.push_str(&format!("  Email: {}\n", field(&contact.email)));
    out.push_str(&format!(
        "  Constituency Office: {}\n",
        field(&contact.constituency_office)
    ));
    if !contact.social.is_empty() {
        out.push_str("  Social Media\n");
        let links = [
            ("Twitter", &contact.social.twitter),
            ("Facebook", &contact.social.facebook),
            ("Website", &contact.social.website),
        ];
        for (label, value) in links {
            if let Some(value) = value {
                out.push_str(&format!("    {}: {}\n", label, value));
            }
        }
    }
    out
}

pub fn render_profile(palette: Palette, profile: &MpProfile, tab: ProfileTab) -> String {
    let body = match tab {
        ProfileTab::Voting => voting(palette, &profile.votes),
        ProfileTab::Activity => activity(
            palette,
            &profile.mp,
            profile.activity.as_ref(),
            &profile.speeches,
        ),
        ProfileTab::Spending => spending(&profile.spending),
        ProfileTab::Transparency => transparency(palette, &profile.transparency),
        ProfileTab::Contact => contact(&profile.mp.contact),
    };

    format!(
        "{}\n{}\n\n{}",
        mp_header::render(palette, &profile.mp),
        tab_strip(palette, tab),
        body
    )
}

pub fn render(palette: Palette, page: &MpProfilePage) -> String {
    if page.is_loading() {
        return "Loading MP profile...\n".to_string();
    }
    match page.state() {
        ProfileState::Loaded(profile) => render_profile(palette, profile, page.tab()),
        ProfileState::NotFound => format!("MP not found: {}\n", page.mp_id()),
        ProfileState::NotLoaded => format!("MP profile {} could not be loaded\n", page.mp_id()),
    }
}
