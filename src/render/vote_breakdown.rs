use crate::{
    model::{PartyName, PartyVote},
    render::Palette,
};

const BAR_WIDTH: usize = 40;

fn segment_glyph(palette: Palette, party: PartyName) -> String {
    if !palette.is_colored() {
        party.short_code().chars().next().unwrap_or('#').to_string()
    } else {
        palette.party(party, "█")
    }
}

/// Yea segments per party, scaled against every recorded ballot; the rest
/// of the bar is left empty.
pub fn stacked_bar(palette: Palette, votes: &[PartyVote]) -> String {
    let total = votes
        .iter()
        .fold(0u32, |acc, vote| acc.saturating_add(vote.total()));
    if total == 0 {
        return format!("[{}]", " ".repeat(BAR_WIDTH));
    }

    let mut bar = String::new();
    let mut used = 0usize;
    for vote in votes.iter().filter(|vote| vote.yea > 0) {
        let width = (f64::from(vote.yea) / f64::from(total) * BAR_WIDTH as f64).round() as usize;
        let width = width.max(1).min(BAR_WIDTH - used);
        bar.push_str(&segment_glyph(palette, vote.party).repeat(width));
        used += width;
    }
    bar.push_str(&".".repeat(BAR_WIDTH - used));
    format!("[{}]", bar)
}

pub fn party_line(palette: Palette, vote: &PartyVote) -> String {
    let mut counts = format!("Y: {}  N: {}", vote.yea, vote.nay);
    if vote.abstain > 0 {
        counts.push_str(&format!("  A: {}", vote.abstain));
    }
    let label = format!("{:<16}", vote.party.label());
    format!("  {} {}", palette.party(vote.party, &label), counts)
}

pub fn render(palette: Palette, votes: &[PartyVote]) -> String {
    let mut out = String::from("Vote Breakdown by Party\n");
    if votes.is_empty() {
        out.push_str("  No recorded votes\n");
        return out;
    }

    out.push_str(&format!("  {}\n", stacked_bar(palette, votes)));
    for vote in votes {
        out.push_str(&party_line(palette, vote));
        out.push('\n');
    }
    out
}
