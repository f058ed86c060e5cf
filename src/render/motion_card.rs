use crate::{
    model::{Motion, UserVote},
    render::{Palette, long_date, percent, vote_breakdown},
};

fn sponsor(motion: &Motion) -> String {
    let name = if motion.introduced_by.mp_name.trim().is_empty() {
        format!("MP #{}", motion.introduced_by.mp_id)
    } else {
        motion.introduced_by.mp_name.clone()
    };
    match motion.introduced_by.party {
        Some(party) => format!("{} ({})", name, party.label()),
        None => name,
    }
}

fn counter(palette: Palette, arrow: &str, count: u32, marked: bool) -> String {
    if marked {
        palette.bold(&format!("[{} {}]", arrow, count))
    } else {
        format!(" {} {} ", arrow, count)
    }
}

pub fn render(palette: Palette, motion: &Motion, explanation: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}  {}\n",
        palette.status(motion.status),
        palette.bold(&motion.title),
        palette.dim(&format!("#{}", motion.id))
    ));
    if !motion.description.is_empty() {
        out.push_str(&format!("  {}\n", motion.description));
    }
    out.push_str(&format!(
        "  {} • Introduced by {}\n",
        long_date(motion.date),
        sponsor(motion)
    ));

    let mut badges: Vec<String> = motion
        .categories
        .iter()
        .map(|category| format!("<{}>", category.label()))
        .collect();
    badges.push(format!("({})", motion.classification.label()));
    out.push_str(&format!("  {}\n", badges.join(" ")));

    for line in vote_breakdown::render(palette, &motion.vote_breakdown).lines() {
        out.push_str(&format!("  {}\n", line));
    }
    if motion.total_votes() > 0 {
        out.push_str(&format!("  Yea overall: {}\n", percent(motion.yea_percentage().round())));
    }

    out.push_str(&format!(
        "  {} {}   AI Explanation: explain {}\n",
        counter(palette, "▲", motion.upvotes, motion.user_vote == Some(UserVote::Up)),
        counter(palette, "▼", motion.downvotes, motion.user_vote == Some(UserVote::Down)),
        motion.id
    ));
    if let Some(explanation) = explanation {
        out.push_str(&format!("  {}\n", palette.paint("36", "AI Explanation")));
        for line in explanation.lines() {
            out.push_str(&format!("    {}\n", line));
        }
    }

    out
}
