use crate::{
    model::Mp,
    pages::MpSearchPage,
    render::{Palette, percent},
    router::SearchKind,
};

fn result_card(palette: Palette, mp: &Mp) -> String {
    format!(
        "  {} {}  {}\n    {} • Attendance {} • Party Line {}   open /mp/{}\n",
        palette.dim(&format!("({})", mp.initials())),
        palette.bold(&mp.name),
        palette.party(mp.party, &format!("[{}]", mp.party.label())),
        mp.riding,
        percent(mp.attendance_rate),
        percent(mp.party_line_voting),
        mp.id
    )
}

pub fn render(palette: Palette, page: &MpSearchPage) -> String {
    let mut out = format!("{}\n", palette.bold("Search Results"));
    out.push_str(&match page.kind() {
        SearchKind::Postal => format!("Looking up MP for postal code: {}\n\n", page.query()),
        SearchKind::Name => format!("Searching for MPs matching: {}\n\n", page.query()),
    });

    if page.is_loading() {
        out.push_str("Searching...\n");
    } else if page.results().is_empty() {
        out.push_str("No MPs found matching your search\n");
        out.push_str(&palette.dim("Back to Home: open /"));
        out.push('\n');
    } else {
        for mp in page.results() {
            out.push_str(&result_card(palette, mp));
        }
    }
    out
}
