use crate::{
    model::Mp,
    render::{Palette, percent},
};

pub fn render(palette: Palette, mp: &Mp) -> String {
    let portrait = if mp.has_real_image() {
        mp.image_url.clone().unwrap_or_default()
    } else {
        format!("({})", mp.initials())
    };

    format!(
        "{} {}\n{} • {}\nAttendance Rate: {}   Party-Line Voting: {}   Years in Office: {}\n",
        palette.dim(&portrait),
        palette.bold(&mp.name),
        palette.party(mp.party, &format!("[{}]", mp.party.label())),
        mp.riding,
        percent(mp.attendance_rate),
        percent(mp.party_line_voting),
        mp.years_in_office
    )
}
