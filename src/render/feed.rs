use crate::{
    model::MotionCategory,
    pages::FeedPage,
    render::{Palette, motion_card},
};

pub fn category_strip(palette: Palette, selected: Option<MotionCategory>) -> String {
    let mut tags = vec![if selected.is_none() {
        palette.bold("[All Categories]")
    } else {
        "All Categories".to_string()
    }];
    tags.extend(MotionCategory::ALL.iter().map(|category| {
        if selected == Some(*category) {
            palette.bold(&format!("[{}]", category.label()))
        } else {
            category.label().to_string()
        }
    }));
    tags.join(" | ")
}

pub fn render(palette: Palette, page: &FeedPage) -> String {
    let mut out = String::new();
    out.push_str(&palette.bold("Hold Your Representatives Accountable"));
    out.push('\n');
    out.push_str(
        "Track parliamentary votes, review MP performance, and stay informed about Canadian politics\n",
    );
    out.push_str(&palette.dim("Search: search name <query> | search postal <A1A 1A1>"));
    out.push_str("\n\n");

    out.push_str("Filter by Category\n");
    out.push_str(&category_strip(palette, page.category()));
    out.push_str("\n\n");

    let count = page.motions().len();
    out.push_str(&format!(
        "Recent Parliamentary Motions ({} motion{})\n\n",
        count,
        if count == 1 { "" } else { "s" }
    ));

    if page.is_loading() {
        out.push_str("Loading motions...\n");
    } else if page.motions().is_empty() {
        out.push_str("No motions found for this category\n");
    } else {
        let cards: Vec<String> = page
            .motions()
            .iter()
            .map(|motion| motion_card::render(palette, motion, page.explanation(&motion.id)))
            .collect();
        out.push_str(&cards.join("\n"));
    }

    out
}
