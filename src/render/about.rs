use crate::{
    pages::AboutPage,
    render::Palette,
};

pub fn render(palette: Palette, page: &AboutPage) -> String {
    let mut out = format!("{}\n{}\n", palette.bold("About RateMyMP"), page.tagline());

    for section in page.sections() {
        out.push('\n');
        out.push_str(&palette.bold(section.title));
        out.push('\n');
        for paragraph in section.paragraphs {
            out.push_str(&format!("  {}\n", paragraph));
        }
        for (name, detail) in section.items {
            if detail.is_empty() {
                out.push_str(&format!("  - {}\n", name));
            } else {
                out.push_str(&format!("  - {}: {}\n", name, detail));
            }
        }
    }
    out
}
