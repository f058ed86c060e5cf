pub struct AboutSection {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub items: &'static [(&'static str, &'static str)],
}

pub const TAGLINE: &str = "Bringing transparency and accountability to Canadian politics";

pub const SECTIONS: &[AboutSection] = &[
    AboutSection {
        title: "Our Mission",
        paragraphs: &[
            "RateMyMP is a public accountability dashboard designed to help Canadians stay \
             informed about their elected representatives in Parliament. We believe that \
             transparency is fundamental to a healthy democracy.",
            "Our platform aggregates public data from official government sources including the \
             Open Parliament API, Parliament of Canada voting records, and ethics registrar \
             information to provide you with a comprehensive view of MP activity and performance.",
        ],
        items: &[],
    },
    AboutSection {
        title: "What We Track",
        paragraphs: &[],
        items: &[
            (
                "Parliamentary Votes",
                "Track how MPs vote on bills and motions, including party-line voting patterns",
            ),
            (
                "Attendance & Activity",
                "Monitor parliamentary attendance rates and participation in debates",
            ),
            (
                "Spending",
                "Review how MPs use their budgets for office operations and staff",
            ),
            (
                "Transparency",
                "Access information about conflicts of interest, gifts, and sponsored travel",
            ),
        ],
    },
    AboutSection {
        title: "Data Sources",
        paragraphs: &["All data is sourced from official public records:"],
        items: &[
            ("Open Parliament API", "openparliament.ca"),
            ("House of Commons Voting Records", ""),
            ("Parliamentary Bills Database", ""),
            ("MP Expenditure Disclosures", ""),
            ("Ethics Commissioner Registry", ""),
        ],
    },
];

/// Static page; it never touches the backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct AboutPage;

impl AboutPage {
    pub fn tagline(&self) -> &'static str {
        TAGLINE
    }

    pub fn sections(&self) -> &'static [AboutSection] {
        SECTIONS
    }
}
