//! Text rendering of page state. Every function here is pure: page state in,
//! `String` out.

pub mod about;
pub mod feed;
pub mod motion_card;
pub mod mp_header;
pub mod profile;
pub mod search;
pub mod vote_breakdown;

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    model::{MotionStatus, PartyName},
    pages::{Notice, NoticeLevel},
    router::Route,
};

const LONG_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Optional ANSI styling; with colour off every method returns its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    pub fn paint(&self, sgr: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", sgr, text)
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint("1", text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }

    pub fn party(&self, party: PartyName, text: &str) -> String {
        self.paint(party.ansi_color(), text)
    }

    pub fn status(&self, status: MotionStatus) -> String {
        let sgr = match status {
            MotionStatus::Passed => "32",
            MotionStatus::Failed => "31",
            MotionStatus::InProgress => "33",
        };
        self.paint(sgr, &format!("[{}]", status.label()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

/// `November 15, 2024`
pub fn long_date(date: Date) -> String {
    date.format(LONG_DATE).unwrap_or_else(|_| date.to_string())
}

/// Whole numbers print without decimals, everything else with one.
pub fn percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

pub fn navbar(palette: Palette, active: &Route) -> String {
    let links = [
        ("Home", matches!(active, Route::Feed)),
        ("Find MP", matches!(active, Route::MpSearch { .. })),
        ("About", matches!(active, Route::About)),
    ];
    let rendered: Vec<String> = links
        .iter()
        .map(|(label, is_active)| {
            if *is_active {
                palette.bold(&format!("[{}]", label))
            } else {
                label.to_string()
            }
        })
        .collect();

    format!(
        "{}  {}\n{}\n",
        palette.bold("RateMyMP"),
        rendered.join("  "),
        "=".repeat(60)
    )
}

pub fn notices(palette: Palette, notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            let marker = match notice.level {
                NoticeLevel::Info => palette.paint("36", "info"),
                NoticeLevel::Error => palette.paint("31", "error"),
            };
            format!("[{}] {}\n", marker, notice)
        })
        .collect()
}
