use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartyName {
    Liberal,
    Conservative,
    Ndp,
    BlocQuebecois,
    Green,
    Independent,
}

impl PartyName {
    pub const ALL: [PartyName; 6] = [
        PartyName::Liberal,
        PartyName::Conservative,
        PartyName::Ndp,
        PartyName::BlocQuebecois,
        PartyName::Green,
        PartyName::Independent,
    ];

    /// Resolves the spellings the backend and its upstream sources use for
    /// party names. Returns `None` for anything outside the fixed set.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        let party = match normalized.as_str() {
            "liberal" | "liberal party" | "liberal party of canada" | "lpc" | "lib" => {
                PartyName::Liberal
            }
            "conservative" | "conservative party" | "conservative party of canada" | "cpc"
            | "con" => PartyName::Conservative,
            "ndp" | "new democratic party" | "new democrat" | "new democrats" => PartyName::Ndp,
            "bloc québécois" | "bloc quebecois" | "bloc" | "bq" => PartyName::BlocQuebecois,
            "green" | "green party" | "green party of canada" | "gp" => PartyName::Green,
            "independent" | "ind" | "ind." => PartyName::Independent,
            _ => return None,
        };
        Some(party)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartyName::Liberal => "Liberal",
            PartyName::Conservative => "Conservative",
            PartyName::Ndp => "NDP",
            PartyName::BlocQuebecois => "Bloc Québécois",
            PartyName::Green => "Green",
            PartyName::Independent => "Independent",
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            PartyName::Liberal => "LPC",
            PartyName::Conservative => "CPC",
            PartyName::Ndp => "NDP",
            PartyName::BlocQuebecois => "BQ",
            PartyName::Green => "GPC",
            PartyName::Independent => "IND",
        }
    }

    /// ANSI SGR colour used for party badges and bar segments.
    pub fn ansi_color(&self) -> &'static str {
        match self {
            PartyName::Liberal => "31",
            PartyName::Conservative => "34",
            PartyName::Ndp => "33",
            PartyName::BlocQuebecois => "36",
            PartyName::Green => "32",
            PartyName::Independent => "37",
        }
    }
}

impl fmt::Display for PartyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
