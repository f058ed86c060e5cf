use std::fmt;

use reqwest::Url;
use thiserror::Error;

const ROUTE_BASE: &str = "http://ratemymp.local/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchKind {
    #[default]
    Name,
    Postal,
}

impl SearchKind {
    /// Anything other than `postal` searches by name.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("postal") {
            SearchKind::Postal
        } else {
            SearchKind::Name
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Name => "name",
            SearchKind::Postal => "postal",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Feed,
    MpProfile { mp_id: String },
    MpSearch { query: String, kind: SearchKind },
    About,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no page at '{0}'")]
    NotFound(String),
    #[error("malformed route '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

impl Route {
    pub fn parse(input: &str) -> Result<Self, RouteError> {
        let trimmed = input.trim();
        let relative = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let url = Url::parse(ROUTE_BASE)
            .and_then(|base| base.join(relative))
            .map_err(|err| RouteError::Malformed {
                input: input.to_string(),
                reason: err.to_string(),
            })?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Ok(Route::Feed),
            ["about"] => Ok(Route::About),
            ["mp", "search"] => {
                let mut query = String::new();
                let mut kind = SearchKind::Name;
                for (key, value) in url.query_pairs() {
                    match key.as_ref() {
                        "q" => query = value.into_owned(),
                        "type" => kind = SearchKind::parse(&value),
                        _ => {}
                    }
                }
                Ok(Route::MpSearch { query, kind })
            }
            ["mp", id] => Ok(Route::MpProfile {
                mp_id: percent_decode(id),
            }),
            _ => Err(RouteError::NotFound(trimmed.to_string())),
        }
    }

    pub fn to_path(&self) -> String {
        let Ok(mut url) = Url::parse(ROUTE_BASE) else {
            return "/".to_string();
        };

        match self {
            Route::Feed => {}
            Route::About => url.set_path("about"),
            // An id spelled like the search page is escaped so it still parses as a profile.
            Route::MpProfile { mp_id } if mp_id == "search" => url.set_path("mp/%73earch"),
            Route::MpProfile { mp_id } => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.clear().extend(["mp", mp_id.as_str()]);
                }
            }
            Route::MpSearch { query, kind } => {
                url.set_path("mp/search");
                url.query_pairs_mut()
                    .append_pair("q", query)
                    .append_pair("type", kind.as_str());
            }
        }

        match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        let escaped = (bytes[index] == b'%')
            .then(|| segment.get(index + 1..index + 3))
            .flatten()
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                decoded.push(byte);
                index += 3;
            }
            None => {
                decoded.push(bytes[index]);
                index += 1;
            }
        }
    }
    String::from_utf8_lossy(&decoded).into_owned()
}
