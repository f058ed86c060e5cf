use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::{
    api::ParliamentApi,
    model::Mp,
    pages::notice::{Notice, Notices},
    router::SearchKind,
};

fn postal_code_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([A-Za-z]\d[A-Za-z])\s?(\d[A-Za-z]\d)$").ok())
        .as_ref()
}

/// Canonical `A1A 1A1` form of a Canadian postal code, or `None` when the
/// input is not one.
pub fn normalize_postal_code(raw: &str) -> Option<String> {
    let captures = postal_code_pattern()?.captures(raw.trim())?;
    Some(format!(
        "{} {}",
        captures[1].to_ascii_uppercase(),
        captures[2].to_ascii_uppercase()
    ))
}

pub struct MpSearchPage {
    api: Arc<dyn ParliamentApi>,
    query: String,
    kind: SearchKind,
    loading: bool,
    searched: bool,
    results: Vec<Mp>,
    notices: Notices,
}

impl MpSearchPage {
    pub fn new(api: Arc<dyn ParliamentApi>, query: impl Into<String>, kind: SearchKind) -> Self {
        Self {
            api,
            query: query.into(),
            kind,
            loading: false,
            searched: false,
            results: Vec::new(),
            notices: Notices::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn results(&self) -> &[Mp] {
        &self.results
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    pub async fn set_query(&mut self, query: impl Into<String>, kind: SearchKind) {
        self.query = query.into();
        self.kind = kind;
        self.run().await;
    }

    pub async fn run(&mut self) {
        self.loading = true;

        let outcome = match self.kind {
            SearchKind::Postal => match normalize_postal_code(&self.query) {
                Some(postal_code) => self
                    .api
                    .get_mp_by_postal_code(&postal_code)
                    .await
                    .map(|mp| mp.into_iter().collect()),
                None => {
                    self.results.clear();
                    self.searched = true;
                    self.loading = false;
                    self.notices.push(
                        Notice::error("Invalid postal code")
                            .with_description("Use the format A1A 1A1"),
                    );
                    return;
                }
            },
            SearchKind::Name => self.api.search_mps(&self.query).await,
        };

        match outcome {
            Ok(results) => {
                tracing::debug!(
                    target: "pages",
                    kind = %self.kind,
                    count = results.len(),
                    "mp_search_completed"
                );
                self.results = results;
                self.searched = true;
            }
            Err(err) => {
                tracing::warn!(
                    target: "pages",
                    kind = %self.kind,
                    error = %err,
                    "mp_search_failed"
                );
                self.notices
                    .push(Notice::error("Search failed").with_description("Please try again"));
            }
        }

        self.loading = false;
    }
}
