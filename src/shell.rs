use std::sync::Arc;

use thiserror::Error;

use crate::{
    api::ParliamentApi,
    model::{MotionCategory, UserVote},
    pages::{AboutPage, FeedPage, MpProfilePage, MpSearchPage, Notice, ProfileTab},
    render::{self, Palette},
    router::{Route, SearchKind},
};

pub const HELP: &str = "\
commands:
  open <route>                 go to /, /about, /mp/<id> or /mp/search?q=<query>&type=name|postal
  reload                       fetch the current page again
  category <name>|all          filter the motion feed
  vote <motion-id> up|down     mark a motion; repeat the same direction to clear it
  explain <motion-id>          show the AI explanation of a motion
  tab <name>                   voting, activity, spending, transparency or contact
  search name|postal <query>   find an MP by name or postal code
  help                         show this list
  quit                         leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Reload,
    Category(Option<MotionCategory>),
    Vote {
        motion_id: String,
        direction: UserVote,
    },
    Explain(String),
    Tab(ProfileTab),
    Search {
        kind: SearchKind,
        query: String,
    },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'. type 'help' for the list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((line, ""));

        match name.to_ascii_lowercase().as_str() {
            "open" | "go" if !rest.is_empty() => Ok(Command::Open(rest.to_string())),
            "open" | "go" => Err(CommandError::Usage("open <route>")),
            "reload" => Ok(Command::Reload),
            "category" => {
                if rest.eq_ignore_ascii_case("all") {
                    return Ok(Command::Category(None));
                }
                MotionCategory::parse(rest)
                    .map(|category| Command::Category(Some(category)))
                    .ok_or(CommandError::Usage("category <name>|all"))
            }
            "vote" => {
                let mut parts = rest.split_whitespace();
                match (
                    parts.next(),
                    parts.next().and_then(UserVote::parse),
                    parts.next(),
                ) {
                    (Some(motion_id), Some(direction), None) => Ok(Command::Vote {
                        motion_id: motion_id.to_string(),
                        direction,
                    }),
                    _ => Err(CommandError::Usage("vote <motion-id> up|down")),
                }
            }
            "explain" if !rest.is_empty() => Ok(Command::Explain(rest.to_string())),
            "explain" => Err(CommandError::Usage("explain <motion-id>")),
            "tab" => ProfileTab::parse(rest)
                .map(Command::Tab)
                .ok_or(CommandError::Usage(
                    "tab voting|activity|spending|transparency|contact",
                )),
            "search" => {
                let (kind, query) = rest
                    .split_once(char::is_whitespace)
                    .map(|(kind, query)| (kind, query.trim()))
                    .unwrap_or((rest, ""));
                let kind = match kind.to_ascii_lowercase().as_str() {
                    "name" => SearchKind::Name,
                    "postal" => SearchKind::Postal,
                    _ => return Err(CommandError::Usage("search name|postal <query>")),
                };
                Ok(Command::Search {
                    kind,
                    query: query.to_string(),
                })
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

pub enum ActivePage {
    Feed(FeedPage),
    MpProfile(MpProfilePage),
    MpSearch(MpSearchPage),
    About(AboutPage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Output(String),
    Quit,
}

/// The dashboard as a line-oriented session: one active page at a time,
/// commands in, rendered text out.
pub struct Shell {
    api: Arc<dyn ParliamentApi>,
    palette: Palette,
    route: Route,
    page: ActivePage,
}

impl Shell {
    pub fn new(api: Arc<dyn ParliamentApi>, palette: Palette) -> Self {
        let page = ActivePage::Feed(FeedPage::new(Arc::clone(&api)));
        Self {
            api,
            palette,
            route: Route::Feed,
            page,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &ActivePage {
        &self.page
    }

    /// Navigates to `route`, loads it and returns the rendered page.
    pub async fn open(&mut self, route: Route) -> String {
        tracing::info!(target: "shell", route = %route, "route_opened");
        self.page = match &route {
            Route::Feed => ActivePage::Feed(FeedPage::new(Arc::clone(&self.api))),
            Route::MpProfile { mp_id } => {
                ActivePage::MpProfile(MpProfilePage::new(Arc::clone(&self.api), mp_id.clone()))
            }
            Route::MpSearch { query, kind } => ActivePage::MpSearch(MpSearchPage::new(
                Arc::clone(&self.api),
                query.clone(),
                *kind,
            )),
            Route::About => ActivePage::About(AboutPage),
        };
        self.route = route;
        self.reload().await;
        self.render()
    }

    pub async fn open_path(&mut self, path: &str) -> String {
        match Route::parse(path) {
            Ok(route) => self.open(route).await,
            Err(err) => {
                tracing::debug!(target: "shell", path = %path, error = %err, "route_rejected");
                format!("{}\n", err)
            }
        }
    }

    async fn reload(&mut self) {
        match &mut self.page {
            ActivePage::Feed(page) => page.load().await,
            ActivePage::MpProfile(page) => page.load().await,
            ActivePage::MpSearch(page) => page.run().await,
            ActivePage::About(_) => {}
        }
    }

    /// Renders the active page followed by any notices it raised since the
    /// last render.
    pub fn render(&mut self) -> String {
        let palette = self.palette;
        let (body, notices): (String, Vec<Notice>) = match &mut self.page {
            ActivePage::Feed(page) => (
                render::feed::render(palette, page),
                page.notices_mut().drain(),
            ),
            ActivePage::MpProfile(page) => (
                render::profile::render(palette, page),
                page.notices_mut().drain(),
            ),
            ActivePage::MpSearch(page) => (
                render::search::render(palette, page),
                page.notices_mut().drain(),
            ),
            ActivePage::About(page) => (render::about::render(palette, page), Vec::new()),
        };

        let mut out = render::navbar(palette, &self.route);
        out.push_str(&body);
        if !notices.is_empty() {
            out.push('\n');
            out.push_str(&render::notices(palette, &notices));
        }
        out
    }

    pub async fn execute(&mut self, line: &str) -> Step {
        if line.trim().is_empty() {
            return Step::Output(String::new());
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => return Step::Output(format!("{}\n", err)),
        };
        tracing::debug!(target: "shell", command = ?command, "command_received");

        let output = match command {
            Command::Quit => return Step::Quit,
            Command::Help => format!("{}\n", HELP),
            Command::Open(path) => self.open_path(&path).await,
            Command::Reload => {
                self.reload().await;
                self.render()
            }
            Command::Search { kind, query } => self.open(Route::MpSearch { query, kind }).await,
            Command::Category(category) => match &mut self.page {
                ActivePage::Feed(page) => {
                    page.select_category(category).await;
                    self.render()
                }
                _ => not_here("category"),
            },
            Command::Vote {
                motion_id,
                direction,
            } => match &mut self.page {
                ActivePage::Feed(page) => {
                    page.vote(&motion_id, direction).await;
                    self.render()
                }
                _ => not_here("vote"),
            },
            Command::Explain(motion_id) => match &mut self.page {
                ActivePage::Feed(page) => {
                    page.explain(&motion_id).await;
                    self.render()
                }
                _ => not_here("explain"),
            },
            Command::Tab(tab) => match &mut self.page {
                ActivePage::MpProfile(page) => {
                    page.select_tab(tab);
                    self.render()
                }
                _ => "tab is only available on an MP profile\n".to_string(),
            },
        };

        Step::Output(output)
    }
}

fn not_here(command: &str) -> String {
    format!("{} is only available on the motion feed (open /)\n", command)
}
