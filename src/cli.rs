use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

use crate::config::DEFAULT_CONFIG_PATH;

pub const USAGE: &str = "usage: ratemymp [--config <path>] [--once] [<route>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    /// Render the starting route once and exit instead of reading commands.
    pub once: bool,
    pub route: Option<String>,
    pub help: bool,
}

pub fn args_from_env() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut once = false;
    let mut route = None;
    let mut help = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--once" => once = true,
            "-h" | "--help" => help = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
            other => {
                if route.is_some() {
                    return Err(anyhow!("more than one route given. {USAGE}"));
                }
                route = Some(other.to_string());
            }
        }
    }

    Ok(CliArgs {
        config_path: config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        once,
        route,
        help,
    })
}
