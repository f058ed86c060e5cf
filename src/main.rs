use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use ratemymp::{
    api::{ParliamentApi, ParliamentClient},
    cli::{USAGE, args_from_env},
    config::Config,
    logging::init_tracing,
    render::Palette,
    shell::{HELP, Shell, Step},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = args_from_env()?;
    if args.help {
        println!("{USAGE}\n\n{HELP}");
        return Ok(());
    }

    let config = Config::resolve(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path.display()))?;
    let _logging_guard = init_tracing(&config.logging).context("failed to initialize logging")?;

    let client = ParliamentClient::from_config(&config.api)
        .context("failed to construct backend client")?;
    let api: Arc<dyn ParliamentApi> = Arc::new(client);
    tracing::info!(
        target: "shell",
        base_url = %config.api.base_url,
        once = args.once,
        "ratemymp_started"
    );

    let mut shell = Shell::new(api, Palette::new(config.ui.color));
    let mut stdout = tokio::io::stdout();

    let first_page = shell.open_path(args.route.as_deref().unwrap_or("/")).await;
    stdout.write_all(first_page.as_bytes()).await?;
    if args.once {
        stdout.flush().await?;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("failed to read command")? else {
            break;
        };
        match shell.execute(&line).await {
            Step::Output(text) => stdout.write_all(text.as_bytes()).await?,
            Step::Quit => break,
        }
    }

    stdout.flush().await?;
    tracing::info!(target: "shell", "ratemymp_stopped");
    Ok(())
}
