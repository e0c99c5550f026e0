use anyhow::Context;
use clap::Parser;
use soccer_live::utils::{logger, validation::Validate};
use soccer_live::core::{Clock, MatchStore, Notifier};
use soccer_live::{
    CliConfig, ConfiguredNotifier, Console, InMemoryMatchStore, SoccerConfig, SystemClock,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => match SoccerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => SoccerConfig::default(),
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting {}", config.app.name);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Loaded config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let notifier = ConfiguredNotifier::from_config(&config)
        .context("failed to build the configured notifier")?;
    let store = Arc::new(InMemoryMatchStore::new());
    let mut console = Console::new(store, SystemClock, notifier).with_json_output(cli.json);

    let failures = match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("cannot open script {}", path.display()))?;
            run_script(&mut console, BufReader::new(file)).await?
        }
        None => run_script(&mut console, BufReader::new(tokio::io::stdin())).await?,
    };

    if failures > 0 {
        tracing::warn!("{} command(s) failed", failures);
        std::process::exit(2);
    }

    Ok(())
}

async fn run_script<R, S, C, N>(
    console: &mut Console<S, C, N>,
    reader: R,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    S: MatchStore + Clone,
    C: Clock,
    N: Notifier,
{
    let mut lines = reader.lines();
    let mut failures = 0;
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        match console.execute_line(&line).await {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => {
                failures += 1;
                if e.is_domain_error() {
                    tracing::warn!("Line {} rejected: {}", line_number, e);
                } else {
                    tracing::error!(
                        "Line {} failed: {} (Category: {:?})",
                        line_number,
                        e,
                        e.category()
                    );
                }
                eprintln!("❌ line {}: {}", line_number, e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    Ok(failures)
}
