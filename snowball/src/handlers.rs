use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use snowball_core::crawl::{CrawlOptions, SeedMode, execute_crawl};
use snowball_core::report::{generate_summary, write_report};
use snowball_core::{PersonKey, ProgressCallback};
use snowball_scanner::{ClientConfig, Crawler};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::Level;
use url::Url;

/// Install the stderr log subscriber; stdout is reserved for the JSON graph.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let level = match (quiet, verbosity) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, _) => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Build the HTTP client settings from the shared fetch arguments.
pub fn client_config_from_args(args: &ArgMatches) -> Result<ClientConfig> {
    let mut config = match args.get_one::<Url>("base-url") {
        Some(base_url) => ClientConfig::new(base_url.as_str())
            .with_context(|| format!("Unusable base URL {}", base_url))?,
        None => ClientConfig::default(),
    };

    if let Some(timeout) = args.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*timeout));
    }
    if let Some(user_agent) = args.get_one::<String>("user-agent") {
        config = config.with_user_agent(user_agent.clone());
    }

    Ok(config)
}

/// Map a crawling subcommand and its arguments to a seed mode.
pub fn seed_mode_from_args(subcommand: &str, args: &ArgMatches) -> Result<SeedMode> {
    match subcommand {
        "sample" => {
            let count = required_count(args, "COUNT")?;
            let alphabet = args
                .get_one::<String>("alphabet")
                .map(|a| a.to_lowercase())
                .unwrap_or_else(|| snowball_core::crawl::DEFAULT_ALPHABET.to_string());
            Ok(SeedMode::Sampled {
                alphabet,
                per_letter: count,
            })
        }
        "snowball" => {
            let celebrity = args
                .get_one::<String>("CELEBRITY")
                .context("A celebrity name is required")?;
            let target = required_count(args, "NUMBER")?;
            Ok(SeedMode::Single {
                celebrity: celebrity.clone(),
                target,
            })
        }
        other => bail!("Unknown crawl mode '{}'", other),
    }
}

fn required_count(args: &ArgMatches, id: &str) -> Result<usize> {
    let value = args
        .get_one::<u64>(id)
        .with_context(|| format!("{} is required", id))?;
    usize::try_from(*value).with_context(|| format!("{} is too large", id))
}

pub fn crawl_options_from_args(subcommand: &str, args: &ArgMatches) -> Result<CrawlOptions> {
    let mut options = CrawlOptions::new(seed_mode_from_args(subcommand, args)?);

    if let Some(threads) = args.get_one::<u64>("threads") {
        options.workers = usize::try_from(*threads).context("Too many threads")?;
    }
    options.deadline = args.get_one::<u64>("deadline").map(|s| Duration::from_secs(*s));

    Ok(options)
}

/// Output path with `~` expanded, if one was given.
pub fn resolve_output_path(args: &ArgMatches) -> Option<PathBuf> {
    args.get_one::<PathBuf>("output").map(|path| {
        let raw = path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
    })
}

pub async fn handle_crawl(subcommand: &str, args: &ArgMatches, quiet: bool) -> Result<()> {
    let options = crawl_options_from_args(subcommand, args)?;
    let output = resolve_output_path(args);
    let crawler = Crawler::with_config(client_config_from_args(args)?)
        .context("Failed to create HTTP client")?;

    if !quiet {
        match &options.mode {
            SeedMode::Sampled {
                alphabet,
                per_letter,
            } => eprintln!(
                "\n{} Sampling {} per letter across '{}'",
                "→".blue(),
                per_letter.to_string().cyan(),
                alphabet
            ),
            SeedMode::Single { celebrity, target } => eprintln!(
                "\n{} Snowballing from {} until {} found",
                "→".blue(),
                celebrity.bright_white(),
                target.to_string().cyan()
            ),
        }
        eprintln!("Workers: {}\n", options.workers);
    }

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting crawl...");
        pb
    };

    let spinner_clone = spinner.clone();
    let progress_callback: ProgressCallback = Arc::new(move |visited: usize, key: &PersonKey| {
        spinner_clone.set_message(format!("{} visited, last: {}", visited, key));
    });

    // Ctrl-C stops the run but keeps what was collected
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let result = execute_crawl(
        Arc::new(crawler),
        options,
        Some(shutdown_rx),
        Some(progress_callback),
    )
    .await;
    spinner.finish_and_clear();
    let outcome = result.context("Crawl failed")?;

    if outcome.cancelled {
        eprintln!(
            "{} Crawl stopped early; writing the partial graph",
            "⚠".yellow().bold()
        );
    }

    write_report(&outcome.graph, output.as_deref()).with_context(|| match &output {
        Some(path) => format!("Failed to write {}", path.display()),
        None => "Failed to write graph to standard output".to_string(),
    })?;

    if let Some(path) = &output {
        println!(
            "{} Output saved to {}",
            "✓".green().bold(),
            path.display().to_string().bright_white()
        );
    }

    if !quiet {
        eprintln!("\n{}", generate_summary(&outcome));
    }

    Ok(())
}
