use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use milestone_changelog::models::config::{Config, APP_NAME};
use milestone_changelog::{prompt, ChangelogFetcher, ChangelogRequest};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project, either `owner/repo` or a repository name under the default owner
    #[arg(value_parser = non_blank)]
    project: Option<String>,

    /// Milestone whose closed issues make up the changelog
    #[arg(value_parser = non_blank)]
    milestone: Option<String>,

    /// Default owner for bare repository names
    #[arg(short, long)]
    owner: Option<String>,

    /// Base URL of the issue tracker API, for this run only
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds, for this run only
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the config file path
    #[clap(short, long, action)]
    file_path: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn non_blank(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err("value must not be blank".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("{}: {:#}", "Error".red().bold(), err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "warn,milestone_changelog=info",
        2 => "info,milestone_changelog=debug",
        _ => "debug,milestone_changelog=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tracing::instrument(skip(args))]
async fn run(args: Args) -> Result<()> {
    if args.file_path {
        let path = confy::get_configuration_file_path(APP_NAME, None)
            .context("Failed to locate config file")?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut cfg: Config = confy::load(APP_NAME, None).context("Failed to load config")?;
    if cfg.merge(args.owner) {
        confy::store(APP_NAME, None, &cfg).context("Failed to store config")?;
        tracing::info!(owner = %cfg.owner, "stored new default owner");
    }
    let cfg = cfg.with_overrides(args.api_url, args.timeout);

    let project = prompt::resolve(args.project, "What project?")?;
    let milestone = prompt::resolve(args.milestone, "What milestone?")?;
    let request = ChangelogRequest::new(project, milestone);

    let fetcher = ChangelogFetcher::new(&cfg)?;

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "-"]),
    );
    pb.set_message("Fetching closed issues...");

    emit_changelog(&fetcher, &request, &pb, &mut io::stdout()).await
}

/// Fetches the changelog and writes it out. Nothing is written unless the fetch succeeds.
async fn emit_changelog(
    fetcher: &ChangelogFetcher,
    request: &ChangelogRequest,
    pb: &ProgressBar,
    out: &mut impl Write,
) -> Result<()> {
    let result = fetcher.fetch_changelog(request).await;
    pb.finish_and_clear();
    let lines = result?;

    write_changelog(out, request.project(), request.milestone(), &lines)?;
    Ok(())
}

fn write_changelog(
    out: &mut impl Write,
    project: &str,
    milestone: &str,
    lines: &[String],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Computing changelog for '{}' and milestone '{}'",
        project, milestone
    )?;
    writeln!(out)?;
    writeln!(out, "-------------------")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
