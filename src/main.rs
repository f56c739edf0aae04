//! tagnotes - CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use git2::Repository;

use tagnotes::config::{DEFAULT_ISSUE_PREFIX, DEFAULT_TAGS_BACK, DEFAULT_TRACKER_URL, Settings};
use tagnotes::git::commits::subjects_since;
use tagnotes::git::tags::{TagStrategy, locate_boundary_tag};
use tagnotes::issues::{IssueGroups, extract::extract_issue_keys};
use tagnotes::notes::{render_html, render_markdown};
use tagnotes::tracker::{TrackerSession, auth::resolve_credentials, client::collect_issue_records};

/// Output style for the rendered notes.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Markdown,
    Html,
}

/// Tag selection strategy.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum GitMode {
    /// Enumerate refs/tags sorted by commit date
    Ref,
    /// Scan the HEAD log for tagged commits
    Log,
}

impl From<GitMode> for TagStrategy {
    fn from(mode: GitMode) -> Self {
        match mode {
            GitMode::Ref => TagStrategy::Ref,
            GitMode::Log => TagStrategy::Log,
        }
    }
}

/// Generate grouped release notes from git tags and Jira issues.
#[derive(Parser, Debug)]
#[command(name = "tagnotes")]
#[command(about = "Generate grouped release notes from git tags and Jira issues")]
#[command(version)]
#[command(after_help = "Credentials can be predefined via the environment:\n  \
    export JIRA_USER=your.user@example.com\n  \
    export JIRA_PASS=yourpassword\n\n\
    Run tagnotes from the root of your git repository.")]
struct Cli {
    /// How many tags back the release boundary sits
    #[arg(short = 't', long, default_value_t = DEFAULT_TAGS_BACK)]
    tagsback: usize,

    /// Output style
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Html)]
    output: OutputFormat,

    /// Tracker base URL
    #[arg(long, default_value = DEFAULT_TRACKER_URL)]
    server: String,

    /// Issue key prefix to scan commit subjects for
    #[arg(long, default_value = DEFAULT_ISSUE_PREFIX)]
    prefix: String,

    /// Tag selection strategy (use log if ref picks the wrong tag)
    #[arg(long, value_enum, default_value_t = GitMode::Ref)]
    git_mode: GitMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let settings = Settings::new(cli.tagsback, &cli.server, &cli.prefix);

    // Step 1: Open git repository
    let repo = Repository::open(".")
        .context("Not a git repository. Run tagnotes from within a git repository.")?;

    // Step 2: Locate the release boundary tag
    println!(
        "[INFO] Looking for commits since {} tag(s) back",
        settings.tags_back
    );

    let boundary = locate_boundary_tag(&repo, settings.tags_back, cli.git_mode.into())
        .context("Failed to locate the release boundary tag")?;

    println!(
        "[INFO] Extracting commits since tag: {}, timestamp: {}",
        boundary.name,
        boundary.timestamp.format("%Y-%m-%d %H:%M:%S %z")
    );

    // Step 3: Collect commit subjects since the boundary
    let subjects = subjects_since(&repo, boundary.timestamp)
        .context("Failed to collect commits since the boundary tag")?;

    // Step 4: Extract issue keys
    println!("[INFO] Filtering {}-[0-9]+ issues", settings.issue_prefix);

    let keys = extract_issue_keys(&subjects.join("\n"), &settings.issue_prefix)
        .context("Failed to extract issue keys")?;

    // Step 5: Authenticate once, then fetch each issue sequentially
    println!(
        "[INFO] Connecting to {} to retrieve issue details",
        settings.tracker_url
    );

    let credentials = resolve_credentials().context("Tracker credentials required")?;
    let session = TrackerSession::login(&settings.tracker_url, credentials)
        .await
        .context("Failed to establish a tracker session")?;

    let records = collect_issue_records(&session, &keys).await;
    let groups = IssueGroups::from_records(records);

    // Step 6: Render to stdout
    println!("Printing release notes:");

    let mut stdout = io::stdout().lock();
    match cli.output {
        OutputFormat::Markdown => render_markdown(&mut stdout, &groups, &settings.tracker_url),
        OutputFormat::Html => render_html(&mut stdout, &groups, &settings.tracker_url),
    }
    .context("Failed to write release notes")?;

    Ok(())
}
