use crate::{archive, config::Config, gateways, input};
use anyhow::{Context, Result};
use archiver_core::{entities::EmailAddress, usecases::ArchiveParams};
use clap::Parser;
use std::{io, path::PathBuf};

const DEFAULT_REPOS_FILE: &str = "repos.txt";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file [default: gitlab-archiver.toml, if present]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// File with one repository URL or path per line
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_REPOS_FILE)]
    repos: PathBuf,

    /// Email address of the person running the archiver
    #[arg(short, long, value_name = "EMAIL", env = "USER_EMAIL")]
    user_email: EmailAddress,

    /// Check the access level but don't archive anything
    #[arg(long)]
    dry_run: bool,

    /// Continue with the next repository after a failure
    #[arg(long)]
    keep_going: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;

    let token = gateways::api_token(&cfg.token).context("Could not retrieve GitLab token")?;
    let gitlab = gateways::gitlab_gateway(&cfg.gitlab, token)?;

    let references = input::load_repo_references(&args.repos)?;
    let params = ArchiveParams {
        min_access_level: cfg.gitlab.min_access_level,
        members_per_page: cfg.gitlab.members_per_page,
        dry_run: args.dry_run,
    };
    log::info!(
        "Archiving {} repositories as {} (minimum access level: {})",
        references.len(),
        args.user_email,
        params.min_access_level
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    archive::archive_all(
        &gitlab,
        &args.user_email,
        &references,
        &params,
        args.keep_going,
        &mut out,
    )?;
    Ok(())
}
