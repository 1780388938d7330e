//! tiktok-fetch - CLI entry point.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tiktok_fetch::{
    browser::{ChromePage, ChromeProbe},
    cli::{prompt_recency_window, Args},
    config::{validate_config, Config},
    download::{self, DownloadTask},
    error::{exit_codes, Error, Result},
    harvest::{read_link_file, LinkHarvester, ScrollPolicy},
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_info,
        print_run_summary, print_warning,
    },
    post::extract_username,
    session::{ensure_session, SessionStore},
    TikwmResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_code_for(&e) as u8)
        }
    }
}

fn exit_code_for(error: &Error) -> i32 {
    match error {
        Error::SessionInvalid(_) | Error::MissingCookieFile(_) => exit_codes::SESSION_ERROR,
        Error::Config(_)
        | Error::ConfigValidation { .. }
        | Error::MissingConfig(_)
        | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
        Error::Resolve(_) | Error::Transfer(_) | Error::Http(_) => exit_codes::DOWNLOAD_ERROR,
        _ => exit_codes::UNEXPECTED_ERROR,
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;
    print_config_summary(&args.profile_url, &config);

    if args.from_links {
        print_info("Reusing existing links file, skipping harvest");
    } else {
        harvest_phase(&args.profile_url, &config).await?;
    }

    let urls = load_links(&config.harvest.links_file);
    if urls.is_empty() {
        print_warning("No post links to download.");
        return Ok(exit_codes::SUCCESS);
    }

    let window = match args.latest {
        Some(window) => window,
        None => prompt_recency_window()?,
    };
    let selected = download::select(&urls, window.limit());
    print_info(&format!(
        "{}: downloading {} of {} posts",
        window,
        selected.len(),
        urls.len()
    ));

    let resolver = Arc::new(TikwmResolver::new(&config.resolver)?);
    let summary = download::run(
        DownloadTask::from_urls(&selected),
        Arc::new(config.download),
        resolver,
    )
    .await?;

    print_run_summary(&summary);

    if summary.has_failures() {
        return Ok(exit_codes::SOME_DOWNLOADS_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}

/// Validate the session and scrape the profile into the links file.
///
/// Only a missing cookie file is fatal here; any other failure leaves the
/// existing links file in place for the download phase.
async fn harvest_phase(profile_url: &str, config: &Config) -> Result<()> {
    if let Err(e) = extract_username(profile_url) {
        print_error(&format!("{}", e));
        print_warning("Skipping harvest; falling back to the existing links file");
        return Ok(());
    }

    let session_config = config.session.clone();
    let session = tokio::task::spawn_blocking(move || {
        let store = SessionStore::new(session_config.session_file.clone());
        let probe = ChromeProbe::new(&session_config);
        ensure_session(&store, &session_config.cookie_file, &probe)
    })
    .await
    .map_err(|e| Error::Browser(format!("Session check aborted: {}", e)))??;

    let profile_url = profile_url.to_string();
    let headless = config.harvest.headless;
    let policy = ScrollPolicy::from_config(&config.harvest);
    let links_file = config.harvest.links_file.clone();

    let harvested = tokio::task::spawn_blocking(move || -> Result<usize> {
        let page = ChromePage::launch(headless, &session)?;
        let mut harvester =
            LinkHarvester::new(page, policy).with_progress(create_spinner("Opening profile..."));
        let links = harvester.harvest_to_file(&profile_url, &links_file)?;
        Ok(links.len())
    })
    .await
    .map_err(|e| Error::Browser(format!("Harvest aborted: {}", e)))
    .and_then(|result| result);

    match harvested {
        Ok(0) => print_warning("No post links found on the profile."),
        Ok(count) => tracing::debug!("Harvested {} links", count),
        Err(e) => {
            print_error(&format!("Harvest failed: {}", e));
            print_warning("Falling back to the existing links file");
        }
    }

    Ok(())
}

fn load_links(path: &Path) -> Vec<String> {
    if !path.exists() {
        print_warning(&format!("Links file not found: {}", path.display()));
        return Vec::new();
    }

    match read_link_file(path) {
        Ok(urls) => urls,
        Err(e) => {
            print_error(&format!("Failed to read {}: {}", path.display(), e));
            Vec::new()
        }
    }
}
