//! Bounded-concurrency download pool.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use indicatif::ProgressBar;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::DownloadConfig;
use crate::download::fetcher::fetch_post;
use crate::download::state::{FetchOutcome, RunSummary};
use crate::download::task::DownloadTask;
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::output::{create_item_bar, report_outcome, report_worker_lost};
use crate::resolver::ContentResolver;

/// Download every task with exactly `config.workers` running at once.
///
/// All tasks are submitted up front and awaited to the end; outcomes are
/// reported in completion order. Only failing to create the download
/// folder aborts the run.
pub async fn run(
    tasks: Vec<DownloadTask>,
    config: Arc<DownloadConfig>,
    resolver: Arc<dyn ContentResolver>,
) -> Result<RunSummary> {
    ensure_dir(&config.directory)?;

    let progress = if config.show_progress {
        create_item_bar(tasks.len() as u64, "Downloading")
    } else {
        ProgressBar::hidden()
    };

    let semaphore = Arc::new(Semaphore::new(config.workers));
    let mut workers = JoinSet::new();

    for task in tasks {
        let config = Arc::clone(&config);
        let resolver = Arc::clone(&resolver);
        let semaphore = Arc::clone(&semaphore);

        workers.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(permit) => {
                    let outcome = AssertUnwindSafe(fetch_post(resolver.as_ref(), &config, &task))
                        .catch_unwind()
                        .await
                        .unwrap_or_else(|panic| FetchOutcome::Failed {
                            error: panic_message(panic.as_ref()),
                        });
                    drop(permit);
                    outcome
                }
                Err(e) => FetchOutcome::Failed {
                    error: e.to_string(),
                },
            };
            (task, outcome)
        });
    }

    let mut summary = RunSummary::default();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok((task, outcome)) => {
                report_outcome(&progress, &task, &outcome);
                summary.record(&outcome);
            }
            Err(e) => {
                report_worker_lost(&progress, &e.to_string());
                summary.record(&FetchOutcome::Failed {
                    error: e.to_string(),
                });
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(summary)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("worker panicked: {}", message)
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("worker panicked: {}", message)
    } else {
        "worker panicked".to_string()
    }
}
