//! Fetch orchestration for the `search` command.
//!
//! A [`SearchSession`] owns the accumulated leads and publishes its status on a
//! `watch` channel. [`run_search`] walks the resolved cities strictly one at a
//! time and stops at the first backend failure, keeping what it already has.

use std::future::Future;
use std::path::Path;

use anyhow::Context;
use leadmap_core::{CoreError, Lead, SearchParams};
use thiserror::Error;
use tokio::sync::watch;

use crate::backend::{BackendClient, BackendError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    Idle,
    Starting,
    Searching {
        segment: String,
        city: String,
        position: usize,
        total: usize,
    },
    Completed {
        total: usize,
    },
    NothingFound,
    Failed {
        message: String,
    },
}

impl SearchStatus {
    pub(crate) fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchStatus::Completed { .. } | SearchStatus::NothingFound | SearchStatus::Failed { .. }
        )
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Idle => write!(f, "Idle"),
            SearchStatus::Starting => write!(f, "Starting sweep..."),
            SearchStatus::Searching {
                segment,
                city,
                position,
                total,
            } => write!(f, "Mapping {segment} in {city} ({position}/{total})..."),
            SearchStatus::Completed { total } => write!(f, "Done! Found {total} results."),
            SearchStatus::NothingFound => write!(
                f,
                "No businesses found. Try broader terms (e.g. 'Lanchonete' instead of 'Lanchonete do João')."
            ),
            SearchStatus::Failed { message } => write!(f, "Error: {message}"),
        }
    }
}

/// Session-scoped search state. One session per command invocation.
pub(crate) struct SearchSession {
    leads: Vec<Lead>,
    status: watch::Sender<SearchStatus>,
}

impl SearchSession {
    pub(crate) fn new() -> Self {
        let (status, _) = watch::channel(SearchStatus::Idle);
        Self {
            leads: Vec::new(),
            status,
        }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SearchStatus> {
        self.status.subscribe()
    }

    pub(crate) fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub(crate) fn status(&self) -> SearchStatus {
        self.status.borrow().clone()
    }

    fn reset(&mut self) {
        self.leads.clear();
        self.publish(SearchStatus::Starting);
    }

    fn publish(&self, status: SearchStatus) {
        self.status.send_replace(status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    Completed { total: usize },
    NothingFound,
}

#[derive(Debug, Error)]
pub(crate) enum SearchError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("search failed for {city}: {source}")]
    Backend {
        city: String,
        #[source]
        source: BackendError,
    },
}

/// Runs one search over every city in `params`, calling `fetch(segment, city)`
/// once per city in order.
///
/// Leads from cities that succeeded before a failure stay in the session.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] before any fetch when the city input is
/// blank, or [`SearchError::Backend`] for the first city whose fetch fails.
pub(crate) async fn run_search<F, Fut>(
    session: &mut SearchSession,
    params: &SearchParams,
    mut fetch: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(String, String) -> Fut,
    Fut: Future<Output = Result<Vec<Lead>, BackendError>>,
{
    session.reset();

    let cities = match params.cities() {
        Ok(cities) => cities,
        Err(e) => {
            session.publish(SearchStatus::Failed {
                message: e.to_string(),
            });
            return Err(e.into());
        }
    };

    let total = cities.len();
    tracing::info!(segment = %params.segment, mode = %params.mode, total, "search started");

    for (idx, city) in cities.into_iter().enumerate() {
        session.publish(SearchStatus::Searching {
            segment: params.segment.clone(),
            city: city.clone(),
            position: idx + 1,
            total,
        });

        match fetch(params.segment.clone(), city.clone()).await {
            Ok(leads) => {
                tracing::info!(%city, count = leads.len(), "city search finished");
                session.leads.extend(leads);
            }
            Err(source) => {
                tracing::error!(%city, error = %source, "city search failed; stopping");
                session.publish(SearchStatus::Failed {
                    message: source.to_string(),
                });
                return Err(SearchError::Backend { city, source });
            }
        }
    }

    let found = session.leads.len();
    if found == 0 {
        session.publish(SearchStatus::NothingFound);
        return Ok(SearchOutcome::NothingFound);
    }

    session.publish(SearchStatus::Completed { total: found });
    Ok(SearchOutcome::Completed { total: found })
}

/// Builds search parameters from the command-line flags. `--cities` and
/// `--cities-file` both select multi mode and are concatenated in that order.
pub(crate) fn build_params(
    segment: String,
    city: Option<String>,
    cities: &[String],
    cities_file: Option<&Path>,
) -> anyhow::Result<SearchParams> {
    if cities.is_empty() && cities_file.is_none() {
        return Ok(SearchParams::single(segment, city.unwrap_or_default()));
    }

    let mut lines: Vec<String> = cities.to_vec();
    if let Some(path) = cities_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cities file {}", path.display()))?;
        lines.extend(text.lines().map(ToOwned::to_owned));
    }

    Ok(SearchParams::multi(segment, lines.join("\n")))
}

/// Line printed to stderr for a published status. Failures are left to the
/// command's returned error so they are reported once.
fn progress_line(status: &SearchStatus) -> Option<String> {
    match status {
        SearchStatus::Idle | SearchStatus::Failed { .. } => None,
        _ => Some(status.to_string()),
    }
}

/// Runs the `search` command end to end: progress on stderr, the lead table on
/// stdout, and an optional CSV export. Partial results are still shown and
/// exported when a city fails.
///
/// City input is validated before the backend client is built.
pub(crate) async fn run_search_command(
    params: &SearchParams,
    backend_url: &str,
    export_dir: Option<&Path>,
) -> anyhow::Result<()> {
    params.cities().map_err(SearchError::from)?;

    let backend = BackendClient::new(backend_url)
        .map_err(|e| anyhow::anyhow!("failed to build backend client: {e}"))?;

    let mut session = SearchSession::new();
    let mut progress = session.subscribe();
    let printer = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let status = progress.borrow_and_update().clone();
            if let Some(line) = progress_line(&status) {
                eprintln!("{line}");
            }
            if status.is_terminal() {
                break;
            }
        }
    });

    let client = &backend;
    let result = run_search(&mut session, params, move |segment, city| async move {
        client.fetch_leads(&segment, &city).await
    })
    .await;

    if let Err(e) = printer.await {
        tracing::warn!(error = %e, "progress printer task failed");
    }
    tracing::debug!(status = %session.status(), "search finished");

    if !session.leads().is_empty() {
        println!("{}", crate::render::render_leads(session.leads()));
    }

    if let Some(dir) = export_dir {
        let today = chrono::Local::now().date_naive();
        match crate::export::export_csv(session.leads(), dir, today)? {
            Some(path) => println!("exported {} leads to {}", session.leads().len(), path.display()),
            None => tracing::info!("no leads to export"),
        }
    }

    result?;
    Ok(())
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
