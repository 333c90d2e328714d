//! Resort command handlers for the CLI.
//!
//! Each handler loads the provider once, reports a degraded load on stderr,
//! and prints the rendered result to stdout.

use skidir_core::{distinct_states, filter_resorts, AppConfig, SearchFilters};
use skidir_resorts::{normalize_payload, ProviderStatus, ResortProvider};

use crate::render;
use crate::OutputFormat;

/// Build the session provider, appending any local dataset file to the
/// fallback list.
///
/// A dataset file that cannot be read or parsed is logged and skipped; the
/// embedded list is always available.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub(crate) fn build_provider(config: &AppConfig) -> anyhow::Result<ResortProvider> {
    let provider = ResortProvider::new(&config.api)
        .map_err(|e| anyhow::anyhow!("failed to build resort provider: {e}"))?;

    let Some(path) = config.dataset_path.as_deref() else {
        return Ok(provider);
    };

    match skidir_core::load_dataset(path) {
        Ok(payload) => {
            let extra = normalize_payload(&payload);
            tracing::info!(
                path = %path.display(),
                count = extra.len(),
                "loaded local resort dataset"
            );
            Ok(provider.with_additional_fallback(extra))
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "skipping local resort dataset"
            );
            Ok(provider)
        }
    }
}

async fn load(provider: &ResortProvider) {
    if provider.load().await == ProviderStatus::Degraded {
        if let Some(message) = provider.error() {
            eprintln!("{message}");
        }
    }
}

/// Search resorts and print the matches.
///
/// With `remote` set and the API enabled, the API pre-filters by term, state,
/// and minimum elevation, and the full local predicate runs on top. If that
/// request fails the provider's list is searched instead.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub(crate) async fn run_search(
    provider: &ResortProvider,
    term: &str,
    filters: &SearchFilters,
    remote: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let results = match provider.client() {
        Some(client) if remote => match client.search_resorts(term, filters).await {
            Ok(candidates) => {
                tracing::info!(count = candidates.len(), "remote search returned candidates");
                filter_resorts(&candidates, term, filters)
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote search failed, searching loaded resorts");
                load(provider).await;
                provider.search(term, filters)
            }
        },
        _ => {
            load(provider).await;
            provider.search(term, filters)
        }
    };

    print!("{}", render::search_results(&results, format)?);
    Ok(())
}

/// Print the card for a single resort.
///
/// # Errors
///
/// Returns an error if no resort in the working list has `resort_id`.
pub(crate) async fn run_show(
    provider: &ResortProvider,
    resort_id: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    load(provider).await;
    let resort = provider
        .find(resort_id)
        .ok_or_else(|| anyhow::anyhow!("resort '{resort_id}' not found; try `skidir search`"))?;

    print!("{}", render::single(&resort, format)?);
    Ok(())
}

/// Print each state with its resort count.
pub(crate) async fn run_states(provider: &ResortProvider) {
    load(provider).await;
    print!("{}", render::states(&distinct_states(&provider.resorts())));
}
