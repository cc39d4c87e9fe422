use anyhow::{Context, Result};
use snowclone_match::{compile, FrequencyTable};

use crate::config::RunConfig;
use crate::error::RunError;
use crate::search::{fetch_all, FetchOptions, PagePlan, SearchProvider};

/// Compile the pattern, fetch every planned page and rank what matched.
/// `verbose`/`debug` only add log events; the ranking is the same either way.
pub async fn run_search(cfg: &RunConfig, provider: &dyn SearchProvider) -> Result<Vec<(String, u64)>> {
    cfg.validate()?;

    let compiled = compile(&cfg.pattern, cfg.alphabetic_only).context("compile pattern")?;
    if cfg.verbose {
        tracing::info!(matcher = %compiled.matcher.source(), query = %compiled.query, "compiled pattern");
    } else {
        tracing::debug!(matcher = %compiled.matcher.source(), query = %compiled.query, "compiled pattern");
    }

    let opts = FetchOptions {
        plan: PagePlan::new(cfg.max_pages),
        site: cfg.site.as_deref(),
        verbose: cfg.verbose,
        debug: cfg.debug,
    };
    let mut table = FrequencyTable::new();
    let summary = fetch_all(provider, &compiled, opts, &mut table).await;

    if summary.pages_ok == 0 && summary.pages_failed > 0 {
        return Err(RunError::AllPagesFailed {
            pages: summary.pages_failed,
        }
        .into());
    }
    if summary.pages_failed > 0 {
        tracing::warn!(
            failed = summary.pages_failed,
            ok = summary.pages_ok,
            "some pages failed; report is partial"
        );
    }
    tracing::info!(
        pages = summary.pages_ok,
        items = summary.items_seen,
        matches = summary.matches,
        distinct = table.len(),
        "search finished"
    );

    Ok(table.into_ranked())
}
