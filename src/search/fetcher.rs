use snowclone_match::{extract_page, CompiledPattern, FrequencyTable};

use super::{PagePlan, PageRequest, SearchProvider};

/// Outcome of a fetch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub pages_ok: usize,
    pub pages_failed: usize,
    pub items_seen: usize,
    pub matches: usize,
}

impl FetchSummary {
    pub fn pages_scheduled(&self) -> usize {
        self.pages_ok + self.pages_failed
    }
}

/// Which pages to fetch and what to trace while doing it.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions<'a> {
    pub plan: PagePlan,
    pub site: Option<&'a str>,
    /// Log every result item as it arrives.
    pub verbose: bool,
    /// Log every page payload as it arrives.
    pub debug: bool,
}

impl<'a> FetchOptions<'a> {
    pub fn new(plan: PagePlan) -> Self {
        Self {
            plan,
            site: None,
            verbose: false,
            debug: false,
        }
    }
}

/// Fetch every planned page in order, one request at a time, folding matches into `table`.
/// A failed page is logged and contributes nothing; later pages are still fetched.
pub async fn fetch_all(
    provider: &dyn SearchProvider,
    compiled: &CompiledPattern,
    opts: FetchOptions<'_>,
    table: &mut FrequencyTable,
) -> FetchSummary {
    let plan = opts.plan;
    let mut summary = FetchSummary::default();

    for start in plan.starts() {
        let end = start + plan.per_page - 1;
        tracing::info!("fetching results {start} to {end}");

        let req = PageRequest {
            query: compiled.query.clone(),
            start,
            num: plan.per_page,
            site: opts.site.map(str::to_string),
        };

        let page = match provider.search(&req).await {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(start, end, error = %err, "page fetch failed; skipping");
                summary.pages_failed += 1;
                continue;
            }
        };

        if opts.debug {
            tracing::info!(start, items = ?page.items, "page payload");
        }
        if opts.verbose {
            for item in &page.items {
                tracing::info!(title = %item.title, snippet = %item.snippet, "result item");
            }
        }

        summary.pages_ok += 1;
        summary.items_seen += page.items.len();
        let matches: Vec<_> = extract_page(&page.items, compiled).collect();
        summary.matches += matches.len();
        tracing::debug!(start, items = page.items.len(), matches = matches.len(), "page done");
        table.extend(matches);
    }

    summary
}
