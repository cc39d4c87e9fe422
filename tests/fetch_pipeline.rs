// tests/fetch_pipeline.rs
use std::sync::Mutex;

use async_trait::async_trait;
use snowclone::report::render_lines;
use snowclone::search::{fetch_all, FetchOptions, PagePlan, PageRequest, SearchPage, SearchProvider};
use snowclone::{run_search, ConfigError, FetchError, RunConfig, RunError};
use snowclone_match::{compile, FrequencyTable, ResultItem};

/// Serves canned pages by call order and records every request.
struct FakeProvider {
    pages: Vec<Result<Vec<ResultItem>, u16>>,
    seen: Mutex<Vec<PageRequest>>,
}

impl FakeProvider {
    fn new(pages: Vec<Result<Vec<ResultItem>, u16>>) -> Self {
        Self {
            pages,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn starts(&self) -> Vec<u32> {
        self.seen.lock().unwrap().iter().map(|r| r.start).collect()
    }
}

#[async_trait]
impl SearchProvider for FakeProvider {
    async fn search(&self, req: &PageRequest) -> Result<SearchPage, FetchError> {
        let idx = {
            let mut seen = self.seen.lock().unwrap();
            seen.push(req.clone());
            seen.len() - 1
        };
        match self.pages.get(idx) {
            Some(Ok(items)) => Ok(SearchPage {
                items: items.clone(),
            }),
            Some(Err(status)) => Err(FetchError::Status {
                status: *status,
                body: "quota exceeded".into(),
            }),
            None => Ok(SearchPage::default()),
        }
    }
}

fn holiday_page() -> Vec<ResultItem> {
    vec![ResultItem::new(
        "Seasonal specials",
        "Winter is coming, holiday edition!",
    )]
}

#[tokio::test]
async fn two_pages_same_instance_counts_twice() {
    let provider = FakeProvider::new(vec![Ok(holiday_page()), Ok(holiday_page())]);
    let mut cfg = RunConfig::new("winter is coming * edition");
    cfg.max_pages = Some(2);

    let ranked = run_search(&cfg, &provider).await.unwrap();
    assert_eq!(
        render_lines(&ranked),
        vec!["winter is coming holiday edition: 2"]
    );
    assert_eq!(provider.starts(), vec![1, 11]);
}

#[tokio::test]
async fn requests_carry_query_and_site() {
    let provider = FakeProvider::new(vec![]);
    let mut cfg = RunConfig::new("X is the new *");
    cfg.max_pages = Some(1);
    cfg.site = Some("twitter.com".into());

    let ranked = run_search(&cfg, &provider).await.unwrap();
    assert!(ranked.is_empty());

    let seen = provider.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].query, "\"X+is+the+new+*\"");
    assert_eq!(seen[0].num, 10);
    assert_eq!(seen[0].site.as_deref(), Some("twitter.com"));
}

#[tokio::test]
async fn failed_page_is_skipped_and_later_pages_still_fetched() {
    let provider = FakeProvider::new(vec![
        Ok(vec![ResultItem::new("X is the new black", "")]),
        Err(403),
        Ok(vec![
            ResultItem::new("", "x is the new red"),
            ResultItem::new("X is the new black", "x is the new red"),
        ]),
    ]);
    let mut cfg = RunConfig::new("X is the new *");
    cfg.max_pages = Some(3);

    let ranked = run_search(&cfg, &provider).await.unwrap();
    assert_eq!(
        render_lines(&ranked),
        vec!["x is the new black: 2", "x is the new red: 1"]
    );
    assert_eq!(provider.starts(), vec![1, 11, 21]);
}

#[tokio::test]
async fn every_page_failing_is_an_error() {
    let provider = FakeProvider::new(vec![Err(500), Err(500)]);
    let mut cfg = RunConfig::new("X is the new *");
    cfg.max_pages = Some(2);

    let err = run_search(&cfg, &provider).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::AllPagesFailed { pages: 2 })
    ));
}

#[tokio::test]
async fn zero_pages_is_an_empty_report() {
    let provider = FakeProvider::new(vec![Ok(holiday_page())]);
    let mut cfg = RunConfig::new("winter is coming * edition");
    cfg.max_pages = Some(-5);

    let ranked = run_search(&cfg, &provider).await.unwrap();
    assert!(ranked.is_empty());
    assert!(provider.starts().is_empty());
}

#[tokio::test]
async fn empty_pattern_fails_before_fetching() {
    let provider = FakeProvider::new(vec![Ok(holiday_page())]);
    let cfg = RunConfig::new("");

    let err = run_search(&cfg, &provider).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingPattern)
    ));
    assert!(provider.starts().is_empty());
}

#[tokio::test]
async fn fetch_all_reports_summary() {
    let provider = FakeProvider::new(vec![
        Ok(vec![
            ResultItem::new("x is the new black", "x is the new black"),
            ResultItem::new("no", "match"),
        ]),
        Err(429),
    ]);
    let compiled = compile("X is the new *", false).unwrap();
    let mut table = FrequencyTable::new();

    let opts = FetchOptions::new(PagePlan::new(Some(2)));
    let summary = fetch_all(&provider, &compiled, opts, &mut table).await;

    assert_eq!(summary.pages_ok, 1);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.pages_scheduled(), 2);
    assert_eq!(summary.items_seen, 2);
    assert_eq!(summary.matches, 1);
    assert_eq!(table.count("x is the new black"), 1);
}

#[tokio::test]
async fn verbose_and_debug_do_not_change_the_ranking() {
    let pages = || {
        vec![
            Ok(vec![
                ResultItem::new("X is the new black", "x is the new red"),
                ResultItem::new("", "x is the new red"),
            ]),
            Err(503),
            Ok(vec![ResultItem::new("x is the new red", "")]),
        ]
    };

    let mut quiet = RunConfig::new("X is the new *");
    quiet.max_pages = Some(3);
    let mut loud = quiet.clone();
    loud.verbose = true;
    loud.debug = true;

    let expected = run_search(&quiet, &FakeProvider::new(pages())).await.unwrap();
    let traced = run_search(&loud, &FakeProvider::new(pages())).await.unwrap();

    assert_eq!(traced, expected);
    assert_eq!(
        render_lines(&traced),
        vec!["x is the new red: 2", "x is the new black: 1"]
    );
}
