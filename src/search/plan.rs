/// Hard limit of the Custom Search API.
pub const MAX_RESULTS: u32 = 100;
pub const RESULTS_PER_CALL: u32 = 10;
pub const MAX_PAGES: u32 = MAX_RESULTS / RESULTS_PER_CALL;

/// Which pages to fetch, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub pages: u32,
    pub per_page: u32,
}

impl PagePlan {
    /// `None` → every page the API allows; otherwise clamped to `0..=MAX_PAGES`.
    pub fn new(max_pages: Option<i64>) -> Self {
        let pages = match max_pages {
            None => MAX_PAGES,
            Some(n) => n.clamp(0, MAX_PAGES as i64) as u32,
        };
        Self {
            pages,
            per_page: RESULTS_PER_CALL,
        }
    }

    /// 1-based start offsets: 1, 11, 21, ...
    pub fn starts(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.pages).map(move |i| 1 + i * self.per_page)
    }
}
