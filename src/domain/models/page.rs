/// One page of matching items plus the total count of all matches.
///
/// The total is computed before pagination in a separate statement from the
/// page fetch, so it may be slightly stale under concurrent writes. That is
/// a documented relaxation, not a bug.
#[derive(Debug, Clone)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}

impl<T> PagedResult<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}
