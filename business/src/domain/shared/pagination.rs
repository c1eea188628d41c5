/// Page selector for list queries. `page` is 1-based; `limit` is the page
/// size. Both are expected to be positive, enforced at the API boundary.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Number of rows to skip before the requested page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Index of the last non-empty page: ceil(total / limit).
    pub fn last_page(&self, total: i64) -> i64 {
        if self.limit <= 0 {
            return 0;
        }
        (total + self.limit - 1) / self.limit
    }
}
