use super::OutcomeError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A validated page request. Both the page and the page size start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PageQuery")]
pub struct Pagination {
    page: u64,
    page_size: u64,
}

impl Pagination {
    pub fn new(page: u64, page_size: u64) -> Result<Self, OutcomeError> {
        if page < 1 || page_size < 1 {
            return Err(OutcomeError::InvalidPagination { page, page_size });
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of items to skip to reach the first item of the page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery {
    #[serde(default = "first_page")]
    page: u64,
    #[serde(default = "default_page_size")]
    page_size: u64,
}

fn first_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl TryFrom<PageQuery> for Pagination {
    type Error = OutcomeError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        Self::new(query.page, query.page_size)
    }
}

/// One page of items together with the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    items: Vec<T>,
    total_count: u64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Pagination block of a success envelope.
///
/// Every field stays unset until [`Meta::add_pagination`] runs, so "no
/// pagination requested" serializes differently from "page 1 of 1".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_next_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_previous_page: Option<bool>,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginated(pagination: &Pagination, total_count: u64) -> Self {
        let mut meta = Self::new();
        meta.paginate(pagination, total_count);
        meta
    }

    pub fn add_pagination(
        &mut self,
        page: u64,
        page_size: u64,
        total_count: u64,
    ) -> Result<(), OutcomeError> {
        let pagination = Pagination::new(page, page_size)?;
        self.paginate(&pagination, total_count);
        Ok(())
    }

    /// A page past the last one falls back to page 1 instead of failing.
    pub fn paginate(&mut self, pagination: &Pagination, total_count: u64) {
        let page_size = pagination.page_size();
        let total_pages = total_count.div_ceil(page_size);
        let page = if pagination.page() > 1 && pagination.page() > total_pages {
            1
        } else {
            pagination.page()
        };

        self.page = Some(page);
        self.page_size = Some(page_size);
        self.total_count = Some(total_count);
        self.total_pages = Some(total_pages.max(1));
        self.has_next_page = Some(page.saturating_mul(page_size) < total_count);
        self.has_previous_page = Some(page > 1);
    }

    pub fn page(&self) -> Option<u64> {
        self.page
    }

    pub fn page_size(&self) -> Option<u64> {
        self.page_size
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    pub fn has_next_page(&self) -> Option<bool> {
        self.has_next_page
    }

    pub fn has_previous_page(&self) -> Option<bool> {
        self.has_previous_page
    }
}
