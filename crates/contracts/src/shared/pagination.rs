use serde::{Deserialize, Serialize};

/// Request for one page of a list (1-based page number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    /// Page and size are clamped to at least 1
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
        }
    }

    /// Number of items to skip on the server side
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

/// One page of items plus the total count across all pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        let total = total.max(items.len());
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Cut a page out of a fully loaded list
    pub fn slice(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.size)
            .collect();
        Self { items, total }
    }
}

/// List response body: either a bare JSON array or a `{items, total}` envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Page {
        items: Vec<T>,
        #[serde(default)]
        total: Option<usize>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_page(self) -> PageResult<T> {
        match self {
            ListEnvelope::Bare(items) => {
                let total = items.len();
                PageResult { items, total }
            }
            ListEnvelope::Page { items, total } => {
                let total = total.unwrap_or(items.len());
                PageResult::new(items, total)
            }
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) | ListEnvelope::Page { items, .. } => items,
        }
    }
}

/// Single entity response body: `{data: ...}` or the raw payload
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DataEnvelope<T> {
    Wrapped { data: T },
    Raw(T),
}

impl<T> DataEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            DataEnvelope::Wrapped { data } | DataEnvelope::Raw(data) => data,
        }
    }
}
