use serde::{Deserialize, Serialize};

/// 1-based page request. Services clamp `per_page` against configured limits
/// before it reaches a repository.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * u64::from(self.per_page)
    }

    /// Normalize against configured listing limits: zero means "use the
    /// default", anything above the cap is capped.
    pub fn normalize(self, default_per_page: u32, max_per_page: u32) -> Self {
        let per_page = if self.per_page == 0 {
            default_per_page
        } else {
            self.per_page.min(max_per_page)
        };
        Self {
            page: self.page,
            per_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
        }
    }

    pub fn has_more(&self) -> bool {
        self.page * u64::from(self.per_page) < self.total
    }
}
