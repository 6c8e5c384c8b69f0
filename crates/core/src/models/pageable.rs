use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request for one window of a result set.
///
/// Pages are numbered from one. Both the page number and the page size are
/// at least one; this is checked on construction and cannot change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageable")]
pub struct Pageable {
    page: u32,
    size: u32,
}

#[derive(Deserialize)]
struct RawPageable {
    page: u32,
    size: u32,
}

impl TryFrom<RawPageable> for Pageable {
    type Error = ArgumentError;

    fn try_from(raw: RawPageable) -> Result<Self, Self::Error> {
        Pageable::new(raw.page, raw.size)
    }
}

impl Pageable {
    pub fn new(page: u32, size: u32) -> Result<Self, ArgumentError> {
        if page < 1 {
            return Err(ArgumentError::less_than_one("page", page));
        }
        if size < 1 {
            return Err(ArgumentError::less_than_one("size", size));
        }
        Ok(Self { page, size })
    }

    pub fn builder() -> PageableBuilder {
        PageableBuilder::default()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of elements preceding this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
        }
    }

    /// The preceding page, or this one when already on the first page
    pub fn previous(&self) -> Self {
        if self.page == 1 {
            *self
        } else {
            Self {
                page: self.page - 1,
                size: self.size,
            }
        }
    }

    pub fn first(&self) -> Self {
        Self {
            page: 1,
            size: self.size,
        }
    }

    pub fn previous_or_first(&self) -> Self {
        if self.page > 1 {
            self.previous()
        } else {
            self.first()
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl fmt::Display for Pageable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} (size {})", self.page, self.size)
    }
}

/// Named-parameter construction of a [`Pageable`], starting from the search defaults
#[derive(Debug, Clone)]
pub struct PageableBuilder {
    page: u32,
    size: u32,
}

impl Default for PageableBuilder {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageableBuilder {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn build(self) -> Result<Pageable, ArgumentError> {
        Pageable::new(self.page, self.size)
    }
}
