//! One window of a larger result set.
//!
//! Page numbering is one-based, matching [`Pageable`]. The navigation facts
//! are derived from the stored `content`, `pageable` and `total` triple:
//!
//! - `total_pages = max(1, ceil(total / size))`, so an empty result still has one page
//! - `has_previous = page > 1`
//! - `has_next = page + 1 < total_pages`

use super::Pageable;
use crate::error::ArgumentError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    content: Vec<T>,
    pageable: Pageable,
    total: u64,
}

impl<T> Page<T> {
    /// Fails when `total` is negative
    pub fn new(content: Vec<T>, pageable: Pageable, total: i64) -> Result<Self, ArgumentError> {
        let total = u64::try_from(total).map_err(|_| ArgumentError::negative("total", total))?;
        Ok(Self {
            content,
            pageable,
            total,
        })
    }

    /// An empty first page
    pub fn empty(pageable: Pageable) -> Self {
        Self {
            content: Vec::new(),
            pageable,
            total: 0,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn pageable(&self) -> Pageable {
        self.pageable
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// One-based page number
    pub fn number(&self) -> u32 {
        self.pageable.page()
    }

    pub fn size(&self) -> u32 {
        self.pageable.size()
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn total_elements(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.size())).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.pageable.has_previous()
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.number()) + 1 < self.total_pages()
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn next_pageable(&self) -> Option<Pageable> {
        self.has_next().then(|| self.pageable.next())
    }

    pub fn previous_pageable(&self) -> Option<Pageable> {
        self.has_previous()
            .then(|| self.pageable.previous_or_first())
    }

    pub fn first_pageable(&self) -> Pageable {
        self.pageable.first()
    }

    pub fn last_pageable(&self) -> Pageable {
        let last = u32::try_from(self.total_pages()).unwrap_or(u32::MAX);
        Pageable::new(last, self.size()).unwrap_or_else(|_| self.pageable.first())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    /// Convert the content while keeping the pagination facts
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            total: self.total,
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
