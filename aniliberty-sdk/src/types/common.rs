//! Shapes shared across API areas

use crate::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};

// ============================================================================
// Images
// ============================================================================

/// Image URLs (relative to the site root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub preview: String,
    pub thumbnail: String,
}

/// Image with an optional optimized (webp) variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageWithOptimized {
    pub preview: String,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized: Option<Image>,
}

// ============================================================================
// Pagination
// ============================================================================

/// Links to neighbouring pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Pagination counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PaginationLinks>,
}

/// The `meta` block of a paginated response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub pagination: Pagination,
}

/// A page of results: `{data: [...], meta: {pagination: {...}}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Returns true if another page follows this one
    pub fn has_next_page(&self) -> bool {
        let pagination = &self.meta.pagination;
        pagination.current_page < pagination.total_pages
    }
}

/// A bare `{data: [...]}` wrapper without pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

// ============================================================================
// References
// ============================================================================

/// An entry of a reference dictionary (`{value, label?, description?}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference<T> {
    pub value: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A genre as listed in reference dictionaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceGenre {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Common query parameters
// ============================================================================

/// Field selection: `include` keeps only the listed fields, `exclude` drops them
///
/// Nested fields use dot notation (`name.main`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IncludeExclude {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl IncludeExclude {
    /// Keep only the given fields
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include: Some(fields.into_iter().map(Into::into).collect()),
            exclude: None,
        }
    }

    /// Drop the given fields
    pub fn exclude<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include: None,
            exclude: Some(fields.into_iter().map(Into::into).collect()),
        }
    }
}

impl ToQuery for IncludeExclude {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("include", self.include.clone())
            .with_opt("exclude", self.exclude.clone())
    }
}

/// Page selection for paginated endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageParams {
    /// Request a specific page with a page size
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

impl ToQuery for PageParams {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
    }
}
