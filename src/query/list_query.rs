use crate::workflow::ArticleStatus;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Sortable columns of the article table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "created_at" => Ok(SortField::CreatedAt),
            "updated_at" => Ok(SortField::UpdatedAt),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction. First click on a column always starts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascend => "ascend",
            SortOrder::Descend => "descend",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascend" => Ok(SortOrder::Ascend),
            "descend" => Ok(SortOrder::Descend),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single active sort: one column, one direction. No multi-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Sort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Ascending sort on `field`, the state after a first column click.
    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortOrder::Ascend)
    }
}

/// The full list-view descriptor. Owned by the navigation subsystem;
/// mirrored read-only inside the controller for one view instance.
///
/// `status_filters` is a BTreeSet so that equal filter sets serialize
/// identically regardless of construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Page size; absent means the service-defined default.
    pub page_size: Option<u32>,
    pub sort: Option<Sort>,
    /// Empty set means no status filter.
    pub status_filters: BTreeSet<ArticleStatus>,
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: None,
            sort: None,
            status_filters: BTreeSet::new(),
            search: None,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same view reset to its first page. Filter or search changes always
    /// land here so the operator never stares at an out-of-range page.
    pub fn first_page(mut self) -> Self {
        self.page = 1;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_sort(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_filters(mut self, filters: BTreeSet<ArticleStatus>) -> Self {
        self.status_filters = filters;
        self
    }

    /// Replaces the free-text search; an empty string clears it.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = if search.is_empty() {
            None
        } else {
            Some(search.to_string())
        };
        self
    }
}
