//! Encoding between [`ListQuery`] and the query-string location descriptor.
//!
//! Encoding is canonical: fixed key order, filters comma-joined in sorted
//! order, empty optionals omitted. Decoding is forgiving: a malformed
//! descriptor yields a usable query (page falls back to 1, unknown status
//! tokens are dropped, a half-present sort pair is dropped whole) because
//! the list must always render something.

use super::list_query::{ListQuery, Sort, SortField, SortOrder};
use crate::workflow::ArticleStatus;
use std::collections::BTreeSet;
use url::form_urlencoded;

const KEY_PAGE: &str = "page";
const KEY_PAGE_SIZE: &str = "page_size";
const KEY_SORT_FIELD: &str = "sort_field";
const KEY_SORT_ORDER: &str = "sort_order";
const KEY_STATUS: &str = "status";
const KEY_SEARCH: &str = "search";

/// Serialize a query into its descriptor (no leading `?`).
pub fn encode(query: &ListQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(KEY_PAGE, &query.page.to_string());
    if let Some(page_size) = query.page_size {
        serializer.append_pair(KEY_PAGE_SIZE, &page_size.to_string());
    }
    if let Some(sort) = query.sort {
        serializer.append_pair(KEY_SORT_FIELD, sort.field.as_str());
        serializer.append_pair(KEY_SORT_ORDER, sort.order.as_str());
    }
    if !query.status_filters.is_empty() {
        // BTreeSet iteration order makes this the canonical form.
        let joined = query
            .status_filters
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",");
        serializer.append_pair(KEY_STATUS, &joined);
    }
    if let Some(search) = query.search.as_deref() {
        if !search.is_empty() {
            serializer.append_pair(KEY_SEARCH, search);
        }
    }
    serializer.finish()
}

/// Parse a descriptor back into a query, substituting defaults for
/// anything malformed. Never fails.
pub fn decode(descriptor: &str) -> ListQuery {
    let descriptor = descriptor.strip_prefix('?').unwrap_or(descriptor);

    let mut page: Option<u32> = None;
    let mut page_size: Option<u32> = None;
    let mut sort_field: Option<SortField> = None;
    let mut sort_order: Option<SortOrder> = None;
    let mut status_filters: BTreeSet<ArticleStatus> = BTreeSet::new();
    let mut search: Option<String> = None;

    for (key, value) in form_urlencoded::parse(descriptor.as_bytes()) {
        match key.as_ref() {
            KEY_PAGE => page = value.parse().ok().filter(|p| *p >= 1),
            KEY_PAGE_SIZE => page_size = value.parse().ok().filter(|p| *p >= 1),
            KEY_SORT_FIELD => sort_field = value.parse().ok(),
            KEY_SORT_ORDER => sort_order = value.parse().ok(),
            // `status` may repeat or hold a comma-joined list; both are
            // accepted, unknown tokens are dropped.
            KEY_STATUS => {
                for token in value.split(',') {
                    if let Ok(status) = token.trim().parse::<ArticleStatus>() {
                        status_filters.insert(status);
                    }
                }
            }
            KEY_SEARCH => {
                if !value.is_empty() {
                    search = Some(value.into_owned());
                }
            }
            _ => {}
        }
    }

    // A sort needs both halves; drop the pair otherwise.
    let sort = match (sort_field, sort_order) {
        (Some(field), Some(order)) => Some(Sort { field, order }),
        _ => None,
    };

    ListQuery {
        page: page.unwrap_or(1),
        page_size,
        sort,
        status_filters,
        search,
    }
}
