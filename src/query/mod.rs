// List Query Module - Location Descriptor
//
// The serializable descriptor that pins down one list view: page, page
// size, sort, status filters, free-text search. Encoding is canonical so
// two semantically equal queries always produce the same descriptor, which
// is what makes browser-style history dedup work.

pub mod codec;
pub mod list_query;

pub use codec::{decode, encode};
pub use list_query::{ListQuery, Sort, SortField, SortOrder};
