use crate::workflow::ArticleStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A content item as reported by the remote data service.
///
/// The service nests the author under `user.name`; we flatten it to a
/// plain `author` field and accept either shape on the way in (cached
/// responses carry the flattened form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    #[serde(alias = "user", deserialize_with = "author_or_user")]
    pub author: String,
    pub status: ArticleStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn author_or_user<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AuthorRepr {
        Name(String),
        User { name: String },
    }

    Ok(match AuthorRepr::deserialize(deserializer)? {
        AuthorRepr::Name(name) => name,
        AuthorRepr::User { name } => name,
    })
}

/// One page of list results plus the filter-wide total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    #[serde(default)]
    pub items: Vec<Article>,
    #[serde(alias = "totalCount")]
    pub total_count: u64,
}

impl ArticlePage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}
