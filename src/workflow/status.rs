use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Publication status of a content item.
///
/// Closed enumeration: the remote service encodes these as small integers
/// and no article may carry a value outside this set. Adding a variant is
/// deliberately a breaking change everywhere a status is matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ArticleStatus {
    /// Soft-deleted but fully recoverable.
    Recycle,
    /// Unpublished, editable.
    Draft,
    /// Visible, normal.
    Publish,
    /// Visible, promoted. Mutually exclusive with plain Publish.
    Pinned,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown article status value: {0}")]
pub struct UnknownStatus(pub i64);

impl ArticleStatus {
    /// All statuses in wire order. Matches the status filter menu.
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Recycle,
        ArticleStatus::Draft,
        ArticleStatus::Publish,
        ArticleStatus::Pinned,
    ];

    /// Token used in location descriptors and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Recycle => "recycle",
            ArticleStatus::Draft => "draft",
            ArticleStatus::Publish => "publish",
            ArticleStatus::Pinned => "pinned",
        }
    }

    /// Integer value on the service wire.
    pub fn wire_value(&self) -> i64 {
        match self {
            ArticleStatus::Recycle => 0,
            ArticleStatus::Draft => 1,
            ArticleStatus::Publish => 2,
            ArticleStatus::Pinned => 3,
        }
    }
}

impl TryFrom<i64> for ArticleStatus {
    type Error = UnknownStatus;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ArticleStatus::Recycle),
            1 => Ok(ArticleStatus::Draft),
            2 => Ok(ArticleStatus::Publish),
            3 => Ok(ArticleStatus::Pinned),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<ArticleStatus> for i64 {
    fn from(status: ArticleStatus) -> Self {
        status.wire_value()
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recycle" => Ok(ArticleStatus::Recycle),
            "draft" => Ok(ArticleStatus::Draft),
            "publish" => Ok(ArticleStatus::Publish),
            "pinned" => Ok(ArticleStatus::Pinned),
            other => Err(format!("unknown status token: {other}")),
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
