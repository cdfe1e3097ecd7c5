use serde::{Deserialize, Serialize};

use crate::domain::PostSummary;

/// One page of the feed as returned by the content source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    pub items: Vec<PostSummary>,
    /// `None` marks the end of the feed.
    pub next_cursor: Option<String>,
}

impl FeedPage {
    pub fn new(items: Vec<PostSummary>, next_cursor: Option<String>) -> Self {
        Self {
            items,
            next_cursor: next_cursor.filter(|c| !c.is_empty()),
        }
    }
}
