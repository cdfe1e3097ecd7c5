use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::RichTextBlock;

/// A listing entry for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// `None` for documents that were never published.
    pub published_at: Option<DateTime<Utc>>,
}

impl PostSummary {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            subtitle: String::new(),
            author: String::new(),
            published_at: None,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Route of the post page on the site.
    pub fn path(&self) -> String {
        format!("/post/{}", self.id)
    }
}

/// Link to an adjacent post, shown in the post page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostLink {
    pub uid: String,
    pub title: String,
}

/// A full post document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub content: Vec<RichTextBlock>,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.uid.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            author: self.author.clone(),
            published_at: self.published_at,
        }
    }
}

/// Everything the post view needs: the document, its estimated reading
/// time and the neighbouring posts by publication date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub post: Post,
    pub reading_minutes: u32,
    pub prev: Option<PostLink>,
    pub next: Option<PostLink>,
}
