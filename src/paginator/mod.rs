//! Incremental growth of the post listing.
//!
//! A [`FeedState`] starts from a page that was fetched before the view is
//! shown and grows one page per [`FeedState::load_more`] call. Items are
//! only ever appended. A failed load leaves both the items and the cursor
//! exactly as they were.

use std::collections::HashSet;

use crate::app::{Result, SpaceTravelingError};
use crate::domain::{FeedPage, PostSummary};
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

#[derive(Debug, Clone, Default)]
pub struct FeedState {
    items: Vec<PostSummary>,
    cursor: Option<String>,
    /// Ids seen so far; only tracked when dedupe is on.
    seen: Option<HashSet<String>>,
}

impl FeedState {
    pub fn initialize(page: FeedPage) -> Self {
        Self {
            items: page.items,
            cursor: page.next_cursor.filter(|c| !c.is_empty()),
            seen: None,
        }
    }

    /// Skip items whose id is already in the feed on later appends.
    /// Duplicates already present in the initial page are kept.
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.seen = dedupe.then(|| self.items.iter().map(|i| i.id.clone()).collect());
        self
    }

    pub fn items(&self) -> &[PostSummary] {
        &self.items
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fetch the page at the current cursor, append its items and advance
    /// the cursor. Returns the number of items appended.
    ///
    /// Fails with [`SpaceTravelingError::NoMoreItems`] when the feed has
    /// ended. The exclusive borrow keeps a second load from starting on the
    /// same state while one is in flight.
    pub async fn load_more<F>(&mut self, fetcher: &F, normalizer: &Normalizer) -> Result<usize>
    where
        F: Fetcher + Sync + ?Sized,
    {
        let cursor = match self.cursor.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => return Err(SpaceTravelingError::NoMoreItems),
        };

        tracing::debug!("Loading more posts from {}", cursor);
        let body = fetcher.fetch(cursor).await?;
        let page = normalizer.normalize_page(&body)?;

        Ok(self.append(page))
    }

    fn append(&mut self, page: FeedPage) -> usize {
        let before = self.items.len();

        match self.seen.as_mut() {
            Some(seen) => {
                for item in page.items {
                    if seen.insert(item.id.clone()) {
                        self.items.push(item);
                    } else {
                        tracing::debug!("Skipping duplicate post {}", item.id);
                    }
                }
            }
            None => self.items.extend(page.items),
        }

        self.cursor = page.next_cursor.filter(|c| !c.is_empty());

        let appended = self.items.len() - before;
        tracing::info!(
            "Appended {} posts, feed has {} (more: {})",
            appended,
            self.items.len(),
            self.has_more()
        );
        appended
    }
}
