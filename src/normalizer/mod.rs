pub mod date;
pub mod raw;

use html_escape::decode_html_entities;

use crate::app::{Result, SpaceTravelingError};
use crate::domain::{FeedPage, Post, PostLink, PostSummary, RichTextBlock, TextSpan};

pub use date::{format_publication_date, parse_publication_date};
use raw::{text_value, RawApi, RawDocument, RawPage};

/// Lenient conversion of content-API responses into domain types.
///
/// Structural problems (invalid JSON, no `results` array) are
/// [`SpaceTravelingError::MalformedPage`]; missing fields on individual
/// documents are not errors and normalize to empty values.
#[derive(Debug, Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize_page(&self, body: &[u8]) -> Result<FeedPage> {
        let page = Self::parse_page(body)?;

        let items = page
            .results
            .iter()
            .map(|doc| self.summary(doc))
            .collect();

        Ok(FeedPage::new(items, page.next_page))
    }

    /// First document of a search response as a full post.
    pub fn normalize_post(&self, body: &[u8]) -> Result<Option<Post>> {
        let page = Self::parse_page(body)?;
        Ok(page.results.first().map(|doc| self.post(doc)))
    }

    /// First document of a search response as a footer link.
    pub fn normalize_link(&self, body: &[u8]) -> Result<Option<PostLink>> {
        let page = Self::parse_page(body)?;
        Ok(page.results.first().map(|doc| {
            let data = doc.data.as_ref();
            PostLink {
                uid: document_id(doc),
                title: decoded(text_value(data.and_then(|d| d.title.as_ref()))),
            }
        }))
    }

    /// Document ids of a search response plus its cursor.
    pub fn normalize_uids(&self, body: &[u8]) -> Result<(Vec<String>, Option<String>)> {
        let page = Self::parse_page(body)?;
        let uids = page
            .results
            .iter()
            .map(document_id)
            .filter(|uid| !uid.is_empty())
            .collect();
        Ok((uids, page.next_page.filter(|c| !c.is_empty())))
    }

    /// The master ref from the API root document.
    pub fn master_ref(&self, body: &[u8]) -> Result<String> {
        let api: RawApi = serde_json::from_slice(body)?;

        api.refs
            .iter()
            .find(|r| r.is_master_ref)
            .or_else(|| api.refs.iter().find(|r| r.id == "master"))
            .map(|r| r.reference.clone())
            .ok_or_else(|| SpaceTravelingError::MalformedPage("API has no master ref".into()))
    }

    fn parse_page(body: &[u8]) -> Result<RawPage> {
        Ok(serde_json::from_slice(body)?)
    }

    fn summary(&self, doc: &RawDocument) -> PostSummary {
        let data = doc.data.as_ref();

        PostSummary {
            id: document_id(doc),
            title: decoded(text_value(data.and_then(|d| d.title.as_ref()))),
            subtitle: decoded(text_value(data.and_then(|d| d.subtitle.as_ref()))),
            author: decoded(text_value(data.and_then(|d| d.author.as_ref()))),
            published_at: publication_date(doc),
        }
    }

    fn post(&self, doc: &RawDocument) -> Post {
        let summary = self.summary(doc);
        let data = doc.data.as_ref();

        let banner_url = data
            .and_then(|d| d.banner.as_ref())
            .and_then(|b| b.url.clone())
            .filter(|u| !u.is_empty());

        let content = data
            .and_then(|d| d.content.as_ref())
            .map(|sections| {
                sections
                    .iter()
                    .map(|section| {
                        let body = section
                            .body
                            .iter()
                            .flatten()
                            .filter_map(|span| span.text.as_deref())
                            .map(TextSpan::new)
                            .collect();
                        RichTextBlock::new(decoded(text_value(section.heading.as_ref())), body)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Post {
            uid: summary.id,
            title: summary.title,
            subtitle: summary.subtitle,
            author: summary.author,
            banner_url,
            published_at: summary.published_at,
            content,
        }
    }
}

fn document_id(doc: &RawDocument) -> String {
    let id = doc
        .uid
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .or(doc.id.as_deref())
        .map(str::trim)
        .unwrap_or_default();

    if id.is_empty() {
        tracing::warn!("Document without uid or id");
    }

    id.to_string()
}

fn publication_date(doc: &RawDocument) -> Option<chrono::DateTime<chrono::Utc>> {
    let raw = doc.first_publication_date.as_deref()?;
    let parsed = parse_publication_date(raw);
    if parsed.is_none() {
        tracing::warn!("Unparseable publication date {:?}", raw);
    }
    parsed
}

fn decoded(text: String) -> String {
    decode_html_entities(&text).into_owned()
}
