//! Integration tests for listing sessions and reading-time estimates,
//! driven through the public API with an in-memory content source.

use std::collections::HashMap;

use async_trait::async_trait;

use space_traveling::app::{Result, SpaceTravelingError};
use space_traveling::domain::{FeedPage, PostSummary, RichTextBlock, TextSpan};
use space_traveling::fetcher::Fetcher;
use space_traveling::normalizer::Normalizer;
use space_traveling::paginator::FeedState;
use space_traveling::reading_time;

struct StaticSource {
    pages: HashMap<&'static str, &'static str>,
}

#[async_trait]
impl Fetcher for StaticSource {
    async fn fetch(&self, cursor: &str) -> Result<Vec<u8>> {
        self.pages
            .get(cursor)
            .map(|b| b.as_bytes().to_vec())
            .ok_or_else(|| SpaceTravelingError::Fetch(format!("connection refused: {}", cursor)))
    }
}

fn post(id: &str) -> PostSummary {
    let mut p = PostSummary::new(id);
    p.title = id.to_uppercase();
    p.author = "Autor".to_string();
    p
}

fn words(n: usize) -> String {
    vec!["texto"; n].join(" ")
}

// ============================================================================
// Feed pagination
// ============================================================================

#[tokio::test]
async fn test_two_page_session() {
    let source = StaticSource {
        pages: HashMap::from([(
            "tok1",
            r#"{"results": [{"uid": "c", "data": {"title": "C", "author": "Ana"}}], "next_page": null}"#,
        )]),
    };

    let mut state = FeedState::initialize(FeedPage::new(vec![post("a"), post("b")], Some("tok1".into())));
    assert_eq!(state.len(), 2);
    assert_eq!(state.cursor(), Some("tok1"));

    state.load_more(&source, &Normalizer::new()).await.unwrap();

    let ids: Vec<&str> = state.items().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(state.items()[2].author, "Ana");
    assert_eq!(state.cursor(), None);
    assert!(!state.has_more());

    let err = state.load_more(&source, &Normalizer::new()).await.unwrap_err();
    assert!(matches!(err, SpaceTravelingError::NoMoreItems));
    assert_eq!(state.len(), 3);
}

#[tokio::test]
async fn test_failure_then_retry() {
    let mut source = StaticSource {
        pages: HashMap::new(),
    };
    let normalizer = Normalizer::new();
    let mut state = FeedState::initialize(FeedPage::new(vec![post("a")], Some("tok1".into())));

    let err = state.load_more(&source, &normalizer).await.unwrap_err();
    assert!(err.is_fetch_error());
    assert_eq!(state.len(), 1);
    assert_eq!(state.cursor(), Some("tok1"));

    source.pages.insert("tok1", r#"{"results": [{"uid": "b"}], "next_page": "tok2"}"#);
    let appended = state.load_more(&source, &normalizer).await.unwrap();

    assert_eq!(appended, 1);
    assert_eq!(state.cursor(), Some("tok2"));
}

#[tokio::test]
async fn test_items_from_incomplete_documents() {
    let source = StaticSource {
        pages: HashMap::from([(
            "tok1",
            r#"{"results": [{"id": "x"}, {"uid": "y", "data": {"subtitle": "only subtitle"}}]}"#,
        )]),
    };
    let mut state = FeedState::initialize(FeedPage::new(Vec::new(), Some("tok1".into())));

    state.load_more(&source, &Normalizer::new()).await.unwrap();

    assert_eq!(state.len(), 2);
    assert_eq!(state.items()[0].id, "x");
    assert_eq!(state.items()[0].title, "");
    assert_eq!(state.items()[1].subtitle, "only subtitle");
    assert_eq!(state.items()[1].published_at, None);
}

// ============================================================================
// Reading time
// ============================================================================

#[test]
fn test_reading_time_two_blocks() {
    let first = words(150);
    let second = words(60);
    let content = vec![
        RichTextBlock::new("Primeira", vec![TextSpan::new(first)]),
        RichTextBlock::new("Segunda", vec![TextSpan::new(second)]),
    ];

    assert_eq!(reading_time::estimate(&content).minutes, 2);
}

#[test]
fn test_reading_time_boundaries() {
    let block = |n: usize| vec![RichTextBlock::new("h", vec![TextSpan::new(words(n))])];

    assert_eq!(reading_time::estimate(&[]).minutes, 0);
    assert_eq!(reading_time::estimate(&block(200)).minutes, 1);
    assert_eq!(reading_time::estimate(&block(201)).minutes, 2);
}
