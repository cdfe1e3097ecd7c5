pub mod query;

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::app::{Result, SpaceTravelingError};
use crate::domain::{FeedPage, Post, PostLink, PostPage};
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::paginator::FeedState;
use crate::reading_time::{self, WORDS_PER_MINUTE};

pub use query::{Ordering, Predicate, SearchQuery, PUBLICATION_DATE};

pub const POST_TYPE: &str = "post";
pub const DEFAULT_PAGE_SIZE: u32 = 1;
pub const DEFAULT_PATHS_LIMIT: u32 = 10;

/// Queries the blog's content repository through a [`Fetcher`].
///
/// The master ref is resolved on first use and reused for every query made
/// by this client.
pub struct CmsClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
    endpoint: String,
    page_size: u32,
    words_per_minute: u32,
    master_ref: OnceCell<String>,
}

impl CmsClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, endpoint: &str) -> Result<Self> {
        url::Url::parse(endpoint)?;

        Ok(Self {
            fetcher,
            normalizer: Normalizer::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            words_per_minute: WORDS_PER_MINUTE,
            master_ref: OnceCell::new(),
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub async fn master_ref(&self) -> Result<&str> {
        let reference = self
            .master_ref
            .get_or_try_init(|| async {
                let body = self.fetcher.fetch(&self.endpoint).await?;
                self.normalizer.master_ref(&body)
            })
            .await?;
        Ok(reference.as_str())
    }

    /// First page of the post listing.
    pub async fn first_page(&self) -> Result<FeedPage> {
        let query = SearchQuery::new()
            .filter(Predicate::document_type(POST_TYPE))
            .page_size(self.page_size);
        let body = self.search(&query).await?;
        self.normalizer.normalize_page(&body)
    }

    /// Start a listing session from the first page.
    pub async fn open_feed(&self, dedupe: bool) -> Result<FeedState> {
        let page = self.first_page().await?;
        Ok(FeedState::initialize(page).with_dedupe(dedupe))
    }

    pub async fn load_more(&self, state: &mut FeedState) -> Result<usize> {
        state.load_more(self.fetcher.as_ref(), &self.normalizer).await
    }

    pub async fn post_by_uid(&self, uid: &str) -> Result<Post> {
        let query = SearchQuery::new()
            .filter(Predicate::uid(POST_TYPE, uid))
            .page_size(1);
        let body = self.search(&query).await?;

        self.normalizer
            .normalize_post(&body)?
            .ok_or_else(|| SpaceTravelingError::PostNotFound(uid.to_string()))
    }

    /// Posts published immediately before and after `post`, as
    /// `(prev, next)`. Unpublished posts have no neighbours.
    pub async fn neighbours(&self, post: &Post) -> Result<(Option<PostLink>, Option<PostLink>)> {
        let Some(published_at) = post.published_at else {
            return Ok((None, None));
        };

        let prev = SearchQuery::new()
            .filter(Predicate::document_type(POST_TYPE))
            .filter(Predicate::DateBefore(PUBLICATION_DATE.into(), published_at))
            .order_by(PUBLICATION_DATE, Ordering::Descending)
            .page_size(1);
        let next = SearchQuery::new()
            .filter(Predicate::document_type(POST_TYPE))
            .filter(Predicate::DateAfter(PUBLICATION_DATE.into(), published_at))
            .order_by(PUBLICATION_DATE, Ordering::Ascending)
            .page_size(1);

        let prev = self.normalizer.normalize_link(&self.search(&prev).await?)?;
        let next = self.normalizer.normalize_link(&self.search(&next).await?)?;

        Ok((prev, next))
    }

    /// Everything the post view renders for `uid`.
    pub async fn post_page(&self, uid: &str) -> Result<PostPage> {
        let post = self.post_by_uid(uid).await?;
        let (prev, next) = self.neighbours(&post).await?;
        let reading_minutes =
            reading_time::estimate_with_speed(&post.content, self.words_per_minute).minutes;

        Ok(PostPage {
            post,
            reading_minutes,
            prev,
            next,
        })
    }

    /// Uids of up to `limit` posts, for pre-rendering post routes.
    pub async fn post_uids(&self, limit: u32) -> Result<Vec<String>> {
        let query = SearchQuery::new()
            .filter(Predicate::document_type(POST_TYPE))
            .fetch("post.uid")
            .page_size(limit);
        let body = self.search(&query).await?;
        let (uids, _) = self.normalizer.normalize_uids(&body)?;
        Ok(uids)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<u8>> {
        let reference = self.master_ref().await?;
        let url = query.to_url(&self.endpoint, reference)?;
        self.fetcher.fetch(url.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    const ENDPOINT: &str = "https://spacetraveling.cdn.prismic.io/api/v2";

    /// Answers the API root with a master ref and every search with the
    /// first response whose marker occurs in the decoded request URL.
    struct RoutingFetcher {
        routes: Vec<(String, String)>,
        calls: Mutex<Vec<String>>,
    }

    impl RoutingFetcher {
        fn new(routes: &[(&str, &str)]) -> Self {
            Self {
                routes: routes
                    .iter()
                    .map(|(m, b)| (m.to_string(), b.to_string()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Fetcher for RoutingFetcher {
        async fn fetch(&self, cursor: &str) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(cursor.to_string());

            if cursor == ENDPOINT {
                return Ok(br#"{"refs": [{"id": "master", "ref": "MASTER", "isMasterRef": true}]}"#.to_vec());
            }

            let decoded: String = url::Url::parse(cursor)
                .map(|u| {
                    u.query_pairs()
                        .map(|(k, v)| format!("{}={}&", k, v))
                        .collect()
                })
                .unwrap_or_else(|_| cursor.to_string());

            self.routes
                .iter()
                .find(|(marker, _)| decoded.contains(marker.as_str()))
                .map(|(_, body)| body.clone().into_bytes())
                .ok_or_else(|| SpaceTravelingError::Fetch(format!("unrouted {}", decoded)))
        }
    }

    fn client(fetcher: Arc<RoutingFetcher>) -> CmsClient {
        CmsClient::new(fetcher, ENDPOINT).unwrap()
    }

    const POST_BODY: &str = r#"{"results": [{
        "uid": "como-utilizar-hooks",
        "first_publication_date": "2021-03-15T19:25:28+0000",
        "data": {
            "title": "Como utilizar Hooks",
            "author": "Joseph Oliveira",
            "content": [
                {"heading": "Um", "body": [{"text": "uma duas tres"}]},
                {"heading": "Dois", "body": [{"text": "quatro"}]}
            ]
        }
    }]}"#;

    #[test]
    fn test_master_ref_resolved_once() {
        let fetcher = Arc::new(RoutingFetcher::new(&[]));
        let client = client(fetcher.clone());

        tokio_test::block_on(async {
            assert_eq!(client.master_ref().await.unwrap(), "MASTER");
            assert_eq!(client.master_ref().await.unwrap(), "MASTER");
        });

        assert_eq!(fetcher.call_count(), 1);
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let fetcher = Arc::new(RoutingFetcher::new(&[]));
        assert!(CmsClient::new(fetcher, "spacetraveling").is_err());
    }

    #[tokio::test]
    async fn test_first_page_uses_page_size() {
        let fetcher = Arc::new(RoutingFetcher::new(&[(
            "pageSize=3",
            r#"{"results": [{"uid": "a"}], "next_page": "https://next"}"#,
        )]));
        let client = client(fetcher).with_page_size(3);

        let page = client.first_page().await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_cursor.as_deref(), Some("https://next"));
    }

    #[tokio::test]
    async fn test_open_feed_and_load_more() {
        let fetcher = Arc::new(RoutingFetcher::new(&[
            ("page=2", r#"{"results": [{"uid": "b"}], "next_page": null}"#),
            (
                "ref=MASTER",
                r#"{"results": [{"uid": "a"}], "next_page": "https://spacetraveling.cdn.prismic.io/api/v2/documents/search?page=2"}"#,
            ),
        ]));
        let client = client(fetcher);

        let mut state = client.open_feed(false).await.unwrap();
        assert!(state.has_more());

        let appended = client.load_more(&mut state).await.unwrap();

        assert_eq!(appended, 1);
        assert_eq!(state.items()[1].id, "b");
        assert!(!state.has_more());
    }

    #[tokio::test]
    async fn test_post_page_with_neighbours() {
        let fetcher = Arc::new(RoutingFetcher::new(&[
            ("my.post.uid", POST_BODY),
            (
                "date.before",
                r#"{"results": [{"uid": "anterior", "data": {"title": "Anterior"}}]}"#,
            ),
            ("date.after", r#"{"results": []}"#),
        ]));
        let client = client(fetcher);

        let page = client.post_page("como-utilizar-hooks").await.unwrap();

        assert_eq!(page.post.title, "Como utilizar Hooks");
        assert_eq!(page.reading_minutes, 1);
        assert_eq!(
            page.prev,
            Some(PostLink {
                uid: "anterior".into(),
                title: "Anterior".into()
            })
        );
        assert_eq!(page.next, None);
    }

    #[tokio::test]
    async fn test_unpublished_post_has_no_neighbours() {
        let fetcher = Arc::new(RoutingFetcher::new(&[(
            "my.post.uid",
            r#"{"results": [{"uid": "draft", "first_publication_date": null}]}"#,
        )]));
        let client = client(fetcher.clone());

        let page = client.post_page("draft").await.unwrap();

        assert_eq!(page.prev, None);
        assert_eq!(page.next, None);
        assert_eq!(page.reading_minutes, 0);
        // API root + uid lookup only
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_post_not_found() {
        let fetcher = Arc::new(RoutingFetcher::new(&[("my.post.uid", r#"{"results": []}"#)]));
        let err = client(fetcher).post_by_uid("missing").await.unwrap_err();
        assert!(matches!(err, SpaceTravelingError::PostNotFound(uid) if uid == "missing"));
    }

    #[tokio::test]
    async fn test_post_uids() {
        let fetcher = Arc::new(RoutingFetcher::new(&[(
            "fetch=post.uid",
            r#"{"results": [{"uid": "a"}, {"uid": "b"}, {"id": ""}]}"#,
        )]));
        let uids = client(fetcher).post_uids(DEFAULT_PATHS_LIMIT).await.unwrap();
        assert_eq!(uids, vec!["a", "b"]);
    }
}
