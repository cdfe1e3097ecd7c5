//! # space-traveling
//!
//! Reader for the space-traveling blog, backed by a headless content API.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → FeedState / PostPage → CLI
//! ```
//!
//! - [`fetcher`]: raw page access by cursor, reqwest-backed over HTTP
//! - [`normalizer`]: lenient conversion of API JSON into domain types
//! - [`paginator`]: the listing feed, grown one page at a time
//! - [`reading_time`]: minute estimate from a post's rich text
//!
//! ## Quick Start
//!
//! ```bash
//! # First page of posts, then two more
//! space-traveling list --pages 2
//!
//! # A single post with reading time and neighbours
//! space-traveling post como-utilizar-hooks
//!
//! # Routes to pre-render
//! space-traveling paths
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// fetcher and content client.
pub mod app;

/// Command-line interface using clap.
///
/// - `list [--pages N | --all]` - List posts, loading more pages
/// - `post <uid> [--comments]` - Show a post
/// - `paths [--limit N]` - List post routes
pub mod cli;

/// Queries against the content repository: listing, post lookup,
/// neighbouring posts and route listing.
pub mod cms;

/// Utterances comment widget embed.
pub mod comments;

/// Configuration loaded from `~/.config/space-traveling/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`PostSummary`](domain::PostSummary): listing entry
/// - [`FeedPage`](domain::FeedPage): one page plus its cursor
/// - [`Post`](domain::Post): full document with rich-text content
pub mod domain;

/// Content access by cursor.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Response parsing and normalization.
pub mod normalizer;

/// Incremental feed pagination.
pub mod paginator;

/// Reading-time estimation.
pub mod reading_time;
