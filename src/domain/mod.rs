pub mod page;
pub mod post;
pub mod rich_text;

pub use page::FeedPage;
pub use post::{Post, PostLink, PostPage, PostSummary};
pub use rich_text::{RichTextBlock, TextSpan};
