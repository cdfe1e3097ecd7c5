//! Embed snippet for the utterances comment widget, which threads comments
//! for each post into GitHub issues of a configured repository.

use html_escape::encode_double_quoted_attribute;
use serde::Deserialize;

pub const CLIENT_SCRIPT: &str = "https://utteranc.es/client.js";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// `owner/name` of the repository holding the comment issues.
    pub repo: Option<String>,
    pub issue_term: String,
    pub theme: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            repo: None,
            issue_term: "pathname".to_string(),
            theme: "github-dark".to_string(),
        }
    }
}

pub struct CommentsWidget<'a> {
    config: &'a CommentsConfig,
}

impl<'a> CommentsWidget<'a> {
    pub fn new(config: &'a CommentsConfig) -> Self {
        Self { config }
    }

    /// The `<script>` element to place where comments should appear, or
    /// `None` when no repository is configured.
    pub fn embed_html(&self) -> Option<String> {
        let repo = self.config.repo.as_deref().filter(|r| !r.trim().is_empty())?;

        Some(format!(
            r#"<script src="{}" repo="{}" issue-term="{}" theme="{}" crossorigin="anonymous" async></script>"#,
            CLIENT_SCRIPT,
            encode_double_quoted_attribute(repo.trim()),
            encode_double_quoted_attribute(&self.config.issue_term),
            encode_double_quoted_attribute(&self.config.theme),
        ))
    }
}
