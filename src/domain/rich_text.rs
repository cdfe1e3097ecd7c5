use serde::{Deserialize, Serialize};

/// A run of text inside a block body. May carry inline markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
}

impl TextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A titled section of a post body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextBlock {
    pub heading: String,
    pub body: Vec<TextSpan>,
}

impl RichTextBlock {
    pub fn new(heading: impl Into<String>, body: Vec<TextSpan>) -> Self {
        Self {
            heading: heading.into(),
            body,
        }
    }
}
