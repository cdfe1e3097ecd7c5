//! Wire shapes of the content API. Every field the site reads is optional
//! here; the strict shapes live in [`crate::domain`].

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RawPage {
    pub results: Vec<RawDocument>,
    #[serde(default, alias = "nextPage")]
    pub next_page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: Option<RawData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawData {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub subtitle: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub banner: Option<RawBanner>,
    #[serde(default)]
    pub content: Option<Vec<RawContent>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawBanner {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawContent {
    #[serde(default)]
    pub heading: Option<Value>,
    #[serde(default)]
    pub body: Option<Vec<RawSpan>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSpan {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawApi {
    #[serde(default)]
    pub refs: Vec<RawRef>,
}

#[derive(Debug, Deserialize)]
pub struct RawRef {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default, rename = "isMasterRef")]
    pub is_master_ref: bool,
}

/// Key-text fields arrive as plain strings; older documents use a
/// rich-text array of `{ "text": .. }` objects instead.
pub fn text_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|p| p.get("text").and_then(Value::as_str))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}
