use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

use crate::app::Result;

pub const PUBLICATION_DATE: &str = "document.first_publication_date";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    At(String, String),
    DateAfter(String, DateTime<Utc>),
    DateBefore(String, DateTime<Utc>),
}

impl Predicate {
    pub fn document_type(kind: &str) -> Self {
        Predicate::At("document.type".into(), kind.into())
    }

    pub fn uid(kind: &str, uid: &str) -> Self {
        Predicate::At(format!("my.{}.uid", kind), uid.into())
    }

    fn render(&self) -> String {
        match self {
            Predicate::At(path, value) => format!("[at({},\"{}\")]", path, escape(value)),
            Predicate::DateAfter(path, date) => {
                format!("[date.after({},\"{}\")]", path, iso(date))
            }
            Predicate::DateBefore(path, date) => {
                format!("[date.before({},\"{}\")]", path, iso(date))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Ascending,
    Descending,
}

/// A documents search against one ref of the repository.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    predicates: Vec<Predicate>,
    page_size: Option<u32>,
    ordering: Option<(String, Ordering)>,
    fetch: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    pub fn order_by(mut self, field: &str, ordering: Ordering) -> Self {
        self.ordering = Some((field.to_string(), ordering));
        self
    }

    /// Restrict the returned fields.
    pub fn fetch(mut self, fields: &str) -> Self {
        self.fetch = Some(fields.to_string());
        self
    }

    pub fn to_url(&self, endpoint: &str, reference: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/documents/search",
            endpoint.trim_end_matches('/')
        ))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("ref", reference);

            if !self.predicates.is_empty() {
                let q: String = self.predicates.iter().map(Predicate::render).collect();
                query.append_pair("q", &format!("[{}]", q));
            }
            if let Some(size) = self.page_size {
                query.append_pair("pageSize", &size.to_string());
            }
            if let Some((field, ordering)) = &self.ordering {
                let value = match ordering {
                    Ordering::Ascending => format!("[{}]", field),
                    Ordering::Descending => format!("[{} desc]", field),
                };
                query.append_pair("orderings", &value);
            }
            if let Some(fields) = &self.fetch {
                query.append_pair("fetch", fields);
            }
        }

        Ok(url)
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn iso(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
