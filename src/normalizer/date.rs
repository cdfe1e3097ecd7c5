use chrono::{DateTime, Datelike, Utc};

const MONTHS_PT_BR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Parse a publication timestamp. The API emits `2021-03-15T19:25:28+0000`,
/// which is not RFC 3339, so both forms are accepted.
pub fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// `15 Mar 2021`, with Brazilian Portuguese month abbreviations.
/// Unpublished posts render as an empty string.
pub fn format_publication_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(dt) => format!(
            "{:02} {} {}",
            dt.day(),
            MONTHS_PT_BR[dt.month0() as usize],
            dt.year()
        ),
        None => String::new(),
    }
}
