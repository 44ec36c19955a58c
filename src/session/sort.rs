//! Local Sort Engine
//!
//! Re-orders the already-fetched result page in memory. Never contacts the
//! network, never changes totals; only the order of the held `Vec` moves.
//! The underlying `sort_by` is stable, so equal keys keep their relative
//! order and repeated re-sorts cause no visual jitter.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::client::types::Publication;

/// Field the current page can be re-ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Relevance,
    PublishedDate,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A chosen ordering for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Server relevance ranking, which is how results arrive.
    pub fn server_default() -> Self {
        Self {
            field: SortField::Relevance,
            direction: SortDirection::Desc,
        }
    }

    pub fn is_server_default(&self) -> bool {
        *self == Self::server_default()
    }

    /// Stable in-place sort of the held page.
    pub fn apply(&self, results: &mut [Publication]) {
        results.sort_by(|a, b| {
            let ascending = match self.field {
                SortField::Relevance => a.score.total_cmp(&b.score),
                SortField::PublishedDate => {
                    published_timestamp(&a.published_date)
                        .cmp(&published_timestamp(&b.published_date))
                }
                SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            };
            match self.direction {
                SortDirection::Asc => ascending,
                // Negate the comparator, never re-derive keys.
                SortDirection::Desc => ascending.reverse(),
            }
        });
    }
}

/// Parses a crawled publication date into a Unix timestamp for comparison.
///
/// The crawler emits whatever the source page had: RFC 3339 `datetime`
/// attributes, plain ISO dates, or textual forms like "17 May 2023". Anything
/// unparsable (including the empty string) compares as the epoch so the order
/// stays deterministic.
pub(crate) fn published_timestamp(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.timestamp();
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d %b %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return midnight_timestamp(date);
        }
    }

    // "May 2023" and bare-year fallbacks, both common on listing pages.
    for format in ["%B %Y", "%b %Y"] {
        let padded = format!("1 {}", trimmed);
        if let Ok(date) = NaiveDate::parse_from_str(&padded, &format!("%d {}", format)) {
            return midnight_timestamp(date);
        }
    }
    if let Ok(year) = trimmed.parse::<i32>() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
            return midnight_timestamp(date);
        }
    }

    0
}

fn midnight_timestamp(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}
