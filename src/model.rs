//! Feature request entities shared by the API client and the UI store.
//!
//! The JSON shapes mirror the server's `/features` endpoints exactly.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Timestamp layouts the server emits besides RFC 3339 (SQLite `CURRENT_TIMESTAMP`).
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A submitted feature request as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Server-assigned identifier, immutable after creation.
    pub id: i64,
    pub title: String,
    /// `None` when the feature was submitted without a description.
    pub description: Option<String>,
    /// Authoritative vote count; only ever grows from the client's view.
    pub vote_count: u64,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
}

impl Feature {
    /// Parsed creation time, if the server string is in a known layout.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Calendar date of creation for display (`YYYY-MM-DD`).
    ///
    /// Falls back to the raw server string when it cannot be parsed.
    pub fn created_date(&self) -> String {
        match self.created_at_utc() {
            Some(created) => created.format("%Y-%m-%d").to_string(),
            None => self.created_at.clone(),
        }
    }
}

/// Display ordering: most votes first, newest first among equal votes.
///
/// Unparsable timestamps sort after parsable ones within a vote tier.
pub fn display_order(a: &Feature, b: &Feature) -> Ordering {
    b.vote_count
        .cmp(&a.vote_count)
        .then_with(|| b.created_at_utc().cmp(&a.created_at_utc()))
}

/// Stable in-place sort into display order.
pub fn sort_for_display(features: &mut [Feature]) {
    features.sort_by(display_order);
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Local validation failures, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be at most {max} characters")]
    TitleTooLong { max: usize },

    #[error("Description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FeatureCreate {
    /// Builds a validated create request from raw form input.
    ///
    /// Both fields are trimmed; an empty description becomes `None`.
    pub fn new(title: &str, description: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong {
                max: TITLE_MAX_CHARS,
            });
        }

        let description = description.trim();
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX_CHARS,
            });
        }

        Ok(Self {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: i64, votes: u64, created_at: &str) -> Feature {
        Feature {
            id,
            title: format!("Feature {id}"),
            description: None,
            vote_count: votes,
            created_at: created_at.to_string(),
        }
    }

    fn ids(features: &[Feature]) -> Vec<i64> {
        features.iter().map(|f| f.id).collect()
    }

    #[test]
    fn sorts_by_votes_descending() {
        let mut features = vec![
            feature(1, 3, "2024-01-01 10:00:00"),
            feature(2, 5, "2024-01-01 10:00:00"),
            feature(3, 0, "2024-01-01 10:00:00"),
        ];
        sort_for_display(&mut features);
        assert_eq!(ids(&features), vec![2, 1, 3]);
    }

    #[test]
    fn ties_break_newest_first() {
        let mut features = vec![
            feature(1, 2, "2024-01-01 10:00:00"),
            feature(2, 2, "2024-03-01 10:00:00"),
            feature(3, 2, "2024-02-01T10:00:00Z"),
        ];
        sort_for_display(&mut features);
        assert_eq!(ids(&features), vec![2, 3, 1]);
    }

    #[test]
    fn unparsable_timestamps_sort_last_within_tier() {
        let mut features = vec![
            feature(1, 1, "yesterday"),
            feature(2, 1, "2024-01-01 10:00:00"),
            feature(3, 4, "garbage"),
        ];
        sort_for_display(&mut features);
        assert_eq!(ids(&features), vec![3, 2, 1]);
    }

    #[test]
    fn parses_sqlite_and_rfc3339_layouts() {
        let sqlite = feature(1, 0, "2024-05-06 07:08:09");
        let fractional = feature(2, 0, "2024-05-06T07:08:09.123456");
        let rfc = feature(3, 0, "2024-05-06T07:08:09+02:00");
        assert!(sqlite.created_at_utc().is_some());
        assert!(fractional.created_at_utc().is_some());
        assert_eq!(
            rfc.created_at_utc().map(|dt| dt.to_rfc3339()),
            Some("2024-05-06T05:08:09+00:00".to_string())
        );
    }

    #[test]
    fn created_date_falls_back_to_raw_string() {
        assert_eq!(feature(1, 0, "2024-05-06 07:08:09").created_date(), "2024-05-06");
        assert_eq!(feature(1, 0, "someday").created_date(), "someday");
    }

    #[test]
    fn create_trims_and_drops_empty_description() {
        let input = FeatureCreate::new("  Dark mode  ", "   ").unwrap();
        assert_eq!(input.title, "Dark mode");
        assert_eq!(input.description, None);

        let input = FeatureCreate::new("Export", "  as CSV ").unwrap();
        assert_eq!(input.description.as_deref(), Some("as CSV"));
    }

    #[test]
    fn create_rejects_blank_title() {
        let err = FeatureCreate::new(" \t ", "details").unwrap_err();
        assert_eq!(err, ValidationError::TitleRequired);
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn create_enforces_length_limits_in_chars() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(FeatureCreate::new(&title, "").is_ok());

        let long_title = "a".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(
            FeatureCreate::new(&long_title, ""),
            Err(ValidationError::TitleTooLong {
                max: TITLE_MAX_CHARS
            })
        );

        let long_description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(
            FeatureCreate::new("ok", &long_description),
            Err(ValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX_CHARS
            })
        );
    }

    #[test]
    fn create_omits_absent_description_on_the_wire() {
        let body = serde_json::to_value(FeatureCreate::new("Dark mode", "").unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Dark mode" }));
    }

    #[test]
    fn feature_accepts_null_description() {
        let feature: Feature = serde_json::from_str(
            r#"{"id":3,"title":"Dark mode","description":null,"vote_count":0,"created_at":"2024-01-01 00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(feature.description, None);
        assert_eq!(feature.vote_count, 0);
    }
}
