//! URL entity representing a slug to long URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted short URL record.
///
/// Created exactly once per distinct long URL; the slug is immutable after
/// creation and records are never mutated or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub slug: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub slug: String,
    pub long_url: String,
}

/// The view of a URL returned by slug resolution.
///
/// Doubles as the cache entry payload: on the cache-hit path this is
/// reconstructed from cached JSON without a store read, so it carries only
/// the fields the cache holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUrl {
    pub id: i64,
    pub slug: String,
    pub long_url: String,
}

impl From<&UrlRecord> for ResolvedUrl {
    fn from(record: &UrlRecord) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            long_url: record.long_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_resolved_view_from_record() {
        let record = UrlRecord {
            id: 7,
            slug: "a1b2c18".to_string(),
            long_url: "https://example.com".to_string(),
            created_at: Utc::now(),
        };

        let view = ResolvedUrl::from(&record);
        assert_eq!(view.id, 7);
        assert_eq!(view.slug, "a1b2c18");
        assert_eq!(view.long_url, "https://example.com");
    }

    #[test]
    fn test_resolved_url_round_trips_as_json() {
        let view = ResolvedUrl {
            id: 1,
            slug: "a1b2c18".to_string(),
            long_url: "https://example.com".to_string(),
        };

        let value = serde_json::to_value(&view).unwrap();
        let back: ResolvedUrl = serde_json::from_value(value).unwrap();
        assert_eq!(back, view);
    }
}
