//! Visit entity representing a single resolved redirect.

use chrono::{DateTime, Utc};

/// A visit recorded when a slug is resolved (cache hit or miss).
///
/// Append-only; never mutated after insertion.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Visit {
    pub id: i64,
    pub url_id: i64,
    pub visited_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_visit_construction() {
        let now = Utc::now();
        let visit = Visit {
            id: 1,
            url_id: 42,
            visited_at: now,
        };

        assert_eq!(visit.url_id, 42);
        assert_eq!(visit.visited_at, now);
    }
}
