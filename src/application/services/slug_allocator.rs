//! Unique slug allocation from the sequence counter.

use std::sync::Arc;

use crate::domain::repositories::SequenceRepository;
use crate::error::AppError;
use crate::utils::base62;

/// Allocates globally unique slugs.
///
/// Composes the sequence counter with the base62 encoder: every allocation
/// reserves the next counter value under the store's row lock and encodes it.
/// Because the counter strictly increases, two allocations never encode the
/// same value (the checksum caveat in [`base62::encode`] notwithstanding).
pub struct SlugAllocator<S: SequenceRepository> {
    sequence_repository: Arc<S>,
}

impl<S: SequenceRepository> SlugAllocator<S> {
    /// Creates a new allocator.
    pub fn new(sequence_repository: Arc<S>) -> Self {
        Self {
            sequence_repository,
        }
    }

    /// Reserves the next counter value and returns its encoded slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the counter cannot be read or written
    /// (the counter is left unchanged), or [`AppError::Validation`] if the
    /// counter has exhausted the encodable range.
    pub async fn allocate(&self) -> Result<String, AppError> {
        let next = self.sequence_repository.next_value().await?;
        base62::encode(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSequenceRepository;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[tokio::test]
    async fn test_allocate_from_fresh_counter() {
        let mut mock_seq = MockSequenceRepository::new();
        mock_seq.expect_next_value().times(1).returning(|| Ok(1));

        let allocator = SlugAllocator::new(Arc::new(mock_seq));

        // Counter starting at 0 hands out 1, which encodes to "a1b2c18".
        assert_eq!(allocator.allocate().await.unwrap(), "a1b2c18");
    }

    #[tokio::test]
    async fn test_sequential_allocations_are_distinct() {
        let mut mock_seq = MockSequenceRepository::new();
        let counter = AtomicI64::new(0);
        mock_seq
            .expect_next_value()
            .times(50)
            .returning(move || Ok(counter.fetch_add(1, Ordering::SeqCst) + 1));

        let allocator = SlugAllocator::new(Arc::new(mock_seq));

        let mut slugs = HashSet::new();
        for n in 1..=50 {
            let slug = allocator.allocate().await.unwrap();
            assert_eq!(slug, crate::utils::base62::encode(n).unwrap());
            assert!(slugs.insert(slug));
        }
        assert_eq!(slugs.len(), 50);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut mock_seq = MockSequenceRepository::new();
        mock_seq
            .expect_next_value()
            .times(1)
            .returning(|| Err(AppError::store("Database error", json!({}))));

        let allocator = SlugAllocator::new(Arc::new(mock_seq));

        assert!(matches!(
            allocator.allocate().await,
            Err(AppError::Store { .. })
        ));
    }

    #[tokio::test]
    async fn test_exhausted_counter_is_validation_error() {
        let mut mock_seq = MockSequenceRepository::new();
        mock_seq
            .expect_next_value()
            .times(1)
            .returning(|| Ok(62_i64.pow(6)));

        let allocator = SlugAllocator::new(Arc::new(mock_seq));

        assert!(matches!(
            allocator.allocate().await,
            Err(AppError::Validation { .. })
        ));
    }
}
