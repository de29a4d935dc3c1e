use thiserror::Error;
use tokio::sync::Mutex;

/// Most records any list endpoint returns.
pub const LIST_LIMIT: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{collection} is full ({capacity} records)")]
    Full {
        collection: &'static str,
        capacity: usize,
    },
}

/// Process-local store for one kind of submission, in insertion order.
/// Nothing survives a restart.
pub struct SubmissionRepository<T> {
    collection: &'static str,
    capacity: usize,
    records: Mutex<Vec<T>>,
}

impl<T: Clone> SubmissionRepository<T> {
    pub fn new(collection: &'static str, capacity: usize) -> Self {
        Self {
            collection,
            capacity,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    // Store a record and hand back the stored copy
    pub async fn insert(&self, record: T) -> Result<T, RepositoryError> {
        let mut records = self.records.lock().await;
        if records.len() >= self.capacity {
            return Err(RepositoryError::Full {
                collection: self.collection,
                capacity: self.capacity,
            });
        }
        records.push(record.clone());
        Ok(record)
    }

    // Oldest first, at most `limit`
    pub async fn list(&self, limit: usize) -> Vec<T> {
        let records = self.records.lock().await;
        records.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let repo = SubmissionRepository::new("contact_messages", 10);
        for n in 1..=3 {
            repo.insert(n).await.unwrap();
        }
        assert_eq!(repo.list(LIST_LIMIT).await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn list_respects_limit() {
        let repo = SubmissionRepository::new("registrations", 10);
        for n in 0..5 {
            repo.insert(n).await.unwrap();
        }
        assert_eq!(repo.list(2).await, vec![0, 1]);
    }

    #[tokio::test]
    async fn rejects_inserts_past_capacity() {
        let repo = SubmissionRepository::new("status_checks", 2);
        repo.insert("a").await.unwrap();
        repo.insert("b").await.unwrap();
        assert_eq!(
            repo.insert("c").await,
            Err(RepositoryError::Full {
                collection: "status_checks",
                capacity: 2,
            })
        );
        assert_eq!(repo.list(LIST_LIMIT).await, vec!["a", "b"]);
        assert_eq!(repo.collection(), "status_checks");
    }
}
