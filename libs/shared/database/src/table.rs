use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

/// A row that can live in a [`Table`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("{table}: record with id {id} already exists")]
    DuplicateId { table: &'static str, id: String },
}

/// Insertion-ordered in-memory table. Cloning the handle shares the rows.
///
/// Every operation takes the lock once and holds it until it returns, so a
/// request never observes a half-applied mutation from another request.
#[derive(Debug)]
pub struct Table<T> {
    name: &'static str,
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Record> Table<T> {
    pub fn new(name: &'static str) -> Self {
        Self::with_rows(name, Vec::new())
    }

    pub fn with_rows(name: &'static str, rows: Vec<T>) -> Self {
        debug!("Initializing table {} with {} rows", name, rows.len());
        Self {
            name,
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<T> {
        self.rows.read().await.iter().find(|row| row.id() == id).cloned()
    }

    pub async fn insert(&self, record: T) -> Result<T, TableError> {
        let mut rows = self.rows.write().await;

        if rows.iter().any(|row| row.id() == record.id()) {
            return Err(TableError::DuplicateId {
                table: self.name,
                id: record.id().to_string(),
            });
        }

        rows.push(record.clone());
        debug!("{}: inserted {}", self.name, record.id());
        Ok(record)
    }

    /// Applies `apply` to a copy of the record and stores the copy only if
    /// `apply` succeeds. Returns `Ok(None)` when no record has `id`.
    pub async fn update<F, E>(&self, id: &str, apply: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let mut rows = self.rows.write().await;

        let Some(slot) = rows.iter_mut().find(|row| row.id() == id) else {
            return Ok(None);
        };

        let mut updated = slot.clone();
        apply(&mut updated)?;
        *slot = updated.clone();

        debug!("{}: updated {}", self.name, id);
        Ok(Some(updated))
    }

    pub async fn remove(&self, id: &str) -> Option<T> {
        let mut rows = self.rows.write().await;
        let index = rows.iter().position(|row| row.id() == id)?;
        debug!("{}: removed {}", self.name, id);
        Some(rows.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}
