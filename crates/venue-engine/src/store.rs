//! Narrow record-store interface.
//!
//! The scheduling engine never touches storage; the planner talks to records
//! only through [`RecordStore`], so an in-memory store is enough for tests and
//! durable backends can be swapped in by the host application.

use crate::error::RecordError;

/// Anything with a stable, unique string id.
pub trait Record {
    fn id(&self) -> &str;
}

pub trait RecordStore<T: Record> {
    /// All records in insertion order.
    fn list(&self) -> Vec<&T>;

    /// # Errors
    /// `RecordError::DuplicateId` if a record with the same id already exists.
    fn add(&mut self, record: T) -> Result<(), RecordError>;

    fn remove(&mut self, id: &str) -> Option<T>;

    fn find_by_id(&self, id: &str) -> Option<&T>;

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T>;
}

/// `Vec`-backed store preserving insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    fn list(&self) -> Vec<&T> {
        self.records.iter().collect()
    }

    fn add(&mut self, record: T) -> Result<(), RecordError> {
        if self.find_by_id(record.id()).is_some() {
            return Err(RecordError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    fn find_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }
}
