use std::collections::VecDeque;
use std::sync::RwLock;

use thiserror::Error;
use uuid::Uuid;

use super::types::{ScreeningRecord, ScreeningReport};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LogError {
    #[error("Internal lock failed")]
    LockFailed,
}

/// A completed screening as kept by the log.
#[derive(Debug, Clone)]
pub struct StoredScreening {
    pub record: ScreeningRecord,
    pub report: ScreeningReport,
}

/// Bounded in-memory log of completed screenings, newest last.
/// Lives for the process only; the oldest entry is evicted at capacity.
pub struct ScreeningLog {
    capacity: usize,
    entries: RwLock<VecDeque<StoredScreening>>,
}

impl ScreeningLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn record(&self, screening: StoredScreening) -> Result<(), LogError> {
        let mut entries = self.entries.write().map_err(|_| LogError::LockFailed)?;
        while entries.len() >= self.capacity {
            if let Some(evicted) = entries.pop_front() {
                tracing::debug!(id = %evicted.record.id, "Screening log full, evicting oldest");
            }
        }
        entries.push_back(screening);
        Ok(())
    }

    pub fn get(&self, id: &Uuid) -> Result<Option<ScreeningReport>, LogError> {
        let entries = self.entries.read().map_err(|_| LogError::LockFailed)?;
        Ok(entries
            .iter()
            .find(|s| s.record.id == *id)
            .map(|s| s.report.clone()))
    }

    /// Most recent first.
    pub fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, LogError> {
        let entries = self.entries.read().map_err(|_| LogError::LockFailed)?;
        Ok(entries
            .iter()
            .rev()
            .take(limit)
            .map(|s| s.record.clone())
            .collect())
    }

    pub fn len(&self) -> Result<usize, LogError> {
        let entries = self.entries.read().map_err(|_| LogError::LockFailed)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, LogError> {
        Ok(self.len()? == 0)
    }
}
