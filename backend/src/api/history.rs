//! Recent upload receipts, newest first, kept in memory only.

use std::collections::VecDeque;
use std::sync::RwLock;

use super::types::UploadReceipt;

pub struct UploadHistory {
    entries: RwLock<VecDeque<UploadReceipt>>,
    limit: usize,
}

impl UploadHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(limit)),
            limit: limit.max(1),
        }
    }

    pub fn record(&self, receipt: UploadReceipt) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.push_front(receipt);
        entries.truncate(self.limit);
    }

    /// Snapshot, newest first.
    pub fn recent(&self) -> Vec<UploadReceipt> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }
}
