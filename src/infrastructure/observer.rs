//! Change observers

use crate::domain::ports::ChangeObserver;

/// Reports every persisted collection change to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ChangeObserver for LogObserver {
    fn collection_changed(&self, key: &str, len: usize) {
        log::info!("saved '{}' ({} records)", key, len);
    }
}
