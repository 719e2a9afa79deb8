//! ChangeObserver port
//!
//! Notified after a collection has been persisted, e.g. to refresh a
//! dashboard.

pub trait ChangeObserver {
    fn collection_changed(&self, key: &str, len: usize);
}
