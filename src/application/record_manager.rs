//! Generic CRUD over one record collection.
//!
//! The whole collection lives in memory and is written back to the store
//! after every change.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::domain::entities::Record;
use crate::domain::ports::{ChangeObserver, Clock, KeyValueStore};
use crate::domain::value_objects::RecordId;
use crate::error::{FarmError, FarmResult};

pub struct RecordManager<R: Record, S: KeyValueStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    observer: Option<Arc<dyn ChangeObserver>>,
    records: Vec<R>,
}

impl<R: Record, S: KeyValueStore> RecordManager<R, S> {
    /// Read the collection under `R::KEY`.
    ///
    /// A missing key or a collection that does not parse yields an empty
    /// manager. Errors reaching the store itself are returned.
    pub fn load(store: Arc<S>, clock: Arc<dyn Clock>) -> FarmResult<Self> {
        let records = read_collection::<R>(store.get(R::KEY)?);
        Ok(Self {
            store,
            clock,
            observer: None,
            records,
        })
    }

    pub fn with_observer(mut self, observer: Option<Arc<dyn ChangeObserver>>) -> Self {
        self.observer = observer;
        self
    }

    pub fn save(&self) -> FarmResult<()> {
        let value = serde_json::to_value(&self.records).map_err(|e| {
            crate::domain::ports::StoreError::SerializationError {
                message: e.to_string(),
            }
        })?;
        self.store.put(R::KEY, value)?;
        log::debug!("saved {} {} record(s)", self.records.len(), R::KIND);
        if let Some(observer) = &self.observer {
            observer.collection_changed(R::KEY, self.records.len());
        }
        Ok(())
    }

    /// Validate and append `record`, then persist.
    pub fn create(&mut self, record: R) -> FarmResult<&R> {
        record.validate()?;
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        log::info!("created {} '{}'", R::KIND, self.records[self.records.len() - 1].id());
        Ok(&self.records[self.records.len() - 1])
    }

    /// Apply `f` to the record with `id`. The change is kept only if the
    /// result still validates and was persisted.
    pub fn update<T>(&mut self, id: &RecordId, f: impl FnOnce(&mut R) -> T) -> FarmResult<T> {
        let index = self.position(id)?;
        let mut updated = self.records[index].clone();
        let out = f(&mut updated);
        updated.validate()?;
        updated.touch(self.clock.now());

        let previous = std::mem::replace(&mut self.records[index], updated);
        if let Err(e) = self.save() {
            self.records[index] = previous;
            return Err(e);
        }
        Ok(out)
    }

    /// Remove the record with `id`. Unknown ids leave the collection and the
    /// store untouched.
    pub fn delete(&mut self, id: &RecordId) -> FarmResult<Option<R>> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            log::debug!("no {} '{}' to delete", R::KIND, id);
            return Ok(None);
        };
        let removed = self.records.remove(index);
        if let Err(e) = self.save() {
            self.records.insert(index, removed);
            return Err(e);
        }
        log::info!("deleted {} '{}'", R::KIND, id);
        Ok(Some(removed))
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Like `get`, but a missing record is an error.
    pub fn require(&self, id: &RecordId) -> FarmResult<&R> {
        self.get(id).ok_or_else(|| not_found::<R>(id))
    }

    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn position(&self, id: &RecordId) -> FarmResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found::<R>(id))
    }
}

fn not_found<R: Record>(id: &RecordId) -> FarmError {
    FarmError::NotFound {
        kind: R::KIND,
        id: id.to_string(),
    }
}

fn read_collection<R: Record>(value: Option<Value>) -> Vec<R> {
    let Some(value) = value else {
        return Vec::new();
    };
    match serde_json::from_value(value) {
        Ok(records) => records,
        Err(e) => {
            log::warn!(
                "could not read stored {} records, starting empty: {}",
                R::KIND,
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Field;
    use crate::domain::value_objects::Crop;
    use crate::infrastructure::{MemoryStore, SystemClock};
    use serde_json::json;
    use std::sync::Mutex;

    fn manager(store: &Arc<MemoryStore>) -> RecordManager<Field, MemoryStore> {
        RecordManager::load(Arc::clone(store), Arc::new(SystemClock)).unwrap()
    }

    fn field(name: &str) -> Field {
        Field::new(name, 5.0, Crop::Wheat, Utc::now())
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        assert!(manager(&store).is_empty());
    }

    #[test]
    fn unparsable_collection_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store.put("fields", json!({"not": "a list"})).unwrap();
        assert!(manager(&store).is_empty());
    }

    #[test]
    fn create_persists_and_reloads() {
        let store = Arc::new(MemoryStore::new());
        let mut fields = manager(&store);
        let id = fields.create(field("North")).unwrap().id.clone();

        let reloaded = manager(&store);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(&id).unwrap().name, "North");
    }

    #[test]
    fn invalid_record_is_not_written() {
        let store = Arc::new(MemoryStore::new());
        let mut fields = manager(&store);
        let err = fields.create(field("")).unwrap_err();
        assert!(err.is_validation());
        assert!(fields.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn delete_unknown_id_does_not_write() {
        let store = Arc::new(MemoryStore::new());
        let mut fields = manager(&store);
        fields.create(field("North")).unwrap();
        let writes = store.writes();

        let removed = fields.delete(&RecordId::from("nope")).unwrap();
        assert!(removed.is_none());
        assert_eq!(fields.len(), 1);
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let store = Arc::new(MemoryStore::new());
        let mut fields = manager(&store);
        let a = fields.create(field("A")).unwrap().id.clone();
        fields.create(field("B")).unwrap();

        let removed = fields.delete(&a).unwrap().unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(fields.len(), 1);
        assert!(fields.get(&a).is_none());
    }

    #[test]
    fn update_rejects_invalid_change() {
        let store = Arc::new(MemoryStore::new());
        let mut fields = manager(&store);
        let id = fields.create(field("North")).unwrap().id.clone();

        let err = fields.update(&id, |f| f.area = -1.0).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(fields.get(&id).unwrap().area, 5.0);

        fields.update(&id, |f| f.area = 7.5).unwrap();
        assert_eq!(manager(&store).get(&id).unwrap().area, 7.5);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let mut fields = manager(&store);
        let err = fields.update(&RecordId::from("x"), |_| ()).unwrap_err();
        assert!(matches!(err, FarmError::NotFound { kind: "field", .. }));
    }

    struct Recorder(Mutex<Vec<(String, usize)>>);

    impl ChangeObserver for Recorder {
        fn collection_changed(&self, key: &str, len: usize) {
            self.0.lock().unwrap().push((key.to_string(), len));
        }
    }

    #[test]
    fn observer_sees_each_save() {
        let store = Arc::new(MemoryStore::new());
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let observer: Arc<dyn ChangeObserver> = recorder.clone();
        let mut fields = manager(&store).with_observer(Some(observer));

        let id = fields.create(field("North")).unwrap().id.clone();
        fields.delete(&id).unwrap();

        let seen = recorder.0.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![("fields".to_string(), 1), ("fields".to_string(), 0)]
        );
    }
}
