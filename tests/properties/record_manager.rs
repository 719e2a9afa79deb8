//! Property tests for record collections.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use farmbook::domain::value_objects::Crop;
use farmbook::infrastructure::{FixedClock, MemoryStore};
use farmbook::{Field, RecordId, RecordManager};

fn seeded(names: &[String]) -> (Arc<MemoryStore>, RecordManager<Field, MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
    let clock = Arc::new(FixedClock::new(now.date_naive()));
    let mut fields = RecordManager::load(Arc::clone(&store), clock).unwrap();
    for name in names {
        fields.create(Field::new(name.as_str(), 1.5, Crop::Wheat, now)).unwrap();
    }
    (store, fields)
}

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z][A-Za-z ]{0,11}", 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: generated ids are unique within a collection.
    #[test]
    fn property_ids_are_unique(names in names()) {
        let (_store, fields) = seeded(&names);
        let ids: HashSet<&RecordId> = fields.all().iter().map(|f| &f.id).collect();
        prop_assert_eq!(ids.len(), names.len());
    }

    /// PROPERTY: deleting an existing id removes exactly that record and keeps the order of the rest.
    #[test]
    fn property_delete_removes_exactly_one(
        (names, index) in names().prop_flat_map(|n| { let len = n.len(); (Just(n), 0..len) })
    ) {
        let (store, mut fields) = seeded(&names);
        let before: Vec<RecordId> = fields.all().iter().map(|f| f.id.clone()).collect();
        let target = before[index].clone();

        let removed = fields.delete(&target).unwrap();
        prop_assert_eq!(removed.map(|f| f.id), Some(target.clone()));

        let expected: Vec<RecordId> = before.into_iter().filter(|id| *id != target).collect();
        let after: Vec<RecordId> = fields.all().iter().map(|f| f.id.clone()).collect();
        prop_assert_eq!(&after, &expected);

        let clock = Arc::new(FixedClock::new(fields.today()));
        let reloaded: RecordManager<Field, MemoryStore> = RecordManager::load(store, clock).unwrap();
        prop_assert_eq!(reloaded.len(), expected.len());
    }

    /// PROPERTY: deleting an unknown id changes nothing and writes nothing.
    #[test]
    fn property_unknown_delete_is_a_no_op(names in names()) {
        let (store, mut fields) = seeded(&names);
        let writes = store.writes();

        let removed = fields.delete(&RecordId::from("no-such-id")).unwrap();
        prop_assert!(removed.is_none());
        prop_assert_eq!(fields.len(), names.len());
        prop_assert_eq!(store.writes(), writes);
    }
}
