//! The loaded farm: every collection plus settings and session, sharing one
//! store and one clock.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use super::account::{SessionManager, SettingsManager};
use super::record_manager::RecordManager;
use crate::domain::entities::{Animal, CalendarEvent, DiaryEntry, Field, Greenhouse};
use crate::domain::ports::{ChangeObserver, Clock, KeyValueStore};
use crate::error::FarmResult;

pub struct FarmState<S: KeyValueStore> {
    pub fields: RecordManager<Field, S>,
    pub animals: RecordManager<Animal, S>,
    pub greenhouses: RecordManager<Greenhouse, S>,
    pub diary: RecordManager<DiaryEntry, S>,
    pub events: RecordManager<CalendarEvent, S>,
    pub settings: SettingsManager<S>,
    pub session: SessionManager<S>,
    clock: Arc<dyn Clock>,
}

impl<S: KeyValueStore> FarmState<S> {
    pub fn load(
        store: Arc<S>,
        clock: Arc<dyn Clock>,
        observer: Option<Arc<dyn ChangeObserver>>,
    ) -> FarmResult<Self> {
        Ok(Self {
            fields: RecordManager::load(Arc::clone(&store), Arc::clone(&clock))?
                .with_observer(observer.clone()),
            animals: RecordManager::load(Arc::clone(&store), Arc::clone(&clock))?
                .with_observer(observer.clone()),
            greenhouses: RecordManager::load(Arc::clone(&store), Arc::clone(&clock))?
                .with_observer(observer.clone()),
            diary: RecordManager::load(Arc::clone(&store), Arc::clone(&clock))?
                .with_observer(observer.clone()),
            events: RecordManager::load(Arc::clone(&store), Arc::clone(&clock))?
                .with_observer(observer),
            settings: SettingsManager::load(Arc::clone(&store))?,
            session: SessionManager::load(store)?,
            clock,
        })
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
