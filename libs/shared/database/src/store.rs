use std::collections::BTreeMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use shared_models::{Appointment, AvailabilitySlot, Doctor, Record, Room};

use crate::id::next_id;

/// Id-keyed records of one kind. Iteration is in ascending id order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: BTreeMap<u64, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Record + Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> u64 {
        next_id(self.records.values())
    }

    /// Allocates the next id, builds the record with it and stores it.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let id = self.next_id();
        let record = build(id);
        debug_assert_eq!(record.id(), id);
        self.records.insert(id, record.clone());
        record
    }

    /// Removes the record if present. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) -> Option<T> {
        self.records.remove(&id)
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + Clone {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }
}

#[derive(Debug, Default)]
pub struct ClinicData {
    pub doctors: Collection<Doctor>,
    pub rooms: Collection<Room>,
    pub availability: Collection<AvailabilitySlot>,
    pub appointments: Collection<Appointment>,
}

/// In-memory store for every clinic collection.
///
/// A single lock guards all four collections. Anything that reads one collection and
/// then writes another (booking reads availability, writes appointments) must do both
/// under one `write()` guard.
#[derive(Debug, Default)]
pub struct ClinicStore {
    data: RwLock<ClinicData>,
}

impl ClinicStore {
    pub fn new() -> Self {
        debug!("Initialising in-memory clinic store");
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ClinicData> {
        self.data.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ClinicData> {
        self.data.write().await
    }
}
