use std::sync::Arc;

use tracing::{debug, info};

use shared_database::ClinicStore;
use shared_models::error::AppError;
use shared_utils::validation::require;

use crate::models::{AvailabilityFilters, AvailabilitySlot, CreateAvailabilityRequest};

pub struct AvailabilityService {
    store: Arc<ClinicStore>,
}

impl AvailabilityService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub async fn list_availability(&self, filters: &AvailabilityFilters) -> Vec<AvailabilitySlot> {
        let data = self.store.read().await;
        data.availability
            .iter()
            .filter(|slot| filters.matches(slot))
            .cloned()
            .collect()
    }

    /// Create an availability window for a doctor.
    ///
    /// Neither the doctor's existence nor `start_time < end_time` is checked; a
    /// reversed window simply never contains a booking.
    pub async fn create_availability(
        &self,
        request: CreateAvailabilityRequest,
    ) -> Result<AvailabilitySlot, AppError> {
        let doctor_id = require(request.doctor_id, "doctor_id")?;
        let date = require(request.date, "date")?;
        let start_time = require(request.start_time, "start_time")?;
        let end_time = require(request.end_time, "end_time")?;

        debug!(
            "Creating availability for doctor {} on {} {}-{}",
            doctor_id, date, start_time, end_time
        );

        let mut data = self.store.write().await;
        let slot = data.availability.insert_with(|id| AvailabilitySlot {
            id,
            doctor_id,
            date,
            start_time,
            end_time,
        });

        info!("Availability created with ID: {}", slot.id);
        Ok(slot)
    }

    pub async fn delete_availability(&self, slot_id: u64) -> bool {
        let removed = self.store.write().await.availability.remove(slot_id).is_some();
        debug!("Delete availability {}: removed={}", slot_id, removed);
        removed
    }
}
