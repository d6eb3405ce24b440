use std::sync::Arc;

use tracing::{debug, info};

use shared_database::ClinicStore;
use shared_models::error::AppError;
use shared_utils::validation::require;

use crate::models::{CreateDoctorRequest, Doctor};

pub struct DoctorService {
    store: Arc<ClinicStore>,
}

impl DoctorService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.store.read().await.doctors.to_vec()
    }

    /// Create a new doctor profile
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, AppError> {
        let name = require(request.name, "name")?;
        let specialization = require(request.specialization, "specialization")?;
        let phone = request.phone.unwrap_or_default();

        debug!("Creating new doctor profile for: {}", name);

        let mut data = self.store.write().await;
        let doctor = data.doctors.insert_with(|id| Doctor {
            id,
            name,
            specialization,
            phone,
        });

        info!("Doctor created with ID: {}", doctor.id);
        Ok(doctor)
    }

    /// Removes the doctor if present. Slots and appointments that reference it are kept.
    pub async fn delete_doctor(&self, doctor_id: u64) -> bool {
        let removed = self.store.write().await.doctors.remove(doctor_id).is_some();
        debug!("Delete doctor {}: removed={}", doctor_id, removed);
        removed
    }
}
