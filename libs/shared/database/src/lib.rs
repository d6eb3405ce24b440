pub mod id;
pub mod store;

pub use id::next_id;
pub use store::{ClinicData, ClinicStore, Collection};
