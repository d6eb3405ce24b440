pub mod clinic;
pub mod error;
pub mod time;

pub use clinic::*;
pub use error::AppError;
