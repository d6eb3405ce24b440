use shared_models::error::AppError;

/// Unwraps a mandatory request field or reports it by name.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or(AppError::MissingField(field))
}
