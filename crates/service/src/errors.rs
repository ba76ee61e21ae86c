use thiserror::Error;

use crate::validation::FieldViolation;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error")]
    Validation(Vec<FieldViolation>),
    #[error("Invalid ID")]
    InvalidId,
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("hash error: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(entity.to_string()) }
    pub fn already_exists(entity: &str) -> Self { Self::AlreadyExists(format!("{entity} already exists")) }
}
