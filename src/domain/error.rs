use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("not found: {entity} with name={name}")]
    NotFound { entity: &'static str, name: String },

    #[error("database error: {0}")]
    Database(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
