/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.serialization")]
    Serialization,
    #[error("repository.corrupted")]
    Corrupted,
    #[error("repository.unavailable")]
    Unavailable,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn serialization() -> Self {
        RepositoryError::Serialization
    }
    pub fn corrupted() -> Self {
        RepositoryError::Corrupted
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }

    /// Whether the in-memory cart may carry on after this failure.
    ///
    /// Only corrupted storage is treated as an unexpected backend fault.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RepositoryError::Corrupted)
    }
}
