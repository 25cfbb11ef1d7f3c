#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_count")]
    InvalidCount(i64),
    #[error("cart.count_overflow")]
    CountOverflow,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;

    #[test]
    fn should_display_inner_repository_code() {
        assert_eq!(
            CartError::from(RepositoryError::Corrupted).to_string(),
            "repository.corrupted"
        );
        assert_eq!(
            CartError::from(RepositoryError::Unavailable).to_string(),
            "repository.unavailable"
        );
    }
}
