/// Store errors for the domain layer.
///
/// The cart store and catalog are in-memory, so these only surface when a
/// lock is poisoned or an insert collides with an existing key.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.persistence")]
    Persistence,
}
