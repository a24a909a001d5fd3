#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Internal error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
