#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("card.name_empty")]
    NameEmpty,
    #[error("card.negative_price")]
    NegativePrice,
    #[error("card.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
