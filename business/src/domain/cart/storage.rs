use super::model::LineItem;

#[derive(Debug, thiserror::Error)]
pub enum CartStorageError {
    #[error("cart_storage.read")]
    Read,
    #[error("cart_storage.write")]
    Write,
    #[error("cart_storage.malformed")]
    Malformed,
}

/// Whole-value persistence port for the cart: one durable record under a
/// fixed key, fully overwritten on every save, last write wins. Synchronous
/// because the write happens inside the mutating operation, before control
/// is yielded.
pub trait CartStorage: Send + Sync {
    fn load(&self) -> Result<Vec<LineItem>, CartStorageError>;
    fn save(&self, items: &[LineItem]) -> Result<(), CartStorageError>;
}
