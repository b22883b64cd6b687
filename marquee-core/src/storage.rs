use crate::error::StorageError;

/// Durable string-keyed storage for opaque serialized values.
///
/// Reading a key that was never written yields `Ok(None)`. Writes replace the
/// whole value. Backends provide no transactions across a get/set pair.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
