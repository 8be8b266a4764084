#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization failure")]
    Serialization(#[from] serde_json::Error),
}
