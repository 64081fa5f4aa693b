#[derive(Debug, thiserror::Error)]
pub enum SerdeError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("deserialize error: {0}")]
    Deserialize(String),
}
