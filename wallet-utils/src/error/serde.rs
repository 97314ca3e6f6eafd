#[derive(Debug, thiserror::Error)]
pub enum SerdeError {
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SerdeError {
    pub fn get_status_code(&self) -> u32 {
        match self {
            SerdeError::Json(_) => 6061,
            SerdeError::Yaml(_) => 6062,
        }
    }
}
