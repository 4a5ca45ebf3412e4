use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("{function}: missing or invalid input `{field}`")]
    BadInput {
        function: String,
        field: &'static str,
    },
}
