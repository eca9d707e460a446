use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillviewError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Failed to load page: {0}")]
    FailedToLoadPage(String),

    #[error("SkillviewError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SkillviewError {
    fn from(error: std::io::Error) -> Self {
        SkillviewError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for SkillviewError {
    fn from(error: reqwest::Error) -> Self {
        SkillviewError::Reqwest(Box::new(error))
    }
}
