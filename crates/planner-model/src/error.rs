use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
