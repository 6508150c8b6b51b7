use thiserror::Error;

/// Import failures surfaced to the caller.
///
/// Semantic problems (unrecognized headers, unparseable dates, non-numeric
/// counts) are not errors; they are accepted leniently per the field rules.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("nothing to import: pasted text is empty")]
    EmptyInput,
    #[error("{message}")]
    Structural { message: String },
}

impl ImportError {
    pub fn structural(message: impl Into<String>) -> Self {
        ImportError::Structural {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
