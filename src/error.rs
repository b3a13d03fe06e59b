use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimeTravelError>;

#[derive(Error, Debug)]
pub enum TimeTravelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    #[error("Date {date} is outside of year {year}")]
    OutsideYear { date: String, year: i32 },
    #[error("No dates selected")]
    NoSelection,
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<arboard::Error> for TimeTravelError {
    fn from(err: arboard::Error) -> Self {
        TimeTravelError::Clipboard(err.to_string())
    }
}
