use thiserror::Error;

pub type Result<T> = std::result::Result<T, RaffleError>;

#[derive(Error, Debug)]
pub enum RaffleError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid participant name")]
    InvalidName,

    #[error("Duplicate prize '{name}' on row {row}")]
    DuplicatePrize { name: String, row: usize },

    #[error("No winners recorded yet")]
    NoWinners,

    #[error("Unsupported background image: {0}")]
    UnsupportedImage(String),

    #[error("Admin password rejected")]
    Unauthorized,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl RaffleError {
    pub fn spreadsheet(msg: impl Into<String>) -> Self {
        Self::Spreadsheet(msg.into())
    }

    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<calamine::Error> for RaffleError {
    fn from(err: calamine::Error) -> Self {
        RaffleError::Spreadsheet(err.to_string())
    }
}

// prompts in the CLI surface dialoguer errors through `?`
impl From<dialoguer::Error> for RaffleError {
    fn from(err: dialoguer::Error) -> Self {
        RaffleError::Dialog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "cancelled");
        let err: RaffleError = dialoguer::Error::IO(io).into();
        assert!(matches!(err, RaffleError::Dialog(_)));
        assert!(err.to_string().contains("cancelled"));
    }
}
