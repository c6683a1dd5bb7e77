use thiserror::Error;

pub type PulseResult<T> = Result<T, PulseError>;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data directory error: {0}")]
    DataDir(String),

    #[error("Failed to load table '{table}': {source}")]
    TableLoad {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write table '{table}': {source}")]
    TableWrite {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PulseError {
    pub fn table_load(table: &str, source: csv::Error) -> Self {
        Self::TableLoad {
            table: table.to_string(),
            source,
        }
    }

    pub fn table_write(table: &str, source: csv::Error) -> Self {
        Self::TableWrite {
            table: table.to_string(),
            source,
        }
    }
}
