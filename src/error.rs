use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerenaError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("audit log write failed for {path}: {source}")]
    AuditWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown command '{0}', type 'help' for the list")]
    UnknownCommand(String),

    #[error("command '{command}' needs an argument: {usage}")]
    MissingArgument { command: String, usage: &'static str },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SerenaError> = std::result::Result<T, E>;
