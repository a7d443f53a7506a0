use std::path::PathBuf;

/// Errors from starting or stopping a presence transport.
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("failed to spawn presence worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("presence client already started")]
    AlreadyStarted,
}

/// Errors from loading or saving the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
