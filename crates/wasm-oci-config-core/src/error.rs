use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run {bin}: {source}. Is it installed? (cargo install wasm-tools)")]
    RendererUnavailable {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{bin} component wit failed ({status}):\n{stderr}")]
    RendererFailed {
        bin: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("WIT output is not valid UTF-8: {0}")]
    RendererOutput(#[from] std::string::FromUtf8Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
