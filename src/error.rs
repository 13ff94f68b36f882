use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {origin}: {source}")]
    ParseConfig {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Text contains a NUL character at position {position}, which is reserved as the traversal sentinel")]
    InteriorNul { position: usize },

    #[error("Unexpected argument '{arg}', usage: <demo> [config.toml]")]
    UnexpectedArgument { arg: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;
