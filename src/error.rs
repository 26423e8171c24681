use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordFreqError {
    /// The corpus URL, or the server behind it, does not claim plain text.
    #[error(
        "refusing corpus {url}: expected text/plain, URL suggests {guessed} and server sent {reported}"
    )]
    Security {
        url: String,
        guessed: String,
        reported: String,
    },

    #[error("could not fetch {url}: {message}")]
    Transport { url: String, message: String },

    #[error("file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
