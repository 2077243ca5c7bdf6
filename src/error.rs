//! Error type shared by the graph core and its I/O collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A base outside {A, C, G, T} was found while complementing a read.
    #[error("invalid nucleotide '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Reads or k-mer length rejected before graph construction.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
