//! The single error type shared by every stage of the encoder.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// The tree builder was handed a forest with no nodes in it.
    #[error("cannot build a Huffman tree from an empty forest")]
    EmptyForest,

    #[error("forest index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// An input byte has no path in the code table it is being packed with.
    #[error("byte {0} has no code in the encoding table")]
    MissingCode(u8),

    #[error("invalid bit symbol {0:?}, expected '0' or '1'")]
    InvalidBitSymbol(char),

    /// Only one distinct byte is present and the single-symbol policy rejects it.
    #[error("input contains a single distinct byte ({0}), which has no Huffman code")]
    SingleSymbol(u8),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HuffmanError {
    fn from(err: serde_json::Error) -> Self {
        HuffmanError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
