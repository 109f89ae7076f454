use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("witness stack has {len} element(s), at least 2 are needed to look for an annex")]
    InsufficientElements { len: usize },

    #[error("witness is not a tapscript script-path spend with leaf version 0xc0")]
    IncompatibleWitness,

    #[error("push at offset {offset} needs {needed} byte(s) but only {available} remain")]
    TruncatedPushPayload {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("opcode {name} (0x{opcode:02x}) at offset {offset} has length {length}, expected 1")]
    UnexpectedPayloadOpcode {
        offset: usize,
        opcode: u8,
        name: &'static str,
        length: usize,
    },

    #[error("witness element {index} is not valid hex: {source}")]
    InvalidHex {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("input index {index} out of range, transaction has {len} input(s)")]
    InputIndexOutOfRange { index: usize, len: usize },

    #[error("input {index} has no txinwitness field")]
    MissingWitness { index: usize },

    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
