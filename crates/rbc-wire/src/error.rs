use thiserror::Error;

/// A decode failure. Per the protocol's threat model these always mean the
/// buffer was truncated or internally inconsistent — callers should drop
/// the message and log, not propagate the error as a fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("buffer shorter than the fixed header ({need} bytes needed, got {got})")]
    Truncated { need: usize, got: usize },

    #[error("unknown message type tag {0}")]
    UnknownType(u8),

    #[error("block hash count/hash length would read past the buffer")]
    InconsistentWidths,
}
