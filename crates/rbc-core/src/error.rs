use thiserror::Error;

/// Programmer errors at construction — fail fast rather than limp along
/// with an instance that can never make progress.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("peer set must be non-empty")]
    EmptyPeerSet,

    #[error("sender is not a member of the configured peer set")]
    SenderNotInPeers,
}

/// Errors from the sender-role `broadcast` operation.
#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("payload length {len} is not a multiple of k={k}; pad or choose a different length")]
    UnalignedPayload { len: usize, k: usize },

    #[error(transparent)]
    Erasure(#[from] rbc_erasure::ErasureError),
}
