use thiserror::Error;

/// Failure modes for [`crate::ReedSolomonCoder`] construction, encode and decode.
#[derive(Debug, Error)]
pub enum ErasureError {
    #[error("payload size must be non-zero and at most encoded size {n}, got {k}")]
    InvalidParameters { k: usize, n: usize },

    #[error("data length {len} is not a multiple of payload size {k}")]
    UnalignedPayload { len: usize, k: usize },

    #[error("decode needs at least {k} of {n} shards, got {present}")]
    TooFewShards {
        k: usize,
        n: usize,
        present: usize,
    },

    #[error("decode requires exactly {n} shard slots, got {got}")]
    WrongShardCount { n: usize, got: usize },

    #[error("shards have unequal lengths")]
    ShardLenMismatch,

    #[error("reed-solomon codec failure: {0}")]
    Codec(#[from] reed_solomon_erasure::Error),
}
