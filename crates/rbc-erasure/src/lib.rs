// ============================================================================
// RBC ERASURE - Block-Transposed Reed-Solomon Dispersal
// ============================================================================
// PURPOSE: Encode a payload into n equal shards, any k of which reconstruct it
//
// ALGORITHM: Reed-Solomon RS(n, k) over GF(2^8), block-transposed layout
//
// PARAMETERS:
// - k: Number of data shards (payload width)
// - nsym = n - k: Number of parity shards (redundancy)
// - n: Total shards
// - Any k of n shards can reconstruct the original payload
//
// TRANSPOSE:
// - Shard i holds byte i of every stripe's n-byte codeword, not a
//   contiguous run of the original data
// - This is what lets any k of n peers, each holding one shard, jointly
//   reconstruct the payload
//
// DEGENERATE CASE: nsym == 0 (no redundancy) bypasses the RS codec
// entirely and requires every shard present, rather than calling the
// codec with an empty erasure set
// ============================================================================

mod coder;
mod error;

pub use coder::ReedSolomonCoder;
pub use error::ErasureError;
