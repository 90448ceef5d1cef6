// ============================================================================
// RBC WIRE - Binary Codec for VALUE/ECHO/READY Messages
// ============================================================================
// PURPOSE: Bit-exact wire format for the three reliable-broadcast messages
//
// LAYOUT (network byte order):
// ```
// type: u8       (0=Value, 1=Echo, 2=Ready)
// m:    u16      (number of block hashes that follow; n or 0)
// i:    u16      (block_number / peer index)
// hlen: u16      (hash length in bytes)
// root_hash:    [hlen] bytes
// block_hashes: [m][hlen] bytes
// shard:        remaining bytes
// ```
//
// Encode/decode are pure and total over well-formed buffers; a malformed
// buffer decodes to `WireError` rather than panicking.
// ============================================================================

mod error;
mod message;

pub use error::WireError;
pub use message::Message;
