// ============================================================================
// RBC - Reliable Broadcast Facade
// ============================================================================
// PURPOSE: Single entry point re-exporting the reliable-broadcast stack
//
// Bracha-style VALUE/ECHO/READY protocol dispersed over (n, n-2f)
// Reed-Solomon erasure coding, for f = (n-1)/3.
//
// BUILDING BLOCKS:
// - rbc_erasure: the block-transposed erasure coder
// - rbc_wire:    the binary wire format for VALUE/ECHO/READY
// - rbc_core:    the per-instance state machine, RbcInstance, that drives
//                the protocol and calls out to the two crates above
//
// Most callers only need what's re-exported at this crate's root.
// ============================================================================

pub use rbc_core::{
    max_faulty, BlockHasher, BroadcastError, ConfigError, Connections, HashFn, LoopbackConnections,
    RbcInstance, RoundState, Sink, VecSink,
};
pub use rbc_erasure::{ErasureError, ReedSolomonCoder};
pub use rbc_wire::{Message, WireError};
