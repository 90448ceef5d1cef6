// ============================================================================
// RBC CORE - Reliable Broadcast State Machine
// ============================================================================
// PURPOSE: Bracha-style VALUE/ECHO/READY dispersal for Byzantine peer sets
//
// COMPONENT CONNECTIONS:
// ┌──────────────────────────────────────────────────────────────────┐
// │                    RBC INSTANCE                                   │
// ├──────────────────────────────────────────────────────────────────┤
// │  broadcast(v)  →  erasure-encode  →  VALUE(shard_i) to each peer  │
// │         ↓                                      ↓                  │
// │  feed(peer, VALUE)  →  validate  →  multicast ECHO                │
// │         ↓                                      ↓                  │
// │  feed(peer, ECHO)   →  quorum check  →  multicast READY           │
// │         ↓                                      ↓                  │
// │  feed(peer, READY)  →  quorum check  →  sink.deliver(v)           │
// └──────────────────────────────────────────────────────────────────┘
//
// QUORUMS (n peers, f = (n-1)/3 Byzantine):
// - echo_quorum = n-f            (amplify on ECHO path)
// - ready_vouch_quorum = f+1     (amplify on READY path)
// - deliver_block_quorum = n-2f  (enough shards to decode)
// - deliver_ready_quorum = 2f+1  (enough votes to deliver)
//
// `RbcInstance` is the only thing hosts need to drive: call `broadcast`
// once as the sender, feed every inbound message through `feed`, and read
// delivered payloads off the configured `Sink`. Dispersal and
// reconstruction are handled by `rbc-erasure`; wire framing by `rbc-wire`.
// ============================================================================

mod connection;
mod error;
mod hash;
mod instance;
mod round;

pub use connection::{Connections, LoopbackConnections, Sink, VecSink};
pub use error::{BroadcastError, ConfigError};
pub use hash::BlockHasher;
pub use instance::{max_faulty, HashFn, RbcInstance};
pub use round::RoundState;
