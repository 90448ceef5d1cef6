use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use rbc_erasure::ReedSolomonCoder;
use rbc_wire::Message;
use tracing::{debug, info, warn};

use crate::connection::{Connections, Sink};
use crate::error::{BroadcastError, ConfigError};
use crate::hash::BlockHasher;
use crate::round::RoundState;

/// Pluggable hash function: must produce a constant-length output for the
/// lifetime of an [`RbcInstance`].
pub type HashFn = Arc<dyn BlockHasher>;

/// Maximum number of Byzantine peers tolerated among `n` total: `f = (n-1)/3`.
pub fn max_faulty(n: usize) -> usize {
    (n.saturating_sub(1)) / 3
}

/// One Bracha-style reliable broadcast instance: a fixed sender, a fixed
/// peer set, and per-`root_hash` round state. `feed` and `broadcast` are
/// the only entry points; everything else is side effects via `connections`
/// and `sink`.
pub struct RbcInstance<P, C, S> {
    sender: P,
    peers: Vec<P>,
    peer_index: HashMap<P, usize>,
    hash_fn: HashFn,
    connections: C,
    sink: S,
    rounds: HashMap<Vec<u8>, RoundState<P>>,
    n: usize,
    f: usize,
    k: usize,
    coder: ReedSolomonCoder,
}

impl<P, C, S> RbcInstance<P, C, S>
where
    P: Clone + Eq + Hash + Ord,
    C: Connections<P>,
    S: Sink,
{
    pub fn new(
        sender: P,
        peers: impl IntoIterator<Item = P>,
        hash_fn: HashFn,
        connections: C,
        sink: S,
    ) -> Result<Self, ConfigError> {
        let mut peers: Vec<P> = peers.into_iter().collect();
        peers.sort();
        peers.dedup();

        if peers.is_empty() {
            return Err(ConfigError::EmptyPeerSet);
        }
        if !peers.contains(&sender) {
            return Err(ConfigError::SenderNotInPeers);
        }

        let n = peers.len();
        let f = max_faulty(n);
        let k = n - 2 * f;
        let peer_index = peers
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        let coder =
            ReedSolomonCoder::new(k, n).expect("k <= n holds for any n with f = (n-1)/3");

        Ok(RbcInstance {
            sender,
            peers,
            peer_index,
            hash_fn,
            connections,
            sink,
            rounds: HashMap::new(),
            n,
            f,
            k,
            coder,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn f(&self) -> usize {
        self.f
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn connections(&self) -> &C {
        &self.connections
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Disperses `data` as a reliable broadcast: erasure-codes it into `n`
    /// shards and sends each peer a VALUE message carrying its own shard.
    /// `data.len()` must be a multiple of `k()`.
    pub fn broadcast(&self, data: &[u8]) -> Result<(), BroadcastError> {
        if data.len() % self.k != 0 {
            return Err(BroadcastError::UnalignedPayload {
                len: data.len(),
                k: self.k,
            });
        }

        let shards = self.coder.encode(data)?;
        let block_hashes: Vec<Vec<u8>> = shards.iter().map(|s| self.hash_fn.hash(s)).collect();
        let root_hash = self.hash_fn.hash(&block_hashes.concat());

        for (i, peer) in self.peers.iter().enumerate() {
            let message = Message::Value {
                root_hash: root_hash.clone(),
                block_hashes: block_hashes.clone(),
                block_number: i as u16,
                shard: shards[i].clone(),
            };
            self.connections.send(peer, message.encode());
        }

        Ok(())
    }

    /// Processes one inbound `(peer, bytes)` pair. Malformed or
    /// unauthorized messages are dropped and logged; never panics on
    /// adversarial input.
    pub fn feed(&mut self, peer: &P, bytes: &[u8]) {
        let message = match Message::decode(bytes) {
            Ok(m) => m,
            Err(err) => {
                info!(?peer, %err, "dropping malformed message");
                return;
            }
        };

        match message {
            Message::Value {
                root_hash,
                block_hashes,
                block_number,
                shard,
            } => self.on_value(peer, root_hash, block_hashes, block_number, shard),
            Message::Echo {
                root_hash,
                block_hashes,
                block_number,
                shard,
            } => self.on_echo(peer, root_hash, block_hashes, block_number, shard),
            Message::Ready { root_hash } => self.on_ready(peer, root_hash),
        }
    }

    fn on_value(
        &mut self,
        peer: &P,
        root_hash: Vec<u8>,
        block_hashes: Vec<Vec<u8>>,
        block_number: u16,
        shard: Vec<u8>,
    ) {
        if *peer != self.sender {
            info!(?peer, "dropping VALUE from non-sender peer");
            return;
        }
        if block_hashes.len() != self.n || block_number as usize >= block_hashes.len() {
            debug!(?peer, "dropping VALUE with wrong block hash count");
            return;
        }
        if self.hash_fn.hash(&shard) != block_hashes[block_number as usize] {
            debug!(?peer, "dropping VALUE with shard hash mismatch");
            return;
        }
        if self.hash_fn.hash(&block_hashes.concat()) != root_hash {
            debug!(?peer, "dropping VALUE with root hash mismatch");
            return;
        }

        let echo = Message::Echo {
            root_hash,
            block_hashes,
            block_number,
            shard,
        };
        let bytes = echo.encode();
        for p in &self.peers {
            self.connections.send(p, bytes.clone());
        }
    }

    fn on_echo(
        &mut self,
        peer: &P,
        root_hash: Vec<u8>,
        block_hashes: Vec<Vec<u8>>,
        block_number: u16,
        shard: Vec<u8>,
    ) {
        let Some(&peer_idx) = self.peer_index.get(peer) else {
            info!(?peer, "dropping ECHO from peer outside the configured set");
            return;
        };
        if block_number as usize != peer_idx {
            info!(?peer, block_number, "dropping ECHO with block number mismatch");
            return;
        }
        if block_hashes.len() != self.n {
            debug!(?peer, "dropping ECHO with wrong block hash count");
            return;
        }
        if self.hash_fn.hash(&shard) != block_hashes[peer_idx] {
            debug!(?peer, "dropping ECHO with shard hash mismatch");
            return;
        }
        if self.hash_fn.hash(&block_hashes.concat()) != root_hash {
            debug!(?peer, "dropping ECHO with root hash mismatch");
            return;
        }

        let round = self
            .rounds
            .entry(root_hash.clone())
            .or_insert_with(|| RoundState::new(block_hashes));
        round.feed_block(peer_idx, shard);

        self.evaluate_transitions(&root_hash);
    }

    fn on_ready(&mut self, peer: &P, root_hash: Vec<u8>) {
        if !self.peer_index.contains_key(peer) {
            info!(?peer, "dropping READY from peer outside the configured set");
            return;
        }

        let Some(round) = self.rounds.get_mut(&root_hash) else {
            info!(?peer, "dropping READY for a round with no known block hashes yet");
            return;
        };
        round.ready_received.insert(peer.clone());

        self.evaluate_transitions(&root_hash);
    }

    /// Runs the three transition predicates in the order spec.md §4.3.3
    /// names them: amplify-on-ECHO-quorum, amplify-on-READY-quorum, deliver.
    fn evaluate_transitions(&mut self, root_hash: &[u8]) {
        let echo_quorum = self.n - self.f;
        let ready_vouch_quorum = self.f + 1;
        let deliver_block_quorum = self.n - 2 * self.f;
        let deliver_ready_quorum = 2 * self.f + 1;

        let Some(round) = self.rounds.get(root_hash) else {
            return;
        };
        let block_count = round.block_count();
        let ready_count = round.ready_received.len();
        let ready_sent = round.ready_sent;
        let delivered = round.delivered;

        if !ready_sent && block_count >= echo_quorum {
            match reconstruct(&self.coder, &self.hash_fn, self.rounds.get(root_hash).unwrap()) {
                Some(_) => {
                    self.send_ready(root_hash);
                }
                None => {
                    warn!(
                        root_hash = %hex_prefix(root_hash),
                        "could not decode a matching payload at the ECHO quorum threshold"
                    );
                }
            }
        } else if !ready_sent && ready_count >= ready_vouch_quorum {
            self.send_ready(root_hash);
        }

        if !delivered && block_count >= deliver_block_quorum && ready_count >= deliver_ready_quorum
        {
            if let Some(payload) =
                reconstruct(&self.coder, &self.hash_fn, self.rounds.get(root_hash).unwrap())
            {
                if let Some(round) = self.rounds.get_mut(root_hash) {
                    round.delivered = true;
                }
                self.sink.deliver(payload);
            }
        }
    }

    fn send_ready(&mut self, root_hash: &[u8]) {
        if let Some(round) = self.rounds.get_mut(root_hash) {
            round.ready_sent = true;
        }
        let message = Message::Ready {
            root_hash: root_hash.to_vec(),
        };
        let bytes = message.encode();
        for peer in &self.peers {
            self.connections.send(peer, bytes.clone());
        }
    }
}

/// Attempts to reconstruct the payload from a round's known blocks and
/// verifies the round trip: re-encoding the recovered payload must hash
/// back to exactly the round's `block_hashes`. Returns `None` if decoding
/// fails or the hashes don't match (the sender is equivocating, or the
/// known blocks are corrupt beyond erasure correction).
fn reconstruct<P>(coder: &ReedSolomonCoder, hash_fn: &HashFn, round: &RoundState<P>) -> Option<Vec<u8>> {
    let data = coder.decode(round.blocks()).ok()?;
    let shards = coder.encode(&data).ok()?;
    let hashes: Vec<Vec<u8>> = shards.iter().map(|s| hash_fn.hash(s)).collect();
    if hashes == round.block_hashes {
        Some(data)
    } else {
        None
    }
}

fn hex_prefix(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(4)
        .map(|b| format!("{b:02x}"))
        .collect()
}
