use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Mutex;

/// Non-blocking per-peer send. The transport handles buffering and
/// backpressure; a host wrapping a blocking transport must itself queue and
/// drain outside the call to [`crate::RbcInstance::feed`].
pub trait Connections<P> {
    fn send(&self, peer: &P, bytes: Vec<u8>);
}

/// Receives at most one delivered payload per round. `deliver` is expected
/// to complete before `feed` returns — the sink is a private collaborator,
/// not a queue with its own concurrency.
pub trait Sink {
    fn deliver(&self, payload: Vec<u8>);
}

/// In-memory fan-out to every configured peer, keyed by peer identity.
/// Mirrors the Python source's `MemoryConnection`: each peer has its own
/// inbound queue that the host drains by calling
/// [`LoopbackConnections::drain`] and feeding the bytes back into the
/// instance.
pub struct LoopbackConnections<P: Eq + Hash + Clone> {
    inboxes: Mutex<HashMap<P, VecDeque<Vec<u8>>>>,
}

impl<P: Eq + Hash + Clone> LoopbackConnections<P> {
    pub fn new(peers: impl IntoIterator<Item = P>) -> Self {
        let inboxes = peers.into_iter().map(|p| (p, VecDeque::new())).collect();
        LoopbackConnections {
            inboxes: Mutex::new(inboxes),
        }
    }

    /// Pops and returns the next queued message for `peer`, if any.
    pub fn pop(&self, peer: &P) -> Option<Vec<u8>> {
        self.inboxes.lock().unwrap().get_mut(peer)?.pop_front()
    }

    /// Total number of queued, undelivered messages across all peers.
    pub fn pending(&self) -> usize {
        self.inboxes.lock().unwrap().values().map(VecDeque::len).sum()
    }
}

impl<P: Eq + Hash + Clone> Connections<P> for LoopbackConnections<P> {
    fn send(&self, peer: &P, bytes: Vec<u8>) {
        if let Some(queue) = self.inboxes.lock().unwrap().get_mut(peer) {
            queue.push_back(bytes);
        }
    }
}

/// An in-memory output sink collecting every delivered payload in arrival
/// order — the default named in the configuration surface.
#[derive(Default)]
pub struct VecSink {
    delivered: Mutex<Vec<Vec<u8>>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut *self.delivered.lock().unwrap())
    }

    pub fn as_vec(&self) -> Vec<Vec<u8>> {
        self.delivered.lock().unwrap().clone()
    }
}

impl Sink for VecSink {
    fn deliver(&self, payload: Vec<u8>) {
        self.delivered.lock().unwrap().push(payload);
    }
}
