use std::collections::HashSet;
use std::hash::Hash;

/// Per-`root_hash` state for one broadcast round. Created lazily on the
/// first valid ECHO that names this round's `root_hash`.
pub struct RoundState<P> {
    pub block_hashes: Vec<Vec<u8>>,
    blocks: Vec<Option<Vec<u8>>>,
    block_count: usize,
    pub ready_sent: bool,
    pub ready_received: HashSet<P>,
    pub delivered: bool,
}

impl<P: Eq + Hash> RoundState<P> {
    pub fn new(block_hashes: Vec<Vec<u8>>) -> Self {
        let n = block_hashes.len();
        RoundState {
            block_hashes,
            blocks: vec![None; n],
            block_count: 0,
            ready_sent: false,
            ready_received: HashSet::new(),
            delivered: false,
        }
    }

    /// Records `shard` in slot `index`. Duplicate ECHOes for an
    /// already-filled slot are silently ignored; `block_count` advances by
    /// exactly one per distinct slot.
    pub fn feed_block(&mut self, index: usize, shard: Vec<u8>) {
        if self.blocks[index].is_none() {
            self.blocks[index] = Some(shard);
            self.block_count += 1;
        }
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn blocks(&self) -> &[Option<Vec<u8>>] {
        &self.blocks
    }
}
