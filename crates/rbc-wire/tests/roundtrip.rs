use proptest::prelude::*;
use rbc_wire::Message;

proptest! {
    // root_hash and every entry of block_hashes share one length (`hlen` on
    // the wire) because they all come from the same hash function within a
    // single round — generate one length, then fill both from it, rather
    // than letting them vary independently.
    #[test]
    fn value_roundtrips(
        hash_len in 0usize..64,
        root_byte in any::<u8>(),
        num_hashes in 0usize..8,
        block_number in any::<u16>(),
        shard in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let root_hash = vec![root_byte; hash_len];
        let hashes: Vec<Vec<u8>> = (0..num_hashes)
            .map(|i| vec![i as u8; hash_len])
            .collect();
        let msg = Message::Value {
            root_hash,
            block_hashes: hashes,
            block_number,
            shard,
        };
        let encoded = msg.encode();
        prop_assert_eq!(Message::decode(&encoded).unwrap(), msg);
    }

    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = Message::decode(&bytes);
    }
}
