use crate::error::WireError;

const HEADER_LEN: usize = 1 + 2 + 2 + 2;

const TYPE_VALUE: u8 = 0;
const TYPE_ECHO: u8 = 1;
const TYPE_READY: u8 = 2;

/// One of the three protocol messages, as a closed sum type rather than a
/// class hierarchy (the wire tag is a single byte and maps directly onto
/// this enum).
///
/// `Ready` always carries an empty `block_hashes`, `block_number == 0` and
/// an empty `shard` — only `root_hash` is meaningful for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Value {
        root_hash: Vec<u8>,
        block_hashes: Vec<Vec<u8>>,
        block_number: u16,
        shard: Vec<u8>,
    },
    Echo {
        root_hash: Vec<u8>,
        block_hashes: Vec<Vec<u8>>,
        block_number: u16,
        shard: Vec<u8>,
    },
    Ready {
        root_hash: Vec<u8>,
    },
}

impl Message {
    pub fn root_hash(&self) -> &[u8] {
        match self {
            Message::Value { root_hash, .. }
            | Message::Echo { root_hash, .. }
            | Message::Ready { root_hash } => root_hash,
        }
    }

    /// Network-byte-order encoding: `type | m | i | hlen | root_hash |
    /// block_hashes | shard`. Pure and total.
    pub fn encode(&self) -> Vec<u8> {
        let (tag, root_hash, block_hashes, block_number, shard): (
            u8,
            &[u8],
            &[Vec<u8>],
            u16,
            &[u8],
        ) = match self {
            Message::Value {
                root_hash,
                block_hashes,
                block_number,
                shard,
            } => (TYPE_VALUE, root_hash, block_hashes, *block_number, shard),
            Message::Echo {
                root_hash,
                block_hashes,
                block_number,
                shard,
            } => (TYPE_ECHO, root_hash, block_hashes, *block_number, shard),
            Message::Ready { root_hash } => (TYPE_READY, root_hash, &[], 0, &[]),
        };

        let hash_len = root_hash.len();
        let mut buf = Vec::with_capacity(HEADER_LEN + hash_len * (1 + block_hashes.len()) + shard.len());

        buf.push(tag);
        buf.extend_from_slice(&(block_hashes.len() as u16).to_be_bytes());
        buf.extend_from_slice(&block_number.to_be_bytes());
        buf.extend_from_slice(&(hash_len as u16).to_be_bytes());
        buf.extend_from_slice(root_hash);
        for h in block_hashes {
            buf.extend_from_slice(h);
        }
        buf.extend_from_slice(shard);
        buf
    }

    /// Decodes a buffer produced by [`encode`](Self::encode). Never panics
    /// on malformed input; truncated buffers or widths that would read past
    /// the end return [`WireError`] instead.
    pub fn decode(data: &[u8]) -> Result<Self, WireError> {
        if data.len() < HEADER_LEN {
            return Err(WireError::Truncated {
                need: HEADER_LEN,
                got: data.len(),
            });
        }

        let tag = data[0];
        let m = u16::from_be_bytes([data[1], data[2]]) as usize;
        let block_number = u16::from_be_bytes([data[3], data[4]]);
        let hash_len = u16::from_be_bytes([data[5], data[6]]) as usize;

        let body = &data[HEADER_LEN..];
        let hashes_len = hash_len
            .checked_mul(m + 1)
            .ok_or(WireError::InconsistentWidths)?;
        if body.len() < hashes_len {
            return Err(WireError::InconsistentWidths);
        }

        let root_hash = body[..hash_len].to_vec();
        let mut block_hashes = Vec::with_capacity(m);
        for i in 0..m {
            let start = hash_len + i * hash_len;
            block_hashes.push(body[start..start + hash_len].to_vec());
        }
        let shard = body[hashes_len..].to_vec();

        match tag {
            TYPE_VALUE => Ok(Message::Value {
                root_hash,
                block_hashes,
                block_number,
                shard,
            }),
            TYPE_ECHO => Ok(Message::Echo {
                root_hash,
                block_hashes,
                block_number,
                shard,
            }),
            TYPE_READY => Ok(Message::Ready { root_hash }),
            other => Err(WireError::UnknownType(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_value() {
        let msg = Message::Value {
            root_hash: vec![1, 2, 3, 4],
            block_hashes: vec![vec![9, 9, 9, 9], vec![8, 8, 8, 8]],
            block_number: 1,
            shard: vec![5, 6, 7],
        };
        let encoded = msg.encode();
        assert_eq!(Message::decode(&encoded).unwrap(), msg);
    }

    #[test]
    fn roundtrip_echo() {
        let msg = Message::Echo {
            root_hash: vec![0xaa; 32],
            block_hashes: vec![vec![0xbb; 32]; 4],
            block_number: 3,
            shard: vec![],
        };
        let encoded = msg.encode();
        assert_eq!(Message::decode(&encoded).unwrap(), msg);
    }

    #[test]
    fn roundtrip_ready() {
        let msg = Message::Ready {
            root_hash: vec![7; 64],
        };
        let encoded = msg.encode();
        assert_eq!(Message::decode(&encoded).unwrap(), msg);
    }

    #[test]
    fn ready_encodes_with_zero_fields() {
        let msg = Message::Ready {
            root_hash: vec![1, 2],
        };
        let encoded = msg.encode();
        // type(1) + m(2)=0 + i(2)=0 + hlen(2)=2 + root_hash(2)
        assert_eq!(encoded.len(), HEADER_LEN + 2);
    }

    #[test]
    fn truncated_header_is_malformed() {
        assert_eq!(
            Message::decode(&[0, 1, 2]),
            Err(WireError::Truncated { need: HEADER_LEN, got: 3 })
        );
    }

    #[test]
    fn truncated_body_is_malformed() {
        // claims 3 block hashes of length 4 but body is empty
        let mut buf = vec![1u8, 0, 3, 0, 0, 0, 4];
        buf.extend_from_slice(&[0u8; 4]); // only root hash present
        assert_eq!(Message::decode(&buf), Err(WireError::InconsistentWidths));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let buf = vec![99u8, 0, 0, 0, 0, 0];
        assert_eq!(Message::decode(&buf), Err(WireError::UnknownType(99)));
    }
}
