use reed_solomon_erasure::galois_8::ReedSolomon;

use crate::error::ErasureError;

/// Reed-Solomon coder configured for the `(k, n)` dispersal regime: any `k`
/// of the `n` shards produced by [`encode`](Self::encode) are sufficient to
/// reconstruct the original payload via [`decode`](Self::decode).
///
/// Shards are block-transposed: shard `i` holds byte `i` of every
/// `k`-byte-wide stripe's `n`-byte codeword, not a contiguous run of the
/// original data. This is what lets any `k` of `n` peers, each holding one
/// shard, jointly reconstruct the payload.
pub struct ReedSolomonCoder {
    k: usize,
    n: usize,
    nsym: usize,
    codec: Option<ReedSolomon>,
}

impl ReedSolomonCoder {
    /// `k` is the payload width (data shards), `n` the encoded width (total
    /// shards). `nsym = n - k` is the redundancy: up to `nsym` shards may be
    /// missing at decode time.
    pub fn new(k: usize, n: usize) -> Result<Self, ErasureError> {
        if k == 0 || k > n {
            return Err(ErasureError::InvalidParameters { k, n });
        }
        let nsym = n - k;
        let codec = if nsym == 0 {
            None
        } else {
            Some(ReedSolomon::new(k, nsym)?)
        };
        Ok(ReedSolomonCoder { k, n, nsym, codec })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Splits `data` into stripes of `k` bytes, Reed-Solomon encodes each
    /// stripe to an `n`-byte codeword, and transposes so that the returned
    /// `shards[i]` carries byte `i` of every codeword in stripe order.
    ///
    /// `data.len()` must be a multiple of `k`.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<Vec<u8>>, ErasureError> {
        if data.len() % self.k != 0 {
            return Err(ErasureError::UnalignedPayload {
                len: data.len(),
                k: self.k,
            });
        }
        let m = data.len() / self.k;

        let mut shards: Vec<Vec<u8>> = vec![vec![0u8; m]; self.n];
        for (offset, byte) in data.iter().enumerate() {
            let stripe = offset / self.k;
            let position = offset % self.k;
            shards[position][stripe] = *byte;
        }

        if let Some(codec) = &self.codec {
            codec.encode(&mut shards)?;
        }

        Ok(shards)
    }

    /// Reconstructs the original payload from up to `n` shard slots, each
    /// either present or erased (`None`). At least `k` must be present and
    /// all present shards must share the same length.
    ///
    /// When `nsym == 0` (no redundancy), every slot must be present: this
    /// sidesteps a known defect in erasure-only Reed-Solomon decoders when
    /// invoked with zero redundancy and an empty erasure set.
    pub fn decode(&self, shards: &[Option<Vec<u8>>]) -> Result<Vec<u8>, ErasureError> {
        if shards.len() != self.n {
            return Err(ErasureError::WrongShardCount {
                n: self.n,
                got: shards.len(),
            });
        }

        let present = shards.iter().filter(|s| s.is_some()).count();
        if present < self.k {
            return Err(ErasureError::TooFewShards {
                k: self.k,
                n: self.n,
                present,
            });
        }

        let m = shards
            .iter()
            .find_map(|s| s.as_ref().map(|b| b.len()))
            .unwrap_or(0);
        if shards
            .iter()
            .flatten()
            .any(|shard| shard.len() != m)
        {
            return Err(ErasureError::ShardLenMismatch);
        }

        let data_shards: Vec<Vec<u8>> = if self.nsym == 0 {
            shards
                .iter()
                .map(|s| s.clone().expect("all slots present when nsym == 0"))
                .collect()
        } else {
            let mut working: Vec<Option<Vec<u8>>> = shards.to_vec();
            self.codec
                .as_ref()
                .expect("codec present when nsym > 0")
                .reconstruct(&mut working)?;
            working
                .into_iter()
                .map(|s| s.expect("reconstruct fills every slot"))
                .collect()
        };

        let mut data = vec![0u8; m * self.k];
        for stripe in 0..m {
            for position in 0..self.k {
                data[stripe * self.k + position] = data_shards[position][stripe];
            }
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_no_erasures() {
        let coder = ReedSolomonCoder::new(3, 5).unwrap();
        let shards = coder.encode(b"012345678").unwrap();
        assert_eq!(shards.len(), 5);
        assert!(shards.iter().all(|s| s.len() == 3));

        let options: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();
        assert_eq!(coder.decode(&options).unwrap(), b"012345678");
    }

    #[test]
    fn roundtrip_two_erasures() {
        let coder = ReedSolomonCoder::new(3, 5).unwrap();
        let shards = coder.encode(b"012345678").unwrap();
        let mut options: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();
        options[0] = None;
        options[1] = None;

        assert_eq!(coder.decode(&options).unwrap(), b"012345678");
    }

    #[test]
    fn rejects_too_few_shards() {
        let coder = ReedSolomonCoder::new(3, 5).unwrap();
        let shards = coder.encode(b"012345678").unwrap();
        let mut options: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();
        options[0] = None;
        options[1] = None;
        options[2] = None;

        assert!(matches!(
            coder.decode(&options),
            Err(ErasureError::TooFewShards { .. })
        ));
    }

    #[test]
    fn rejects_unaligned_payload() {
        let coder = ReedSolomonCoder::new(3, 5).unwrap();
        assert!(matches!(
            coder.encode(b"12345"),
            Err(ErasureError::UnalignedPayload { .. })
        ));
    }

    #[test]
    fn degenerate_zero_redundancy_requires_all_shards() {
        let coder = ReedSolomonCoder::new(4, 4).unwrap();
        let shards = coder.encode(b"abcd").unwrap();
        let options: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();
        assert_eq!(coder.decode(&options).unwrap(), b"abcd");
    }

    #[test]
    fn degenerate_zero_redundancy_rejects_any_erasure() {
        let coder = ReedSolomonCoder::new(4, 4).unwrap();
        let shards = coder.encode(b"abcd").unwrap();
        let mut options: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();
        options[0] = None;

        assert!(matches!(
            coder.decode(&options),
            Err(ErasureError::TooFewShards { .. })
        ));
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            ReedSolomonCoder::new(0, 5),
            Err(ErasureError::InvalidParameters { .. })
        ));
        assert!(matches!(
            ReedSolomonCoder::new(6, 5),
            Err(ErasureError::InvalidParameters { .. })
        ));
    }
}
