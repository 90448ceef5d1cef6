use proptest::prelude::*;
use rbc_erasure::ReedSolomonCoder;

proptest! {
    #[test]
    fn roundtrip_with_any_allowed_erasure_count(
        k in 1usize..6,
        extra in 0usize..4,
        stripes in 1usize..8,
        seed in any::<u64>(),
        erase_seed in any::<u64>(),
    ) {
        let n = k + extra;
        let coder = ReedSolomonCoder::new(k, n).unwrap();

        let mut data = vec![0u8; k * stripes];
        let mut state = seed;
        for byte in data.iter_mut() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *byte = (state >> 56) as u8;
        }

        let shards = coder.encode(&data).unwrap();
        prop_assert_eq!(shards.len(), n);
        prop_assert!(shards.iter().all(|s| s.len() == stripes));

        let nsym = n - k;
        let mut options: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();

        if nsym > 0 {
            let mut indices: Vec<usize> = (0..n).collect();
            let mut shuffle_state = erase_seed;
            for i in (1..indices.len()).rev() {
                shuffle_state = shuffle_state.wrapping_mul(6364136223846793005).wrapping_add(1);
                let j = (shuffle_state >> 33) as usize % (i + 1);
                indices.swap(i, j);
            }
            for &idx in indices.iter().take(nsym) {
                options[idx] = None;
            }
        }

        prop_assert_eq!(coder.decode(&options).unwrap(), data);
    }
}
