/// Pluggable hash function, injected as a configuration parameter (spec.md
/// §6). Implementations must produce a constant-length output for the
/// lifetime of one [`crate::RbcInstance`].
///
/// A blanket impl covers plain closures, so `Arc::new(|d: &[u8]| ...)` works
/// as a [`BlockHasher`] without a manual impl.
pub trait BlockHasher: Send + Sync {
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

impl<F> BlockHasher for F
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        self(data)
    }
}
