use crate::common::{BLOCK_SIZE, DIGEST_SIZE};
use crate::error::HashResult;

/// A `Hash32` computes a 32-bit digest over bytes written to it.
///
/// Implementations may restrict how many times `write` can be called between
/// resets. `HashLittle` accepts exactly one write, since its seed depends on
/// the total key length.
pub trait Hash32 {
    fn write(&mut self, data: &[u8]) -> HashResult<usize>;

    fn reset(&mut self);

    fn sum32(&self) -> u32;

    fn name(&self) -> &'static str;

    /// Appends the current value to `prefix` in big-endian byte order.
    fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(prefix.len() + DIGEST_SIZE);
        out.extend_from_slice(prefix);
        out.extend_from_slice(&self.sum32().to_be_bytes());
        out
    }

    fn size(&self) -> usize {
        DIGEST_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
