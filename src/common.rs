/// Big-endian digest as laid out by `Hash32::sum`.
pub type Digest32 = [u8; 4];

pub const DIGEST_SIZE: usize = 4;
pub const BLOCK_SIZE: usize = 1;
