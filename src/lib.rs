pub mod common;
pub mod error;
pub mod hash32;
pub mod hashlittle;

pub use common::{Digest32, BLOCK_SIZE, DIGEST_SIZE};
pub use error::{HashError, HashResult};
pub use hash32::Hash32;
pub use hashlittle::{hash32, hashlittle, HashLittle};
