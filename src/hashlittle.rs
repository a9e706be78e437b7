//! Bob Jenkins' lookup3 `hashlittle`.
//!
//! Keys are always read as little-endian 32-bit words, whatever the host byte
//! order, which is the portable path of `lookup3.c`. The initial registers
//! depend on the total key length, so a key must be written in one call.

use std::io;

use crate::common::Digest32;
use crate::error::{HashError, HashResult};
use crate::hash32::Hash32;

const INITVAL: u32 = 0xdead_beef;

#[inline]
fn decode_fixed32_le(src: &[u8]) -> u32 {
    (src[0] as u32) | ((src[1] as u32) << 8) | ((src[2] as u32) << 16) | ((src[3] as u32) << 24)
}

#[inline]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(4);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(6);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(8);
    *b = b.wrapping_add(*a);

    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(16);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(19);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

#[inline]
fn final_mix(mut a: u32, mut b: u32, mut c: u32) -> u32 {
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(24));
    c
}

/// Hashes `key` with lookup3 `hashlittle`, perturbed by `initval`.
///
/// Lengths beyond `u32::MAX` are folded in modulo 2^32, as the C code does.
pub fn hashlittle(key: &[u8], initval: u32) -> u32 {
    let mut a = INITVAL
        .wrapping_add(key.len() as u32)
        .wrapping_add(initval);
    let mut b = a;
    let mut c = a;

    let mut k = key;
    while k.len() > 12 {
        a = a.wrapping_add(decode_fixed32_le(&k[0..4]));
        b = b.wrapping_add(decode_fixed32_le(&k[4..8]));
        c = c.wrapping_add(decode_fixed32_le(&k[8..12]));
        mix(&mut a, &mut b, &mut c);
        k = &k[12..];
    }

    // Zero-length tail: only possible for an empty key or an exact multiple
    // of 12, and the final mix is skipped.
    if k.is_empty() {
        return c;
    }

    for (i, &byte) in k.iter().enumerate() {
        let v = (byte as u32) << (8 * (i % 4));
        match i / 4 {
            0 => a = a.wrapping_add(v),
            1 => b = b.wrapping_add(v),
            _ => c = c.wrapping_add(v),
        }
    }

    final_mix(a, b, c)
}

/// `hashlittle(key, 0)`: the value a fresh `HashLittle` produces for `key`.
pub fn hash32(key: &[u8]) -> u32 {
    hashlittle(key, 0)
}

/// Single-write lookup3 hash state.
///
/// Goes `Empty -> Written` on the first `write`; further writes fail with
/// `HashError::AlreadyWritten` until `reset`. The written flag is kept apart
/// from the value, so a key that genuinely hashes to zero still locks the
/// state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HashLittle {
    value: u32,
    seed: u32,
    written: bool,
}

impl HashLittle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state whose writes use `seed` as the lookup3 `initval`.
    /// The seed is kept across `reset`.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            value: 0,
            seed,
            written: false,
        }
    }

    pub fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        if self.written {
            log::debug!(
                target: "lookup3::hashlittle",
                "rejected second write of {} bytes (stored value {:#010x})",
                data.len(),
                self.value
            );
            return Err(HashError::AlreadyWritten);
        }
        self.value = hashlittle(data, self.seed);
        self.written = true;
        Ok(data.len())
    }

    pub fn reset(&mut self) {
        self.value = 0;
        self.written = false;
    }

    pub fn sum32(&self) -> u32 {
        self.value
    }

    /// The stored value as four big-endian bytes.
    pub fn digest(&self) -> Digest32 {
        self.value.to_be_bytes()
    }

    pub fn is_written(&self) -> bool {
        self.written
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Hash32 for HashLittle {
    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        HashLittle::write(self, data)
    }

    fn reset(&mut self) {
        HashLittle::reset(self)
    }

    fn sum32(&self) -> u32 {
        self.value
    }

    fn name(&self) -> &'static str {
        "lookup3.HashLittle"
    }
}

// A single `write_all` of the whole key is the only supported use.
impl io::Write for HashLittle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(HashLittle::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
