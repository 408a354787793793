//! Tools to deal with codes.

use std::fmt;
use dyn_size_of::GetSize;

/// `Code` represents a binary codeword of `len` bits.
/// It is also a binary counter used to enumerate canonical codewords.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub struct Code {
    /// Bits of the codeword. The least significant bit contains the last bit of the codeword.
    pub content: u128,
    /// Number of bits.
    pub len: u32
}

impl Code {
    /// The largest supported codeword length, in bits.
    pub const MAX_LEN: u32 = u128::BITS;

    /// Returns the all-zero codeword of the given length.
    #[inline] pub fn zero(len: u32) -> Self {
        Self { content: 0, len }
    }

    /// Returns mask of `len` least significant bits.
    #[inline(always)] fn mask(len: u32) -> u128 {
        u128::MAX.checked_shr(Self::MAX_LEN - len).unwrap_or(0)
    }

    /// Returns the canonical successor of `self` which has `len` bits.
    ///
    /// `self` is incremented by one as a `len`-bit counter (the carry moves towards the first bit)
    /// and then, if `len` exceeds `self.len`, extended by appending `len - self.len` zero bits.
    /// `len` must not be less than `self.len`.
    pub fn successor(&self, len: u32) -> Self {
        debug_assert!(len >= self.len);
        let shifted = self.content.wrapping_add(1).checked_shl(len - self.len).unwrap_or(0);
        Self { content: shifted & Self::mask(len), len }
    }

    /// Gets `bit_nr`-th bit, counting from the first (most significant) one.
    #[inline] pub fn bit(&self, bit_nr: u32) -> u8 {
        ((self.content >> (self.len - bit_nr - 1)) & 1) as u8
    }

    /// Returns iterator over the bits of `self`, from the first one.
    #[inline] pub fn bits(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// Appends bits of `self` to `output`.
    #[inline] pub fn append_to(&self, output: &mut Vec<u8>) {
        output.extend(self.bits())
    }

    /// Returns whether `self` is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len &&
            other.content.checked_shr(other.len - self.len).unwrap_or(0) == self.content
    }

    /// Returns whether `self` consists of zero bits.
    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }
}

impl GetSize for Code {}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bits() {
            f.write_str(if b == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_bits() {
        let code = Code { content: 0b0110, len: 4 };
        assert_eq!(code.bit(0), 0);
        assert_eq!(code.bit(1), 1);
        assert_eq!(code.bit(2), 1);
        assert_eq!(code.bit(3), 0);
        assert_eq!(code.bits().collect::<Vec<_>>(), vec![0, 1, 1, 0]);
        assert_eq!(code.to_string(), "0110");
        let mut out = vec![1];
        code.append_to(&mut out);
        assert_eq!(out, vec![1, 0, 1, 1, 0]);
    }

    #[test]
    fn successor_same_len() {
        assert_eq!(Code::zero(3).successor(3), Code { content: 0b001, len: 3 });
        assert_eq!(Code { content: 0b011, len: 3 }.successor(3), Code { content: 0b100, len: 3 });
    }

    #[test]
    fn successor_longer() {
        assert_eq!(Code::zero(1).successor(2), Code { content: 0b10, len: 2 });
        assert_eq!(Code { content: 0b10, len: 2 }.successor(4), Code { content: 0b1100, len: 4 });
        assert_eq!(Code { content: 0b0, len: 1 }.successor(3), Code { content: 0b100, len: 3 });
    }

    #[test]
    fn successor_wraps_as_counter() {
        assert_eq!(Code { content: 0b11, len: 2 }.successor(2), Code { content: 0, len: 2 });
        let top = Code { content: u128::MAX, len: Code::MAX_LEN };
        assert_eq!(top.successor(Code::MAX_LEN), Code::zero(Code::MAX_LEN));
    }

    #[test]
    fn prefix() {
        let a = Code { content: 0b10, len: 2 };
        assert!(a.is_prefix_of(&Code { content: 0b101, len: 3 }));
        assert!(a.is_prefix_of(&a));
        assert!(!a.is_prefix_of(&Code { content: 0b110, len: 3 }));
        assert!(!a.is_prefix_of(&Code { content: 0b1, len: 1 }));
        assert!(Code::zero(0).is_empty());
    }
}
