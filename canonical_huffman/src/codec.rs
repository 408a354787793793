//! Encoding and decoding of whole symbol sequences.

use std::collections::BTreeMap;
use crate::{Coding, Frequencies, Result};

/// Encoder and decoder of symbol sequences with canonical Huffman codes,
/// optionally bounded to a maximum codeword length.
///
/// `Codec` only keeps the configuration. Every call to [`Self::encode`] counts the symbols
/// and builds a new [`Coding`], which is returned together with the bits
/// and is needed to [decode](Self::decode) them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    /// The maximum length of a codeword, `0` for unlimited.
    pub max_code_length: u32
}

/// Bits of the encoded sequence, one element (`0` or `1`) per bit,
/// with the coding required to decode them.
pub struct Encoded<ValueType> {
    /// Coding used to encode the sequence.
    pub coding: Coding<ValueType>,
    /// Concatenated codewords of all symbols of the sequence.
    pub bits: Box<[u8]>
}

impl<ValueType> Encoded<ValueType> {
    /// Returns the number of bits.
    #[inline] pub fn len(&self) -> usize { self.bits.len() }

    /// Returns whether there are no bits.
    #[inline] pub fn is_empty(&self) -> bool { self.bits.is_empty() }
}

impl Codec {
    /// Returns codec that does not limit the lengths of codewords.
    #[inline] pub fn new() -> Self { Self::default() }

    /// Returns codec that limits the lengths of codewords to `max_code_length` (`0` for unlimited).
    #[inline] pub fn with_max_code_length(max_code_length: u32) -> Self { Self { max_code_length } }

    /// Returns whether the lengths of codewords are limited.
    #[inline] pub fn is_length_limited(&self) -> bool { self.max_code_length != 0 }

    /// Encodes `symbols`.
    ///
    /// Fails with [`Error::EmptyInput`](crate::Error::EmptyInput) if `symbols` is empty
    /// and with [`Error::LengthLimitInfeasible`](crate::Error::LengthLimitInfeasible)
    /// if the lengths of codewords cannot be limited.
    pub fn encode<ValueType: Ord + Clone>(&self, symbols: &[ValueType]) -> Result<Encoded<ValueType>> {
        let frequencies = BTreeMap::<ValueType, u32>::with_counted_all(symbols);
        log::debug!("encoding {} symbols over alphabet of size {} (entropy {:.3} bits), max code length {}",
            symbols.len(), frequencies.number_of_values(), frequencies.entropy(), self.max_code_length);
        let (values, weights) = if self.is_length_limited() {
            frequencies.into_weight_descending()
        } else {
            frequencies.into_unsorted()
        };
        let coding = Coding::from_weights(values, &weights, self.max_code_length)?;
        let mut bits = Vec::with_capacity(coding.total_code_bits(&weights) as usize);
        coding.encode_into(symbols, &mut bits)?;
        Ok(Encoded { coding, bits: bits.into_boxed_slice() })
    }

    /// Decodes the bits of `encoded`.
    ///
    /// Trailing bits that do not complete any codeword are ignored.
    #[inline] pub fn decode<ValueType: Clone>(&self, encoded: &Encoded<ValueType>) -> Vec<ValueType> {
        encoded.coding.decode(&encoded.bits)
    }
}
