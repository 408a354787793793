#![doc = include_str!("../README.md")]

use std::collections::BTreeMap;
use std::borrow::Borrow;
use dyn_size_of::GetSize;

mod error;
pub use error::{Error, Result};
mod code;
pub use code::Code;
mod frequencies;
pub use frequencies::Frequencies;
mod tree;
pub use tree::{ProvisionalTree, TreeNode};
mod limit;
pub use limit::{limit_code_lengths, is_complete};
mod canonical;
pub use canonical::{assign_codes, canonical_order};
mod trie;
pub use trie::{Trie, TrieNode};
mod decoder;
pub use decoder::Decoder;
mod iterators;
pub use iterators::CodesIterator;
mod codec;
pub use codec::{Codec, Encoded};

/// Canonical Huffman coding of a set of values.
pub struct Coding<ValueType> {
    /// Values, indexed by symbol indices.
    pub values: Box<[ValueType]>,
    /// Lengths of the codewords, indexed by symbol indices.
    pub lengths: Box<[u32]>,
    /// Canonical codewords, indexed by symbol indices.
    pub codes: Box<[Code]>,
    /// Trie rebuilt from `codes`, used for decoding.
    pub trie: Trie
}

impl<ValueType: GetSize> dyn_size_of::GetSize for Coding<ValueType> {
    fn size_bytes_dyn(&self) -> usize {
        self.values.size_bytes_dyn() + self.lengths.size_bytes_dyn() + self.codes.size_bytes_dyn() + self.trie.size_bytes_dyn()
    }
    const USES_DYN_MEM: bool = true;
}

impl<ValueType> Coding<ValueType> {

    /// Constructs coding for the given `values`, where `weights` has to be of the same length as values
    /// and contain numbers of occurrences of corresponding values.
    ///
    /// If `max_code_length` is `0`, the code lengths are the depths of the leaves of Huffman tree.
    /// Otherwise they are corrected by [`limit_code_lengths`], which leaves them sorted,
    /// so the `i`-th value gets the `i`-th shortest length;
    /// `values` should therefore be ordered from the most frequent one.
    ///
    /// Fails if `values` is empty or the lengths cannot be limited to `max_code_length`.
    pub fn from_weights(values: Box<[ValueType]>, weights: &[u32], max_code_length: u32) -> Result<Self> {
        debug_assert_eq!(values.len(), weights.len());
        if values.is_empty() { return Err(Error::EmptyInput); }
        let mut lengths = ProvisionalTree::build(weights)?.code_lengths();
        log::debug!("{} symbols, longest code has {} bits", lengths.len(), lengths.iter().max().copied().unwrap_or(0));
        if max_code_length != 0 {
            let mut limited = lengths.into_vec();
            limit_code_lengths(&mut limited, max_code_length)?;
            log::debug!("code lengths limited to {} bits", max_code_length);
            lengths = limited.into_boxed_slice();
        }
        let codes = assign_codes(&lengths)?;
        let trie = Trie::from_codes(&codes);
        Ok(Self { values, lengths, codes, trie })
    }

    /// Returns the number of values (the size of the alphabet).
    #[inline] pub fn len(&self) -> usize { self.values.len() }

    /// Returns whether the alphabet is empty, which is never the case for successfully constructed codings.
    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Returns the codeword of the value with given `index`.
    pub fn code(&self, index: usize) -> Result<&Code> {
        self.codes.get(index).ok_or(Error::IndexOutOfRange { index, size: self.codes.len() })
    }

    /// Returns iterator over value-codeword pairs in the canonical order.
    #[inline] pub fn codes(&self) -> CodesIterator<'_, ValueType> {
        CodesIterator::new(self)
    }

    /// Returns the length of the longest codeword.
    pub fn max_code_length(&self) -> u32 {
        self.lengths.iter().max().copied().unwrap_or(0)
    }

    /// Returns total number of bits of the codewords of all values,
    /// each multiplied by the corresponding weight (indexed by symbol indices),
    /// i.e. the length of the encoded text with given numbers of occurrences.
    pub fn total_code_bits(&self, weights: &[u32]) -> u64 {
        self.lengths.iter().zip(weights).map(|(l, w)| *l as u64 * *w as u64).sum()
    }

    /// Returns decoder that allows for decoding a value.
    #[inline] pub fn decoder(&self) -> Decoder<'_, ValueType> {
        Decoder::new(self)
    }

    /// Calls `f` for each value decoded from `bits`.
    /// Returns the number of trailing bits that do not complete any codeword.
    fn for_each_decoded<F: FnMut(&ValueType)>(&self, bits: &[u8], mut f: F) -> usize {
        let mut decoder = self.decoder();
        for bit in bits {
            match decoder.consume(*bit) {
                DecodingResult::Value(v) => {
                    f(v);
                    decoder.reset();
                },
                DecodingResult::Incomplete => {},
                DecodingResult::Invalid => decoder.reset()
            }
        }
        decoder.consumed_bits() as usize
    }
}

impl<ValueType: Clone> Coding<ValueType> {
    /// Decodes `bits` (any non-zero element is treated as `1`).
    ///
    /// Trailing bits that do not complete any codeword are ignored, see [`Self::decode_exact`] for strict decoding.
    pub fn decode(&self, bits: &[u8]) -> Vec<ValueType> {
        let mut result = Vec::new();
        let trailing_bits = self.for_each_decoded(bits, |v| result.push(v.clone()));
        if trailing_bits != 0 {
            log::warn!("dropped {} trailing bits that do not complete any codeword", trailing_bits);
        }
        result
    }

    /// Decodes `bits` (any non-zero element is treated as `1`).
    ///
    /// Fails with [`Error::IncompleteCodeword`] if `bits` ends in the middle of a codeword.
    pub fn decode_exact(&self, bits: &[u8]) -> Result<Vec<ValueType>> {
        let mut result = Vec::new();
        match self.for_each_decoded(bits, |v| result.push(v.clone())) {
            0 => Ok(result),
            trailing_bits => Err(Error::IncompleteCodeword { trailing_bits })
        }
    }
}

impl<ValueType: Ord> Coding<ValueType> {
    /// Returns a map from values to their symbol indices.
    pub fn index_map(&self) -> BTreeMap<&ValueType, usize> {
        self.values.iter().enumerate().map(|(i, v)| (v, i)).collect()
    }

    /// Appends the codewords of all `symbols` to `output`.
    ///
    /// Fails with [`Error::UnknownSymbol`] if any of `symbols` is not in the alphabet.
    pub fn encode_into<Iter>(&self, symbols: Iter, output: &mut Vec<u8>) -> Result<()>
        where Iter: IntoIterator, Iter::Item: Borrow<ValueType>
    {
        let index_map = self.index_map();
        for symbol in symbols {
            let index = *index_map.get(symbol.borrow()).ok_or(Error::UnknownSymbol)?;
            self.codes[index].append_to(output);
        }
        Ok(())
    }
}

impl<ValueType: Ord + Clone> Coding<ValueType> {

    /// Constructs coding for given `frequencies` of values.
    ///
    /// If `max_code_length` is `0`, values are indexed in the order exposed by [`Frequencies::into_unsorted`],
    /// otherwise from the most to the least frequent one (see [`Frequencies::into_weight_descending`])
    /// and the code lengths are limited to `max_code_length` (see [`Self::from_weights`]).
    pub fn from_frequencies<F: Frequencies<Value=ValueType>>(frequencies: F, max_code_length: u32) -> Result<Self> {
        let (values, freq) = if max_code_length == 0 {
            frequencies.into_unsorted()
        } else {
            frequencies.into_weight_descending()
        };
        Self::from_weights(values, &freq, max_code_length)
    }

    /// Counts occurrences of all values exposed by `iter` and constructs coding for obtained frequencies of values.
    pub fn from_iter<Iter>(iter: Iter, max_code_length: u32) -> Result<Self>
        where Iter: IntoIterator, Iter::Item: Borrow<ValueType>
    {
        Self::from_frequencies(BTreeMap::<ValueType, u32>::with_counted_all(iter), max_code_length)
    }

    /// Returns a map from values to their codes.
    pub fn codes_for_values(&self) -> BTreeMap<ValueType, Code> {
        self.values.iter().cloned().zip(self.codes.iter().copied()).collect()
    }

    /// Returns a map from values to the lengths of their codes.
    pub fn code_lengths_for_values(&self) -> BTreeMap<ValueType, u32> {
        self.values.iter().cloned().zip(self.lengths.iter().copied()).collect()
    }
}

/// Result of bit decoding returned by `consume` method of [`Decoder`].
#[derive(PartialOrd, Ord, PartialEq, Eq, Debug, Clone, Hash)]
pub enum DecodingResult<T> {
    /// Completed value that has been successfully decoded.
    Value(T),
    /// The codeword is incomplete and the next bit is needed.
    Incomplete,
    /// The codeword is invalid.
    Invalid
}

impl<T> From<Option<T>> for DecodingResult<T> {
    #[inline(always)] fn from(option: Option<T>) -> Self {
        if let Some(v) = option { DecodingResult::Value(v) } else { DecodingResult::Invalid }
    }
}
