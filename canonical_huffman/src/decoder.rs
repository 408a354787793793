use crate::{Coding, DecodingResult, Trie};

/// Decoder that decodes a value for given code, consuming one bit at a time.
///
/// Time complexity of decoding the whole code is *O(length of the code)*.
///
/// Memory complexity: *O(1)*
pub struct Decoder<'huff, ValueType> {
    coding: &'huff Coding<ValueType>,
    /// Current node of the trie.
    node: u32,
    /// Number of bits consumed since construction or last reset.
    consumed: u32
}

impl<'huff, ValueType> Decoder<'huff, ValueType> {
    /// Constructs decoder for given `coding`.
    pub fn new(coding: &'huff Coding<ValueType>) -> Self {
        Self { coding, node: Trie::ROOT, consumed: 0 }
    }

    /// Resets `self` to initial state and makes it ready to decode next value.
    #[inline] pub fn reset(&mut self) {
        self.node = Trie::ROOT;
        self.consumed = 0;
    }

    /// Returns the number of bits consumed since construction or last reset.
    #[inline(always)] pub fn consumed_bits(&self) -> u32 { self.consumed }

    /// Consumes a `bit` of the codeword (any non-zero value is treated as `1`) and returns:
    /// - a value if the given `bit` finishes the codeword;
    /// - an [`DecodingResult::Incomplete`] if the codeword is incomplete and the next bit is needed;
    /// - or [`DecodingResult::Invalid`] if no codeword starts with the consumed bits
    ///     (possible only for tries built from incomplete codes).
    ///
    /// If the alphabet consists of a single value, each bit is the whole codeword of this value.
    pub fn consume(&mut self, bit: u8) -> DecodingResult<&'huff ValueType> {
        let trie = &self.coding.trie;
        self.consumed += 1;
        if trie.is_root_leaf() {
            return self.coding.values.first().into();
        }
        match trie.child(self.node, bit) {
            Some(child) => {
                self.node = child;
                match trie.index(child) {
                    Some(index) => self.coding.values.get(index as usize).into(),
                    None => DecodingResult::Incomplete
                }
            }
            None => DecodingResult::Invalid
        }
    }

    /// Tries to decode and return a single value from the `bits` iterator,
    /// consuming as many bits as needed.
    /// If successful, it [resets](Self::reset) `self` to be ready to decode the next value.
    ///
    /// Returns [`DecodingResult::Incomplete`] if the iterator exhausted before the value was decoded
    /// ([`Self::consumed_bits`] enables checking if the iterator yielded any bit before exhausting).
    /// Returns [`DecodingResult::Invalid`] if obtained invalid codeword.
    pub fn decode_next<I: Iterator<Item = u8>>(&mut self, bits: &mut I) -> DecodingResult<&'huff ValueType> {
        for bit in bits {
            match self.consume(bit) {
                DecodingResult::Incomplete => {},
                DecodingResult::Value(v) => {
                    self.reset();
                    return DecodingResult::Value(v);
                },
                DecodingResult::Invalid => { return DecodingResult::Invalid; }
            }
        }
        DecodingResult::Incomplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;

    #[test]
    fn consume_3sym() {
        //  /\
        // a /\
        //   bc
        let coding = Coding::from_frequencies(btreemap!('a' => 100, 'b' => 50, 'c' => 10), 0).unwrap();
        let mut decoder_for_a = coding.decoder();
        assert_eq!(decoder_for_a.consume(0), DecodingResult::Value(&'a'));
        let mut decoder_for_b = coding.decoder();
        assert_eq!(decoder_for_b.consume(1), DecodingResult::Incomplete);
        assert_eq!(decoder_for_b.consume(0), DecodingResult::Value(&'b'));
        let mut decoder_for_c = coding.decoder();
        assert_eq!(decoder_for_c.consume(1), DecodingResult::Incomplete);
        assert_eq!(decoder_for_c.consume(1), DecodingResult::Value(&'c'));
        assert_eq!(decoder_for_c.consumed_bits(), 2);
    }

    #[test]
    fn decode_next_resets() {
        let coding = Coding::from_frequencies(btreemap!('a' => 100, 'b' => 50, 'c' => 10), 0).unwrap();
        let mut bits = [1u8, 1, 0, 1, 0, 1].into_iter();
        let mut decoder = coding.decoder();
        assert_eq!(decoder.decode_next(&mut bits), DecodingResult::Value(&'c'));
        assert_eq!(decoder.decode_next(&mut bits), DecodingResult::Value(&'a'));
        assert_eq!(decoder.decode_next(&mut bits), DecodingResult::Value(&'b'));
        assert_eq!(decoder.decode_next(&mut bits), DecodingResult::Incomplete);
        assert_eq!(decoder.consumed_bits(), 1);
    }

    #[test]
    fn single_value() {
        let coding = Coding::from_frequencies(btreemap!('x' => 3), 0).unwrap();
        let mut decoder = coding.decoder();
        assert_eq!(decoder.consume(0), DecodingResult::Value(&'x'));
        assert_eq!(decoder.consume(1), DecodingResult::Value(&'x'));
    }

    #[test]
    fn invalid_for_incomplete_trie() {
        let codes = [crate::Code { content: 0b0, len: 1 }, crate::Code { content: 0b10, len: 2 }];
        let coding = Coding {
            values: vec!['a', 'b'].into_boxed_slice(),
            lengths: vec![1, 2].into_boxed_slice(),
            trie: Trie::from_codes(&codes),
            codes: codes.into(),
        };
        let mut decoder = coding.decoder();
        assert_eq!(decoder.consume(1), DecodingResult::Incomplete);
        assert_eq!(decoder.consume(1), DecodingResult::Invalid);
    }
}
