//! Assignment of canonical codewords to code lengths.

use crate::{Code, Error, Result};

/// Returns indices of `lengths` sorted by length, the indices of equal lengths keep their relative order.
/// This is the order in which [`assign_codes`] enumerates the codewords.
pub fn canonical_order(lengths: &[u32]) -> Box<[u32]> {
    let mut order: Box<[u32]> = (0..lengths.len() as u32).collect();
    order.sort_by_key(|i| lengths[*i as usize]);   // stable
    order
}

/// Assigns canonical codewords to the given code `lengths` (indexed by symbol indices)
/// and returns them indexed the same way.
///
/// The symbols are visited in the [`canonical_order`]. The first one gets the all-zero codeword.
/// Each next one gets the codeword of the previous one incremented by one and,
/// if it is longer, extended with zeros to its length (see [`Code::successor`]).
pub fn assign_codes(lengths: &[u32]) -> Result<Box<[Code]>> {
    if lengths.is_empty() { return Err(Error::EmptyInput); }
    if let Some(len) = lengths.iter().copied().find(|l| *l > Code::MAX_LEN) {
        return Err(Error::CodeTooLong { len });
    }
    let order = canonical_order(lengths);
    let mut codes = vec![Code::default(); lengths.len()].into_boxed_slice();
    let mut previous = Code::zero(lengths[order[0] as usize]);
    codes[order[0] as usize] = previous;
    for index in order[1..].iter().map(|i| *i as usize) {
        previous = previous.successor(lengths[index]);
        codes[index] = previous;
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(content: u128, len: u32) -> Code { Code { content, len } }

    #[test]
    fn three_symbols() {
        assert_eq!(assign_codes(&[1, 2, 2]).unwrap().as_ref(), [c(0b0, 1), c(0b10, 2), c(0b11, 2)]);
        assert_eq!(assign_codes(&[2, 1, 2]).unwrap().as_ref(), [c(0b10, 2), c(0b0, 1), c(0b11, 2)]);
    }

    #[test]
    fn single_symbol() {
        assert_eq!(assign_codes(&[1]).unwrap().as_ref(), [c(0, 1)]);
    }

    #[test]
    fn two_symbols() {
        assert_eq!(assign_codes(&[1, 1]).unwrap().as_ref(), [c(0, 1), c(1, 1)]);
    }

    #[test]
    fn gaps_between_lengths() {
        assert_eq!(assign_codes(&[4, 1, 3, 4, 2]).unwrap().as_ref(),
                   [c(0b1110, 4), c(0b0, 1), c(0b110, 3), c(0b1111, 4), c(0b10, 2)]);
    }

    #[test]
    fn order_is_stable() {
        assert_eq!(canonical_order(&[3, 1, 3, 2, 3, 1]).as_ref(), [1, 5, 3, 0, 2, 4]);
    }

    #[test]
    fn errors() {
        assert_eq!(assign_codes(&[]), Err(Error::EmptyInput));
        assert_eq!(assign_codes(&[1, 129]), Err(Error::CodeTooLong { len: 129 }));
    }
}
