use std::iter::FusedIterator;
use crate::{canonical_order, Code, Coding};

/// Iterator over value-codeword pairs, in the order of canonical assignment,
/// i.e. by code length and then by symbol index.
/// Codewords of equal lengths exposed by the iterator are consecutive integers.
#[derive(Clone)]
pub struct CodesIterator<'coding, ValueType> {
    coding: &'coding Coding<ValueType>,
    /// Symbol indices in the canonical order.
    order: Box<[u32]>,
    /// Position in `order` of the pair about to be exposed.
    position: usize
}

impl<'coding, ValueType> CodesIterator<'coding, ValueType> {
    pub fn new(coding: &'coding Coding<ValueType>) -> Self {
        Self {
            coding,
            order: canonical_order(&coding.lengths),
            position: 0
        }
    }
}

impl<'coding, ValueType> FusedIterator for CodesIterator<'coding, ValueType> {}

impl<'coding, ValueType> ExactSizeIterator for CodesIterator<'coding, ValueType> {
    fn len(&self) -> usize {
        self.order.len() - self.position
    }
}

impl<'coding, ValueType> Iterator for CodesIterator<'coding, ValueType> {
    type Item = (&'coding ValueType, &'coding Code);

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.order.get(self.position)? as usize;
        self.position += 1;
        Some((&self.coding.values[index], &self.coding.codes[index]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}
