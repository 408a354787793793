//! Tools to count frequencies of values.

use std::collections::BTreeMap;
use std::cmp::Reverse;
use fsum::FSum;
use co_sort::{Permutation, co_sort};
use std::borrow::Borrow;

/// Types that implement this trait can count number of occurrences of values.
pub trait Frequencies {
    /// Type of value.
    type Value;

    /// Constructs `Self` that counts occurrences of all values exposed by `iter`.
    fn with_counted_all<Iter: IntoIterator>(iter: Iter) -> Self
        where Iter::Item: Borrow<Self::Value>, Self: Default, Self::Value: Clone
    {
        let mut result = Self::default();
        result.count_all(iter);
        return result;
    }

    /// Adds one to the stored number of `value` occurrences.
    fn count(&mut self, value: Self::Value);

    /// Calls `count` for all items exposed by `iter`.
    fn count_all<Iter: IntoIterator>(&mut self, iter: Iter) where Iter::Item: Borrow<Self::Value>, Self::Value: Clone {
        for v in iter { self.count(v.borrow().clone()); }
    }

    /// Returns the number of distinct values counted so far.
    fn number_of_values(&self) -> usize;

    /// Returns the Shannon entropy of the values counted so far.
    fn entropy(&self) -> f64;

    /// Converts `self` to the pair of boxed slices that contain
    /// distinct values and numbers of their occurrences respectively.
    fn into_unsorted(self) -> (Box<[Self::Value]>, Box<[u32]>);

    /// Converts `self` to the pair of boxed slices that contain
    /// distinct values and numbers of their occurrences respectively,
    /// ordered by the number of occurrences descending and then by the value descending.
    fn into_weight_descending(self) -> (Box<[Self::Value]>, Box<[u32]>) where Self: Sized, Self::Value: Ord + Clone {
        let (mut values, mut freq) = self.into_unsorted();
        let mut order: Box<[_]> = values.iter().zip(freq.iter())
            .map(|(v, f)| Reverse((*f, v.clone())))
            .collect();
        co_sort!(order, values, freq);
        (values, freq)
    }
}

impl<Value: Ord> Frequencies for BTreeMap<Value, u32> {
    type Value = Value;

    fn count(&mut self, value: Value) {
        *self.entry(value).or_insert(0) += 1;
    }

    #[inline] fn number_of_values(&self) -> usize { self.len() }

    fn entropy(&self) -> f64 {
        let sum = self.values().map(|v| *v as u64).sum::<u64>() as f64;
        - FSum::with_all(self.values()
            .map(|v| { let p = *v as f64 / sum; p * p.log2()})).value()
    }

    /// Returns values in ascending order.
    fn into_unsorted(self) -> (Box<[Self::Value]>, Box<[u32]>) {
        let len = self.len();
        let mut freq = Vec::<u32>::with_capacity(len);
        let mut values = Vec::<Self::Value>::with_capacity(len);
        for (val, fr) in self {
            freq.push(fr);
            values.push(val);
        }
        (values.into_boxed_slice(), freq.into_boxed_slice())
    }
}
