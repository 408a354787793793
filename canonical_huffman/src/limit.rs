//! Heuristic limiting of the code lengths.

use crate::{Error, Result};

/// Rewrites the multiset of code `lengths` so that no length exceeds `max_code_length`,
/// keeping the Kraft sum unchanged.
///
/// `lengths` is sorted in non-decreasing order in place, also when the call fails.
/// If there are at most 3 lengths, they are only checked against `max_code_length`.
/// Otherwise, while the longest length exceeds the limit, the two longest lengths (which must be equal)
/// are removed together with the longest of the remaining lengths not exceeding `max_code_length-1`
/// (let it be *x*), and the lengths *x+1*, *x+1* and *(removed longest)-1* are inserted.
///
/// This greedy heuristic neither minimizes the weighted code length
/// nor is guaranteed to succeed whenever a limited code exists.
/// It fails with [`Error::LengthLimitInfeasible`].
pub fn limit_code_lengths(lengths: &mut Vec<u32>, max_code_length: u32) -> Result<()> {
    let infeasible = |lengths: &[u32]| Error::LengthLimitInfeasible {
        max_code_length,
        longest: lengths.last().copied().unwrap_or(0)
    };
    if lengths.is_empty() { return Err(Error::EmptyInput); }
    lengths.sort_unstable();
    if lengths.len() <= 3 {
        return if lengths[lengths.len()-1] <= max_code_length { Ok(()) } else { Err(infeasible(lengths)) };
    }
    while let Some(&longest) = lengths.last().filter(|l| **l > max_code_length) {
        lengths.pop();
        match lengths.pop() {
            Some(sibling) if sibling == longest => {},
            Some(sibling) => {
                lengths.push(sibling);
                lengths.push(longest);
                return Err(infeasible(lengths));
            }
            None => {
                lengths.push(longest);
                return Err(infeasible(lengths));
            }
        }
        let Some(donor_index) = lengths.iter().rposition(|l| *l < max_code_length) else {
            lengths.push(longest);
            lengths.push(longest);
            return Err(infeasible(lengths));
        };
        let donor = lengths.remove(donor_index);
        log::trace!("limiting: pair of {} and donor {} replaced by {}, {}, {}", longest, donor, donor+1, donor+1, longest-1);
        lengths.extend([donor + 1, donor + 1, longest - 1]);
        lengths.sort_unstable();
    }
    Ok(())
}

/// Returns whether the given code `lengths` satisfy the Kraft equality, i.e. the sum of *2^-length* equals 1.
///
/// The check is exact: it counts the lengths at each level
/// and verifies that, from the deepest level upward, they pair up into a single root.
pub fn is_complete(lengths: &[u32]) -> bool {
    let Some(&max) = lengths.iter().max() else { return false; };
    if lengths.iter().any(|l| *l == 0) { return false; }
    let mut count_at_level = vec![0u64; max as usize + 1];
    for l in lengths { count_at_level[*l as usize] += 1; }
    let mut nodes = 0u64;   // nodes at the currently processed level
    for level in (1..=max as usize).rev() {
        nodes += count_at_level[level];
        if nodes % 2 != 0 { return false; }
        nodes /= 2;
    }
    nodes == 1
}
