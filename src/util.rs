//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [CandidateSet] used for
//! storing the candidate values of cells.

use std::fmt::{self, Debug, Formatter};
use std::slice::Iter;

/// A set of candidate numbers that is implemented as a bit vector. Each
/// number greater than or equal to 1 is represented by one bit in a vector of
/// words, which grows on demand. Iteration yields the contained numbers in
/// ascending order.
///
/// Equality only considers the contained numbers, not the capacity of the
/// backing vector, so sets that went through different insertion histories
/// compare equal whenever they contain the same numbers.
#[derive(Clone)]
pub struct CandidateSet {
    len: usize,
    content: Vec<u64>
}

/// An enumeration of the errors that can happen when using a [CandidateSet].
#[derive(Debug, Eq, PartialEq)]
pub enum CandidateSetError {

    /// Indicates that it was attempted to insert or remove the number 0,
    /// which can never be a candidate.
    ZeroValue
}

/// Syntactic sugar for `Result<V, CandidateSetError>`.
pub type CandidateSetResult<V> = Result<V, CandidateSetError>;

/// An iterator over the numbers contained in a [CandidateSet], in ascending
/// order.
pub struct CandidateSetIter<'a> {
    offset: usize,
    word: u64,
    rest: Iter<'a, u64>
}

impl<'a> CandidateSetIter<'a> {
    fn new(set: &'a CandidateSet) -> CandidateSetIter<'a> {
        let mut rest = set.content.iter();
        let word = rest.next().copied().unwrap_or(0);

        CandidateSetIter {
            offset: 0,
            word,
            rest
        }
    }
}

impl<'a> Iterator for CandidateSetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.word == 0 {
            self.word = *self.rest.next()?;
            self.offset += 64;
        }

        let bit_index = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(self.offset + bit_index + 1)
    }
}

fn compute_index(number: usize) -> CandidateSetResult<(usize, u64)> {
    if number == 0 {
        Err(CandidateSetError::ZeroValue)
    }
    else {
        let bit = number - 1;
        Ok((bit >> 6, 1u64 << (bit & 63)))
    }
}

fn significant(content: &[u64]) -> &[u64] {
    let mut end = content.len();

    while end > 0 && content[end - 1] == 0 {
        end -= 1;
    }

    &content[..end]
}

impl CandidateSet {

    /// Creates a new, empty `CandidateSet`.
    pub fn new() -> CandidateSet {
        CandidateSet {
            len: 0,
            content: Vec::new()
        }
    }

    /// Creates a new `CandidateSet` that contains all numbers from 1 to `max`
    /// (both inclusive). `max` equal to 0 yields an empty set.
    pub fn full(max: usize) -> CandidateSet {
        let full_words = max >> 6;
        let mut content = vec![!0u64; full_words];
        let remainder = max & 63;

        if remainder > 0 {
            content.push((1u64 << remainder) - 1);
        }

        CandidateSet {
            len: max,
            content
        }
    }

    /// Creates a new `CandidateSet` that contains exactly the given number.
    ///
    /// # Errors
    ///
    /// If `number` is 0. In that case, `CandidateSetError::ZeroValue` is
    /// returned.
    pub fn singleton(number: usize) -> CandidateSetResult<CandidateSet> {
        let mut result = CandidateSet::new();
        result.insert(number)?;
        Ok(result)
    }

    /// Indicates whether this set contains the given number. For 0, `false`
    /// is always returned.
    pub fn contains(&self, number: usize) -> bool {
        if let Ok((word_index, mask)) = compute_index(number) {
            word_index < self.content.len() &&
                self.content[word_index] & mask > 0
        }
        else {
            false
        }
    }

    /// Inserts the given number into this set, such that
    /// [CandidateSet::contains] returns `true` for it afterwards. The backing
    /// vector grows if necessary.
    ///
    /// This method returns `true` if the set has changed (i.e. the number was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `number` is 0. In that case, `CandidateSetError::ZeroValue` is
    /// returned.
    pub fn insert(&mut self, number: usize) -> CandidateSetResult<bool> {
        let (word_index, mask) = compute_index(number)?;

        if word_index >= self.content.len() {
            self.content.resize(word_index + 1, 0);
        }

        let word = &mut self.content[word_index];

        if *word & mask == 0 {
            *word |= mask;
            self.len += 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes the given number from this set, such that
    /// [CandidateSet::contains] returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the number was
    /// present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `number` is 0. In that case, `CandidateSetError::ZeroValue` is
    /// returned.
    pub fn remove(&mut self, number: usize) -> CandidateSetResult<bool> {
        let (word_index, mask) = compute_index(number)?;

        if word_index >= self.content.len() {
            return Ok(false);
        }

        let word = &mut self.content[word_index];

        if *word & mask > 0 {
            *word &= !mask;
            self.len -= 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Returns an iterator over the numbers contained in this set in
    /// ascending order.
    pub fn iter(&self) -> CandidateSetIter<'_> {
        CandidateSetIter::new(self)
    }

    /// Indicates whether this set is empty, i.e. contains no numbers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Default for CandidateSet {
    fn default() -> CandidateSet {
        CandidateSet::new()
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &CandidateSet) -> bool {
        significant(&self.content) == significant(&other.content)
    }
}

impl Eq for CandidateSet { }

impl Debug for CandidateSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Creates a new [CandidateSet] that contains the specified elements,
/// provided as a comma-separated list. Without arguments, an empty set is
/// created.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_inference::candidates;
///
/// let set = candidates!(2, 4);
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// assert!(set.contains(4));
/// ```
#[macro_export]
macro_rules! candidates {
    () => {
        $crate::util::CandidateSet::new()
    };

    ($($es:expr),+ $(,)?) => {
        {
            let mut set = $crate::util::CandidateSet::new();
            $(set.insert($es).unwrap();)+
            set
        }
    };
}
