//! HashTable: fixed-capacity word -> meaning table with separate chaining.
//!
//! The bucket count is chosen once from the expected number of entries and
//! never changes, so an entry's bucket computed at insert time stays valid
//! for the table's lifetime. Each bucket is a `ChainedList<Entry>` that is
//! only ever appended to.

use crate::chained_list::{self, ChainedList};
use log::trace;

/// Returned by [`HashTable::lookup`] when no entry matches.
pub const NOT_FOUND: &str = "NOT FOUND";

const SEED: u64 = 7;
const MULTIPLIER: u64 = 31;

/// A stored word and its meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub meaning: String,
}

/// Maps a key to a 64-bit hash. The table reduces it modulo its capacity.
///
/// Implementations must be deterministic: the same key always yields the
/// same hash for a given hasher value.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u64;
}

/// Default hasher: `7 + 31 * sum(chars)`, accumulated with wrapping `u64`
/// arithmetic so any key length is defined.
#[derive(Copy, Clone, Debug, Default)]
pub struct WordHash;

impl KeyHasher for WordHash {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        key.chars().fold(SEED, |hash, c| {
            hash.wrapping_add(u64::from(u32::from(c)).wrapping_mul(MULTIPLIER))
        })
    }
}

#[derive(Clone)]
pub struct HashTable<H = WordHash> {
    hasher: H,
    buckets: Box<[ChainedList<Entry>]>,
    len: usize,
}

impl HashTable<WordHash> {
    /// Table with `2 * expected_entries` buckets (at least one).
    pub fn new(expected_entries: usize) -> Self {
        Self::with_hasher(expected_entries, WordHash)
    }
}

impl<H: KeyHasher> HashTable<H> {
    pub fn with_hasher(expected_entries: usize, hasher: H) -> Self {
        let capacity = expected_entries.saturating_mul(2).max(1);
        let buckets: Box<[ChainedList<Entry>]> =
            (0..capacity).map(|_| ChainedList::new()).collect();
        trace!(
            "allocated {} buckets for {} expected entries",
            capacity,
            expected_entries
        );
        Self {
            hasher,
            buckets,
            len: 0,
        }
    }

    /// Number of buckets. Fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Bucket that `word` lives in, always in `[0, capacity)`.
    pub fn bucket_index(&self, word: &str) -> usize {
        // Capacity fits in usize, so the remainder does too.
        (self.hasher.hash_key(word) % self.capacity() as u64) as usize
    }

    pub fn bucket(&self, index: usize) -> Option<&ChainedList<Entry>> {
        self.buckets.get(index)
    }

    /// Append `word -> meaning` to its bucket. Existing entries for the same
    /// word are kept; lookups keep returning the earliest one.
    pub fn insert(&mut self, word: impl Into<String>, meaning: impl Into<String>) {
        let word = word.into();
        let index = self.bucket_index(&word);
        let bucket = &mut self.buckets[index];
        if !bucket.is_empty() {
            trace!(
                "collision on bucket {} ({} entries) inserting {:?}",
                index,
                bucket.len(),
                word
            );
        }
        bucket.push_back(Entry {
            word,
            meaning: meaning.into(),
        });
        self.len += 1;
    }

    /// Meaning of the earliest entry for `word`, if any.
    pub fn get(&self, word: &str) -> Option<&str> {
        let bucket = &self.buckets[self.bucket_index(word)];
        if bucket.is_empty() {
            return None;
        }
        bucket
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.meaning.as_str())
    }

    /// Meaning of the earliest entry for `word`, or [`NOT_FOUND`].
    pub fn lookup(&self, word: &str) -> &str {
        self.get(word).unwrap_or(NOT_FOUND)
    }

    /// Every meaning stored for `word`, oldest first.
    pub fn get_all<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.buckets[self.bucket_index(word)]
            .iter()
            .filter(move |e| e.word == word)
            .map(|e| e.meaning.as_str())
    }

    /// Number of entries stored for `word`.
    pub fn count(&self, word: &str) -> usize {
        self.get_all(word).count()
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// All entries, bucket by bucket, each bucket in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
        }
    }
}

impl<H, K, V> Extend<(K, V)> for HashTable<H>
where
    H: KeyHasher,
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (word, meaning) in iter {
            self.insert(word, meaning);
        }
    }
}

impl<H> core::fmt::Debug for HashTable<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.buckets.len())
            .field("len", &self.len)
            .field("buckets", &self.buckets)
            .finish()
    }
}

/// Iterator over every entry of a [`HashTable`].
pub struct Iter<'a> {
    buckets: core::slice::Iter<'a, ChainedList<Entry>>,
    current: Option<chained_list::Iter<'a, Entry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|it| it.next()) {
                return Some(entry);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }
}

impl<'a, H: KeyHasher> IntoIterator for &'a HashTable<H> {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
