use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, BuildHasherDefault, Hasher};

use crate::config::VISITED_BUCKETS;
use crate::state::{State, MAX_ENCODED_LEN};

/// Average chain length at which the bucket array doubles.
const MAX_LOAD: usize = 2;

/// Multiplicative rolling hash over the canonical encoding.
#[derive(Debug, Clone, Copy)]
pub struct DjbHasher(u32);

impl Default for DjbHasher {
    fn default() -> Self {
        DjbHasher(5831)
    }
}

impl Hasher for DjbHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.wrapping_mul(33).wrapping_add(u32::from(b));
        }
    }

    fn finish(&self) -> u64 {
        u64::from(self.0)
    }
}

pub type DjbBuildHasher = BuildHasherDefault<DjbHasher>;

/// Stable handle of a state stored in a `VisitedSet`.
///
/// Handles are assigned in insertion order starting from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    pub(crate) fn from_index(index: usize) -> StateId {
        debug_assert!(index <= u32::MAX as usize, "state id overflow: {}", index);
        StateId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

struct Entry {
    state: State,
    hash: u64,
    next: Option<StateId>,
}

/// Set of already seen states with chained buckets.
///
/// The set owns the states, so it doubles as the arena
/// the search refers to by `StateId`.
pub struct VisitedSet<S = DjbBuildHasher> {
    hash_builder: S,
    buckets: Vec<Option<StateId>>,
    entries: Vec<Entry>,
}

impl VisitedSet<DjbBuildHasher> {
    pub fn new() -> Self {
        Self::with_hasher(DjbBuildHasher::default())
    }
}

impl Default for VisitedSet<DjbBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher> VisitedSet<S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_buckets_and_hasher(VISITED_BUCKETS, hash_builder)
    }

    pub fn with_buckets_and_hasher(buckets: usize, hash_builder: S) -> Self {
        assert!(buckets.is_power_of_two());
        VisitedSet {
            hash_builder,
            buckets: vec![None; buckets],
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, state: &State) -> bool {
        self.find(state, self.hash(state)).is_some()
    }

    /// Returns `None` if an equal state is already present,
    /// the new state is dropped in that case.
    pub fn insert(&mut self, state: State) -> Option<StateId> {
        let hash = self.hash(&state);
        if self.find(&state, hash).is_some() {
            return None;
        }

        if self.entries.len() >= self.buckets.len() * MAX_LOAD {
            self.grow();
        }

        let id = StateId::from_index(self.entries.len());
        let bucket = self.bucket(hash);
        self.entries.push(Entry {
            state,
            hash,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(id);
        Some(id)
    }

    /// Panics if the id comes from a different set.
    pub fn get(&self, id: StateId) -> &State {
        &self.entries[id.index()].state
    }

    fn hash(&self, state: &State) -> u64 {
        let mut buf = [0; MAX_ENCODED_LEN];
        let len = state.encode_into(&mut buf);
        let mut hasher = self.hash_builder.build_hasher();
        hasher.write(&buf[..len]);
        hasher.finish()
    }

    fn bucket(&self, hash: u64) -> usize {
        hash as usize & (self.buckets.len() - 1)
    }

    fn find(&self, state: &State, hash: u64) -> Option<StateId> {
        let mut cur = self.buckets[self.bucket(hash)];
        while let Some(id) = cur {
            let entry = &self.entries[id.index()];
            // equal hashes are not enough, always compare the blocks
            if entry.hash == hash && entry.state == *state {
                return Some(id);
            }
            cur = entry.next;
        }
        None
    }

    fn grow(&mut self) {
        let len = self.buckets.len() * 2;
        trace!("Growing visited set to {} buckets", len);
        self.buckets = vec![None; len];
        for (i, entry) in self.entries.iter_mut().enumerate() {
            let bucket = entry.hash as usize & (len - 1);
            entry.next = self.buckets[bucket];
            self.buckets[bucket] = Some(StateId::from_index(i));
        }
    }
}

impl<S> Debug for VisitedSet<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitedSet")
            .field("buckets", &self.buckets.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}
