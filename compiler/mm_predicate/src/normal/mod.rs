//! Interned canonical predicate strings.
//!
//! A [`NormalPredicate`] is a `Copy` handle to a string stored in a
//! process-wide sharded table. Two predicates that recognize the same set
//! normalize to the same string, so handle equality is set equality.
//! Interned strings are leaked and live for the rest of the process.

use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashSet;

const NUM_SHARDS: usize = 16;

struct InternTable {
    shards: [RwLock<FxHashSet<&'static str>>; NUM_SHARDS],
}

impl InternTable {
    fn new() -> Self {
        InternTable {
            shards: std::array::from_fn(|_| RwLock::new(FxHashSet::default())),
        }
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % NUM_SHARDS
    }

    fn intern(&self, s: &str) -> &'static str {
        let shard = &self.shards[Self::shard_for(s)];

        // Fast path
        if let Some(&interned) = shard.read().get(s) {
            return interned;
        }

        let mut guard = shard.write();
        // Another thread may have won the race
        if let Some(&interned) = guard.get(s) {
            return interned;
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.insert(leaked);
        leaked
    }

    fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }
}

static TABLE: LazyLock<InternTable> = LazyLock::new(InternTable::new);

/// The canonical string form of a predicate.
///
/// Only the normalizer creates these, so every value is already in
/// canonical form: alternatives sorted, deduplicated and free of redundancy,
/// captures erased to `*`/`**`, comments stripped.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalPredicate(&'static str);

impl NormalPredicate {
    /// The universal set, recognizing every string.
    pub const ALL: NormalPredicate = NormalPredicate("**");

    /// The empty set, recognizing no string.
    pub const NONE: NormalPredicate = NormalPredicate("∅");

    /// Intern a string already known to be in canonical form.
    pub(crate) fn intern(canonical: &str) -> Self {
        match canonical {
            "**" => Self::ALL,
            "∅" => Self::NONE,
            other => NormalPredicate(TABLE.intern(other)),
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        self.0
    }

    #[inline]
    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// True when this predicate has more than one alternative.
    #[inline]
    pub fn is_alternation(self) -> bool {
        self.0.contains('|')
    }

    /// The `|`-separated alternatives; `∅` has none.
    pub fn alternatives(self) -> Vec<&'static str> {
        if self.is_none() {
            Vec::new()
        } else {
            self.0.split('|').collect()
        }
    }

    /// Number of distinct non-builtin predicates interned so far.
    pub fn interned_count() -> usize {
        TABLE.len()
    }
}

impl Default for NormalPredicate {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Debug for NormalPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalPredicate({:?})", self.0)
    }
}

impl fmt::Display for NormalPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for NormalPredicate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for NormalPredicate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalPredicate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
